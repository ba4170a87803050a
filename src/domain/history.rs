use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of entries kept in the recent history.
pub const HISTORY_CAPACITY: usize = 10;

/// A successful calculation as shown in the recent history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct HistoryEntry {
    /// The calculation name the user selected.
    pub label: String,
    /// The rendered result text.
    pub result: String,
}

impl HistoryEntry {
    pub fn new(label: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Categoría: {} - Resultado: {}", self.label, self.result)
    }
}
