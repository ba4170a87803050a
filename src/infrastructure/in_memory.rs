use crate::domain::history::{HISTORY_CAPACITY, HistoryEntry};
use crate::domain::ports::HistoryStore;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A thread-safe, size-bounded in-memory history.
///
/// Keeps the most recent `capacity` entries; pushing onto a full history
/// evicts the oldest entry first.
pub struct InMemoryHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl InMemoryHistory {
    /// Creates an empty history holding at most [`HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // A panic while holding the lock cannot leave the deque half-updated,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for InMemoryHistory {
    fn push(&self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.lock();
        while entries.len() >= self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::trace!(label = %evicted.label, "evicted oldest history entry");
            }
        }
        entries.push_back(entry);
    }

    fn entries(&self) -> Vec<HistoryEntry> {
        self.lock().iter().cloned().collect()
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
