use super::history::HistoryEntry;

/// Storage for the recent calculation history.
///
/// Implementations own the capacity policy; callers only append, read and
/// clear. Methods take `&self` so a store can sit behind a shared dispatcher.
pub trait HistoryStore: Send + Sync {
    fn push(&self, entry: HistoryEntry);
    /// Entries oldest first.
    fn entries(&self) -> Vec<HistoryEntry>;
    fn clear(&self);
}

pub type HistoryStoreBox = Box<dyn HistoryStore>;
