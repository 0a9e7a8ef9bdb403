// src/progress.rs
/// Lightweight progress reporting used by the batch runner.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page produced `_records` records.
    fn item_done(&mut self, _page: &str, _records: usize) {}

    /// One page produced nothing (no date anchors, unreadable, or the extractor panicked).
    fn item_failed(&mut self, _page: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
