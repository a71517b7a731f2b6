//! Progress reporting seam between the pipeline and its consumer.
//!
//! The pipeline never prints; it reports events through this trait and the
//! CLI decides how to render them. Implementations must be `Sync` because
//! parallel runs report from worker threads.

use std::path::Path;

/// Receiver for pipeline progress events. All methods default to no-ops so
/// consumers implement only what they render.
pub trait Progress: Sync {
    /// Input enumeration finished; `count` files will be processed.
    fn files_found(&self, count: usize) {
        let _ = count;
    }

    /// Processing of one input file is starting. `index` is 1-based.
    fn file_started(&self, index: usize, total: usize, path: &Path) {
        let _ = (index, total, path);
    }

    /// The `url` column of the current file yielded `count` URLs.
    fn urls_extracted(&self, count: usize) {
        let _ = count;
    }

    /// Periodic tick within one file: `done` of `total` URLs processed.
    fn urls_processed(&self, done: usize, total: usize) {
        let _ = (done, total);
    }
}

/// Silent progress receiver for tests and library consumers.
pub struct NoProgress;

impl Progress for NoProgress {}
