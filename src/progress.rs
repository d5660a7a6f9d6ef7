// src/progress.rs
/// Lightweight progress reporting for a collection run.
/// Frontends implement this to surface status to users. Every callback runs
/// on the aggregating (calling) thread, never on a page worker.
pub trait Progress {
    /// Called once the page count is known.
    fn begin(&mut self, _total_pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// All mods from `page` have been aggregated.
    fn page_done(&mut self, _page: u32, _mods: usize) {}

    /// `page` contributed nothing.
    fn page_failed(&mut self, _page: u32, _reason: &str) {}

    /// Every page has settled and the stat ranges are frozen; scoring starts.
    fn scoring(&mut self, _mods: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
