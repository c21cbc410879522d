use std::path::PathBuf;

use tokio::task::JoinHandle;

/// Result of a CSV export
#[derive(Debug)]
pub struct ExportReport {
    pub path: PathBuf,
    /// Data rows written, header excluded
    pub rows: usize,
    /// Usage counter update running in the background. Never fails the export;
    /// await it only to make sure it finished before exiting. `None` when the
    /// export ran without a Tokio runtime.
    pub counter: Option<JoinHandle<()>>,
}
