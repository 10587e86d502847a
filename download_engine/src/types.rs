use std::path::PathBuf;
use uuid::Uuid;

/// One roster cell worth of work: fetch `url` on behalf of the row it
/// came from, labelled by its column.
#[derive(Clone, Debug)]
pub struct DownloadTask {
    /// Unique identifier for the task, ties log lines together.
    pub id: Uuid,
    /// Row identity (e.g. a student name), already trimmed.
    pub subject_label: String,
    /// Column header the URL was found under.
    pub field_label: String,
    /// URL as it appeared in the cell, already trimmed.
    pub url: String,
}

impl DownloadTask {
    pub fn new(
        subject_label: impl Into<String>,
        field_label: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_label: subject_label.into(),
            field_label: field_label.into(),
            url: url.into(),
        }
    }
}

/// What happened to a single task.
#[derive(Clone, Debug)]
pub struct DownloadOutcome {
    pub task: DownloadTask,
    pub success: bool,
    /// Final path on disk, extension included. `None` on failure.
    pub resolved_path: Option<PathBuf>,
    /// Attempts actually made, the successful one included.
    pub attempts: u32,
    pub bytes_written: u64,
}

/// Aggregate counters for one run.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchSummary {
    pub total_attempted: u64,
    pub total_succeeded: u64,
    pub total_bytes: u64,
}

impl BatchSummary {
    pub fn failed(&self) -> u64 {
        self.total_attempted - self.total_succeeded
    }
}
