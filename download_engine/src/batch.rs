use crate::column_select::{field_base_label, usable_subject};
use crate::download_config::DownloadConfig;
use crate::errors::DownloadError;
use crate::fetcher::Fetcher;
use crate::sanitize::sanitize_label;
use crate::types::{BatchSummary, DownloadTask};
use tokio::time::sleep;
use tracing::{info, warn};

/// Runs a list of tasks strictly in input order, one at a time.
pub struct Batch {
    fetcher: Fetcher,
    config: DownloadConfig,
}

impl Batch {
    pub fn new(config: DownloadConfig) -> Result<Self, DownloadError> {
        let fetcher = Fetcher::new(config.clone())?;
        Ok(Self { fetcher, config })
    }

    /// Processes every task sequentially and returns the aggregate
    /// counts.
    ///
    /// Tasks with an unusable subject label or a non-http(s) URL are
    /// skipped without touching the counters. Everything else counts
    /// as attempted before its fetch starts, so the attempted counter
    /// never trails the succeeded one. A failed task never stops the
    /// batch.
    pub async fn run(&self, tasks: &[DownloadTask]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for task in tasks {
            if !usable_subject(&task.subject_label) {
                warn!(task = %task.id, "skipping: no usable subject label");
                continue;
            }
            if !(task.url.starts_with("http://") || task.url.starts_with("https://")) {
                warn!(
                    task = %task.id,
                    subject = %task.subject_label,
                    "skipping: invalid URL format: {}",
                    task.url
                );
                continue;
            }

            let base_filename = self.base_filename(task);

            summary.total_attempted += 1;
            let outcome = self.fetcher.fetch(task, &base_filename).await;
            if outcome.success {
                summary.total_succeeded += 1;
                summary.total_bytes += outcome.bytes_written;
            } else {
                warn!(
                    task = %task.id,
                    subject = %task.subject_label,
                    attempts = outcome.attempts,
                    "failed to download {}",
                    base_filename
                );
            }

            // Politeness pause, not a correctness requirement.
            sleep(self.config.task_delay).await;
        }

        info!(
            attempted = summary.total_attempted,
            succeeded = summary.total_succeeded,
            failed = summary.failed(),
            "batch finished"
        );

        summary
    }

    /// `{subject}_{field}` with both parts sanitized and the download
    /// marker stripped from the field label.
    fn base_filename(&self, task: &DownloadTask) -> String {
        let field = field_base_label(&task.field_label, &self.config.field_marker);
        format!(
            "{}_{}",
            sanitize_label(&task.subject_label),
            sanitize_label(&field)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_config() -> DownloadConfig {
        DownloadConfig {
            task_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn skipped_tasks_never_touch_the_counters() {
        let batch = Batch::new(offline_config()).unwrap();
        let tasks = vec![
            DownloadTask::new("", "资料下载", "https://host/a.pdf"),
            DownloadTask::new("nan", "资料下载", "https://host/b.pdf"),
            DownloadTask::new("李四", "资料下载", "not-a-url"),
            DownloadTask::new("王五", "资料下载", "ftp://host/c.pdf"),
        ];

        let summary = batch.run(&tasks).await;
        assert_eq!(summary.total_attempted, 0);
        assert_eq!(summary.total_succeeded, 0);
        assert_eq!(summary.failed(), 0);
    }

    #[test]
    fn base_filename_strips_marker_and_sanitizes() {
        let batch = Batch::new(offline_config()).unwrap();

        let task = DownloadTask::new("张三", "资料下载", "https://host/a.pdf");
        assert_eq!(batch.base_filename(&task), "张三_资料");

        let task = DownloadTask::new("张/三", "下载", "https://host/a.pdf");
        assert_eq!(batch.base_filename(&task), "张_三_文件");
    }
}
