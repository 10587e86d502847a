use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Capacity of the buffered file writer.
    pub buffer_size: usize,
    /// Attempts per task, the first try included.
    pub max_retries: u32,
    /// Pause between attempts of the same task.
    pub retry_delay: Duration,
    /// Pause after every attempted task.
    pub task_delay: Duration,
    /// Connect and read timeout for a single attempt.
    pub timeout: Duration,
    /// User-Agent sent with every request. Some hosts refuse requests
    /// from generic client agents.
    pub user_agent: String,
    /// Directory downloads land in, created on demand.
    pub download_dir: PathBuf,
    /// Substring marking download columns; stripped from field labels
    /// when deriving filenames.
    pub field_marker: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            buffer_size: 1024 * 8,
            max_retries: 3,
            retry_delay: Duration::from_secs(2),
            task_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .into(),
            download_dir: PathBuf::from("downloads"),
            field_marker: "下载".into(),
        }
    }
}
