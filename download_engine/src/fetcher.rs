use crate::download_config::DownloadConfig;
use crate::errors::DownloadError;
use crate::extension::resolve_extension;
use crate::types::{DownloadOutcome, DownloadTask};
use futures_util::StreamExt;
use reqwest::{Client, header};
use std::path::PathBuf;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Downloads a single resource with retry.
///
/// One `Fetcher` is built per run and reused across tasks so the
/// client's connection pool carries over. The destination is opened
/// with truncate: a task resolving to an existing path overwrites it.
/// A failed attempt may leave a partial file behind; it is not removed.
pub struct Fetcher {
    client: Client,
    config: DownloadConfig,
}

impl Fetcher {
    pub fn new(config: DownloadConfig) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetches `task.url` into the download directory under
    /// `base_filename`, extending the name with a resolved extension.
    ///
    /// Transport failures (request errors, timeouts, non-2xx statuses,
    /// broken body streams) are retried up to `max_retries` attempts
    /// with a fixed pause in between; local filesystem failures end the
    /// task at once.
    pub async fn fetch(&self, task: &DownloadTask, base_filename: &str) -> DownloadOutcome {
        let mut attempts = 0;

        while attempts < self.config.max_retries {
            attempts += 1;
            info!(
                task = %task.id,
                url = %task.url,
                attempt = attempts,
                "downloading {}",
                base_filename
            );

            match self.attempt(&task.url, base_filename).await {
                Ok((path, bytes_written)) => {
                    info!(task = %task.id, path = %path.display(), "download complete");
                    return DownloadOutcome {
                        task: task.clone(),
                        success: true,
                        resolved_path: Some(path),
                        attempts,
                        bytes_written,
                    };
                }
                Err(err) if err.is_transport() => {
                    warn!(task = %task.id, attempt = attempts, "transport failure: {}", err);
                    if attempts < self.config.max_retries {
                        debug!(task = %task.id, "retrying in {:?}", self.config.retry_delay);
                        sleep(self.config.retry_delay).await;
                    }
                }
                Err(err) => {
                    warn!(task = %task.id, attempt = attempts, "giving up: {}", err);
                    break;
                }
            }
        }

        DownloadOutcome {
            task: task.clone(),
            success: false,
            resolved_path: None,
            attempts,
            bytes_written: 0,
        }
    }

    async fn attempt(
        &self,
        url: &str,
        base_filename: &str,
    ) -> Result<(PathBuf, u64), DownloadError> {
        let response = match self.client.get(url).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    return Err(DownloadError::HttpStatusError(response.status()));
                }
                response
            }
            Err(err) => {
                return Err(DownloadError::HttpRequestError(err));
            }
        };

        // The final URL after redirects, not the one we were handed.
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .map(|val| val.to_string());
        let extension = resolve_extension(response.url(), content_type.as_deref());

        let mut filename = base_filename.to_string();
        if !extension.is_empty() && !filename.ends_with(&extension) {
            filename.push_str(&extension);
        }

        fs::create_dir_all(&self.config.download_dir).await?;
        let path = self.config.download_dir.join(&filename);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .await?;
        let mut writer = BufWriter::with_capacity(self.config.buffer_size, file);

        let mut bytes_written: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            match chunk {
                Ok(chunk) => {
                    if chunk.is_empty() {
                        continue;
                    }
                    writer
                        .write_all(&chunk)
                        .await
                        .map_err(DownloadError::from_write_error)?;
                    bytes_written += chunk.len() as u64;
                }
                Err(err) => {
                    return Err(DownloadError::HttpRequestError(err));
                }
            }
        }

        writer
            .flush()
            .await
            .map_err(DownloadError::from_write_error)?;

        Ok((path, bytes_written))
    }
}
