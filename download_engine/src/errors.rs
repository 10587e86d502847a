use reqwest;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DownloadError {
    /// An error occurred while making an HTTP request.
    #[error("HTTP request failed: {0}")]
    HttpRequestError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP status {0}")]
    HttpStatusError(reqwest::StatusCode),

    /// Failed to create or access the output file.
    #[error("File system error: {0}")]
    FileSystemError(#[from] io::Error),

    /// Error occurred while writing to the file.
    #[error("Write error: {0}")]
    WriteError(String),

    /// General error for unexpected scenarios.
    #[error("Unexpected error: {0}")]
    GeneralError(String),
}

impl DownloadError {
    /// Creates a `DownloadError::WriteError` from an I/O error.
    pub fn from_write_error(err: io::Error) -> Self {
        DownloadError::WriteError(err.to_string())
    }

    /// Create a `DownloadError::GeneralError` with a custom message.
    pub fn general(msg: impl Into<String>) -> Self {
        DownloadError::GeneralError(msg.into())
    }

    /// Whether the failure came from the network rather than the local
    /// system. Only transport failures are retried.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DownloadError::HttpRequestError(_) | DownloadError::HttpStatusError(_)
        )
    }
}
