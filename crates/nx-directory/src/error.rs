use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Transport-level failure (connect, timeout) or body decode failure.
    #[error("directory request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The directory answered with a non-success status.
    #[error("directory returned {status} for {endpoint}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}
