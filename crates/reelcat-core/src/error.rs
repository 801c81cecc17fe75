//! Error types for reelcat-core
//!
//! Reconciliation itself never fails; these cover the collaborators around it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReelcatError>;

#[derive(Error, Debug)]
pub enum ReelcatError {
    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Invalid extraction response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("yt-dlp not found. Install with: pip install yt-dlp")]
    YtDlpNotFound,

    #[error("yt-dlp failed with exit code: {0:?}")]
    YtDlpFailed(Option<i32>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("Video unavailable or private: {0}")]
    VideoUnavailable(String),

    #[error("Failed to parse metadata: {0}")]
    MetadataParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkError {
    #[error("Format has no media URL")]
    MissingUrl,
}
