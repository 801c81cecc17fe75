//! Format extraction using yt-dlp

use crate::config::ExtractConfig;
use crate::descriptor::MediaInfo;
use crate::error::ExtractError;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};
use url::Url;

#[derive(Debug)]
pub struct Extractor {
    yt_dlp_path: PathBuf,
    options: ExtractConfig,
}

impl Extractor {
    pub fn new(yt_dlp_path: PathBuf, options: ExtractConfig) -> Self {
        Self { yt_dlp_path, options }
    }

    /// Probe a media page and return its metadata and raw formats
    pub async fn extract(&self, url: &str) -> Result<MediaInfo, ExtractError> {
        let url = validate_media_url(url)?;
        info!("Extracting formats from: {}", url);

        let mut cmd = Command::new(&self.yt_dlp_path);
        cmd.args(["--dump-single-json", "--skip-download", "--no-warnings"]);
        if self.options.no_check_certificate {
            cmd.arg("--no-check-certificate");
        }
        if self.options.playlist_first_only {
            cmd.args(["--playlist-items", "1"]);
        }
        cmd.arg("--").arg(url.as_str());

        let output = cmd.output().await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ExtractError::YtDlpNotFound,
            _ => ExtractError::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);
            return Err(classify_failure(&stderr, url.as_str(), output.status.code()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let info = MediaInfo::from_json(&stdout)
            .map_err(|e| ExtractError::MetadataParse(e.to_string()))?;

        debug!(
            "Extracted {} formats for {}",
            info.formats.len(),
            info.title.as_deref().unwrap_or("(untitled)")
        );
        Ok(info)
    }
}

fn classify_failure(stderr: &str, url: &str, code: Option<i32>) -> ExtractError {
    if stderr.contains("Video unavailable") || stderr.contains("Private video") {
        ExtractError::VideoUnavailable(url.to_string())
    } else if stderr.contains("Unsupported URL") {
        ExtractError::UnsupportedUrl(url.to_string())
    } else if stderr.contains("is not a valid URL") {
        ExtractError::InvalidUrl(url.to_string())
    } else {
        ExtractError::YtDlpFailed(code)
    }
}

/// Accept absolute http(s) URLs with a host. Reachability is not checked.
pub fn validate_media_url(url: &str) -> Result<Url, ExtractError> {
    let parsed = Url::parse(url.trim()).map_err(|_| ExtractError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(parsed),
        _ => Err(ExtractError::InvalidUrl(url.to_string())),
    }
}
