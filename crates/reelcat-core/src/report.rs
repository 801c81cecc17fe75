//! Catalog plus the pass-through metadata shown alongside it

use crate::catalog::{reconcile, Catalog};
use crate::descriptor::MediaInfo;
use crate::error::Result;
use crate::extractor::{validate_media_url, Extractor};
use crate::select::select_download_url;
use crate::Config;
use serde::Serialize;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub id: Option<String>,
    pub title: Option<String>,
    pub uploader: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    /// Raw format count before reconciliation
    pub format_count: usize,
    pub download_url: Option<String>,
    pub catalog: Catalog,
}

impl CatalogReport {
    pub fn build(info: &MediaInfo, requested_format_id: Option<&str>) -> Self {
        Self {
            id: info.id.clone(),
            title: info.title.clone(),
            uploader: info.uploader.clone(),
            thumbnail: info.thumbnail.clone(),
            duration: info.duration,
            format_count: info.formats.len(),
            download_url: select_download_url(&info.formats, requested_format_id)
                .map(String::from),
            catalog: reconcile(&info.formats),
        }
    }
}

/// Extract `url` with yt-dlp and reconcile its formats
pub async fn probe(
    config: &Config,
    url: &str,
    requested_format_id: Option<&str>,
) -> Result<CatalogReport> {
    extract_report(config, url, requested_format_id, std::env::var_os("PATH")).await
}

/// A bad URL is reported before yt-dlp is looked up in `search_path`
async fn extract_report(
    config: &Config,
    url: &str,
    requested_format_id: Option<&str>,
    search_path: Option<OsString>,
) -> Result<CatalogReport> {
    validate_media_url(url)?;
    let extractor = Extractor::new(config.yt_dlp_path_in(search_path)?, config.extract.clone());
    let info = extractor.extract(url).await?;
    Ok(CatalogReport::build(&info, requested_format_id))
}
