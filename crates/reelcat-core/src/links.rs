//! Links into the streaming proxy (`GET /stream`)
//!
//! The proxy takes `url`, and optionally `download=1` plus `filename` to
//! answer with an attachment.

use crate::config::LinksConfig;
use crate::descriptor::FormatDescriptor;
use crate::error::LinkError;
use url::form_urlencoded;

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    default_title: String,
    default_ext: String,
}

/// Download and stream links for one format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLinks {
    pub download: String,
    pub stream: String,
}

impl LinkBuilder {
    pub fn new(base_url: &str) -> Self {
        let defaults = LinksConfig {
            base_url: base_url.to_string(),
            ..crate::Config::default().links
        };
        Self::from_config(&defaults)
    }

    pub fn from_config(config: &LinksConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_title: config.default_title.clone(),
            default_ext: config.default_ext.clone(),
        }
    }

    /// Inline playback through the proxy
    pub fn stream_link(&self, media_url: &str) -> Result<String, LinkError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("url", non_empty(media_url)?)
            .finish();
        Ok(self.endpoint(&query))
    }

    /// Attachment download through the proxy
    pub fn download_link(&self, media_url: &str, filename: &str) -> Result<String, LinkError> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("download", "1")
            .append_pair("filename", filename)
            .append_pair("url", non_empty(media_url)?)
            .finish();
        Ok(self.endpoint(&query))
    }

    pub fn thumbnail_link(&self, thumbnail_url: &str) -> Result<String, LinkError> {
        self.stream_link(thumbnail_url)
    }

    /// `<title>.<ext>`, falling back to the configured defaults
    pub fn download_filename(&self, title: Option<&str>, ext: Option<&str>) -> String {
        let title = title.filter(|t| !t.is_empty()).unwrap_or(&self.default_title);
        let ext = ext.filter(|e| !e.is_empty()).unwrap_or(&self.default_ext);
        sanitize_filename(&format!("{}.{}", title, ext))
    }

    pub fn links_for(
        &self,
        format: &FormatDescriptor,
        title: Option<&str>,
    ) -> Result<FormatLinks, LinkError> {
        let media_url = format.media_url().ok_or(LinkError::MissingUrl)?;
        let filename = self.download_filename(title, format.ext.as_deref());
        Ok(FormatLinks {
            download: self.download_link(media_url, &filename)?,
            stream: self.stream_link(media_url)?,
        })
    }

    fn endpoint(&self, query: &str) -> String {
        format!("{}/stream?{}", self.base_url, query)
    }
}

fn non_empty(media_url: &str) -> Result<&str, LinkError> {
    if media_url.is_empty() {
        Err(LinkError::MissingUrl)
    } else {
        Ok(media_url)
    }
}

/// Sanitize filename for filesystem
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            _ => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
