//! Configuration management for reelcat

use crate::error::{ConfigError, ExtractError};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub extract: ExtractConfig,
    pub links: LinksConfig,
    pub batch: BatchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Pass --no-check-certificate to yt-dlp
    pub no_check_certificate: bool,
    /// Ask yt-dlp for the first playlist item only
    pub playlist_first_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Base URL of the streaming proxy (empty for relative links)
    pub base_url: String,
    /// Title used for download filenames when the media has none
    pub default_title: String,
    /// Extension used for download filenames when the format has none
    pub default_ext: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Maximum parallel extractions
    pub max_parallel: usize,
    /// Continue on error
    pub continue_on_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print catalogs as JSON instead of a table
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig { yt_dlp: None },
            extract: ExtractConfig {
                no_check_certificate: true,
                playlist_first_only: true,
            },
            links: LinksConfig {
                base_url: String::new(),
                default_title: "video".to_string(),
                default_ext: "mp4".to_string(),
            },
            batch: BatchConfig {
                max_parallel: 4,
                continue_on_error: true,
            },
            output: OutputConfig { json: false },
        }
    }
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()));

        // Load from default config directory
        if let Some(default_config) = Self::default_path() {
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        // Load from specified config file
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment
        figment = figment.merge(Env::prefixed("REELCAT_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Location of the per-user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("reelcat/config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.max_parallel == 0 {
            return Err(ConfigError::InvalidValue(
                "batch.max_parallel must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Get yt-dlp path, auto-detecting from PATH if not configured
    pub fn yt_dlp_path(&self) -> Result<PathBuf, ExtractError> {
        self.yt_dlp_path_in(std::env::var_os("PATH"))
    }

    /// Like [`Config::yt_dlp_path`], but auto-detects in `search_path`
    pub fn yt_dlp_path_in(&self, search_path: Option<OsString>) -> Result<PathBuf, ExtractError> {
        match self.paths.yt_dlp {
            Some(ref path) => Ok(path.clone()),
            None => which::which_in("yt-dlp", search_path, ".")
                .map_err(|_| ExtractError::YtDlpNotFound),
        }
    }
}
