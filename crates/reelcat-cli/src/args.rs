use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelcat")]
#[command(author, version, about = "List download options for a video URL")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Video URL to probe (shorthand for `probe <URL>`)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    #[command(flatten)]
    pub options: CatalogOptions,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract formats for a URL with yt-dlp and show the catalog
    Probe {
        /// Video URL (YouTube, Instagram, ...)
        url: String,
    },

    /// Build a catalog from a saved extraction response (no network)
    Reconcile {
        /// JSON file with the extraction response (reads stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Probe multiple URLs
    Batch {
        /// File containing URLs (one per line)
        #[arg(short, long)]
        input: PathBuf,

        /// Maximum parallel extractions (defaults to batch.max_parallel)
        #[arg(short, long)]
        parallel: Option<usize>,
    },

    /// Check that yt-dlp is available
    Doctor,

    /// Show configuration
    Config,
}

/// Accepted before or after the subcommand
#[derive(clap::Args, Clone, Debug, Default)]
pub struct CatalogOptions {
    /// Preferred format id for the primary download link
    #[arg(long, value_name = "ID", global = true)]
    pub format_id: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    /// Streaming proxy base URL (overrides links.base_url)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
}
