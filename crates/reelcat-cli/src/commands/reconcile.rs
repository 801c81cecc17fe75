use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

use super::{link_builder, wants_json};
use crate::args::CatalogOptions;
use crate::render::print_report;
use reelcat_core::{config::Config, CatalogReport, MediaInfo};

pub fn run(input: Option<&Path>, options: &CatalogOptions, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    let info = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            MediaInfo::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read extraction response from {}", path.display()))?
        }
        None => MediaInfo::from_reader(io::stdin().lock())
            .context("Failed to read extraction response from stdin")?,
    };
    debug!("Read {} raw formats", info.formats.len());

    let report = CatalogReport::build(&info, options.format_id.as_deref());
    print_report(&report, &link_builder(&config, options), wants_json(&config, options))
}
