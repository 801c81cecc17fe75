use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use super::{link_builder, truncate, wants_json};
use crate::args::CatalogOptions;
use crate::render::print_report;
use reelcat_core::{config::Config, report};

pub async fn run(url: &str, options: &CatalogOptions, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")?);
    pb.set_message(format!("Extracting formats: {}", truncate(url, 60)));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = report::probe(&config, url, options.format_id.as_deref()).await;

    match result {
        Ok(report) => {
            pb.finish_and_clear();
            print_report(&report, &link_builder(&config, options), wants_json(&config, options))
        }
        Err(e) => {
            pb.abandon_with_message("Extraction failed");
            eprintln!("\nError: {}", e);
            Err(e.into())
        }
    }
}
