pub mod batch;
pub mod config;
pub mod doctor;
pub mod probe;
pub mod reconcile;

use crate::args::CatalogOptions;
use reelcat_core::links::LinkBuilder;
use reelcat_core::Config;

/// Link builder honoring a `--base-url` override
pub fn link_builder(config: &Config, options: &CatalogOptions) -> LinkBuilder {
    let mut links = config.links.clone();
    if let Some(ref base_url) = options.base_url {
        links.base_url = base_url.clone();
    }
    LinkBuilder::from_config(&links)
}

pub fn wants_json(config: &Config, options: &CatalogOptions) -> bool {
    options.json || config.output.json
}

pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
