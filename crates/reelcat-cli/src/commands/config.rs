use anyhow::Result;
use std::path::Path;
use reelcat_core::config::Config;

pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    println!("# reelcat configuration\n");
    print!("{}", toml::to_string_pretty(&config)?);
    if config.paths.yt_dlp.is_none() {
        println!("\n# paths.yt_dlp unset: auto-detected from PATH");
    }

    // Show config file locations
    println!("\nConfig file locations (in priority order):");
    if let Some(p) = config_path {
        println!("  1. {} (specified)", p.display());
    }
    if let Some(default_path) = Config::default_path() {
        println!("  2. {}", default_path.display());
    }
    println!("  3. Environment variables (REELCAT_<SECTION>__<KEY>)");

    Ok(())
}
