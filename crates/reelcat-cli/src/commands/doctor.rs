use anyhow::Result;
use std::path::Path;
use tokio::process::Command;
use which::which;

use reelcat_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    println!("reelcat dependency check\n");

    let mut all_ok = true;

    // Config
    print!("config:        ");
    let config = match Config::load(config_path) {
        Ok(config) => {
            println!("OK");
            config
        }
        Err(e) => {
            println!("INVALID ({})", e);
            all_ok = false;
            Config::default()
        }
    };

    // Check yt-dlp
    print!("yt-dlp:        ");
    let yt_dlp = match config.paths.yt_dlp {
        Some(ref path) => Ok(path.clone()),
        None => which("yt-dlp"),
    };
    match yt_dlp {
        Ok(path) => match Command::new(&path).arg("--version").output().await {
            Ok(out) if out.status.success() => {
                let v = String::from_utf8_lossy(&out.stdout);
                println!("OK ({}, {})", v.trim(), path.display());
            }
            _ => {
                println!("FOUND at {} but failed to get version", path.display());
                all_ok = false;
            }
        },
        Err(_) => {
            println!("NOT FOUND");
            println!("               Install with: pip install yt-dlp");
            all_ok = false;
        }
    }

    // Streaming proxy
    print!("stream proxy:  ");
    if config.links.base_url.is_empty() {
        println!("relative links (/stream)");
    } else {
        println!("{}", config.links.base_url);
    }

    println!();
    if all_ok {
        println!("All dependencies OK!");
    } else {
        println!("Some dependencies are missing. See above for installation instructions.");
    }

    Ok(())
}
