use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::warn;

use super::{link_builder, truncate, wants_json};
use crate::args::CatalogOptions;
use crate::render::render_table;
use reelcat_core::{config::Config, report, CatalogReport};

#[derive(Serialize)]
struct BatchEntry {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<CatalogReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn run(
    input: &Path,
    parallel: Option<usize>,
    options: &CatalogOptions,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load(config_path)?;
    let parallel = parallel.unwrap_or(config.batch.max_parallel).max(1);
    let json = wants_json(&config, options);

    // Read URLs from file
    let content = fs::read_to_string(input)
        .await
        .context("Failed to read input file")?;
    let urls = parse_url_list(&content);

    if urls.is_empty() {
        eprintln!("No URLs found in input file");
        return Ok(());
    }

    let total_urls = urls.len();
    eprintln!("Probing {} URLs with {} parallel workers\n", total_urls, parallel);

    let semaphore = Arc::new(Semaphore::new(parallel));
    let aborted = Arc::new(AtomicBool::new(false));
    let multi = MultiProgress::new();
    let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")?.tick_chars("=>-");

    let results: Vec<_> = stream::iter(urls.into_iter().enumerate())
        .map(|(idx, url)| {
            let sem = semaphore.clone();
            let aborted = aborted.clone();
            let config = config.clone();
            let format_id = options.format_id.clone();
            let pb = multi.add(ProgressBar::new_spinner());
            pb.set_style(spinner_style.clone());

            async move {
                let _permit = sem.acquire_owned().await;
                let label = format!("[{}/{}] {}", idx + 1, total_urls, truncate(&url, 50));

                if aborted.load(Ordering::SeqCst) {
                    pb.finish_with_message(format!("{} Skipped", label));
                    return (url, None);
                }

                pb.set_message(label.clone());
                pb.enable_steady_tick(std::time::Duration::from_millis(100));

                let result = report::probe(&config, &url, format_id.as_deref()).await;

                match &result {
                    Ok(report) => {
                        pb.finish_with_message(format!(
                            "{} Done: {} formats",
                            label,
                            report.catalog.len()
                        ));
                    }
                    Err(e) => {
                        pb.finish_with_message(format!("{} Failed: {}", label, e));
                        if !config.batch.continue_on_error {
                            aborted.store(true, Ordering::SeqCst);
                        }
                    }
                }

                (url, Some(result))
            }
        })
        .buffer_unordered(parallel)
        .collect()
        .await;

    let mut entries = Vec::with_capacity(results.len());
    let mut skipped = 0;
    for (url, result) in results {
        match result {
            Some(Ok(report)) => entries.push(BatchEntry {
                url,
                report: Some(report),
                error: None,
            }),
            Some(Err(e)) => {
                warn!("{}: {}", url, e);
                entries.push(BatchEntry {
                    url,
                    report: None,
                    error: Some(e.to_string()),
                });
            }
            None => skipped += 1,
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let links = link_builder(&config, options);
        for entry in &entries {
            if let Some(ref report) = entry.report {
                println!("=== {}", entry.url);
                print!("{}", render_table(report, &links)?);
                println!();
            }
        }
    }

    // Summary
    let failed: Vec<_> = entries.iter().filter(|e| e.error.is_some()).collect();

    eprintln!("\n=== Batch Complete ===");
    eprintln!("Succeeded: {}", entries.len() - failed.len());
    eprintln!("Failed: {}", failed.len());
    if skipped > 0 {
        eprintln!("Skipped: {}", skipped);
    }

    if !failed.is_empty() {
        eprintln!("\nFailed URLs:");
        for entry in &failed {
            eprintln!("  {} - {}", entry.url, entry.error.as_deref().unwrap_or_default());
        }
        if !config.batch.continue_on_error {
            anyhow::bail!("Stopped after {} failed URL(s)", failed.len());
        }
    }

    Ok(())
}

/// One URL per line; blank lines and `#` comments are ignored
fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}
