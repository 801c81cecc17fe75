mod args;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let filter = match cli.verbose {
        0 => "reelcat=info,reelcat_core=info",
        1 => "reelcat=debug,reelcat_core=debug",
        2 => "reelcat=trace,reelcat_core=trace",
        _ => "trace",
    };

    // stdout is reserved for catalog output
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Some(Commands::Probe { url }) => {
            commands::probe::run(&url, &cli.options, cli.config.as_deref()).await
        }
        Some(Commands::Reconcile { input }) => {
            commands::reconcile::run(input.as_deref(), &cli.options, cli.config.as_deref())
        }
        Some(Commands::Batch { input, parallel }) => {
            commands::batch::run(&input, parallel, &cli.options, cli.config.as_deref()).await
        }
        Some(Commands::Doctor) => commands::doctor::run(cli.config.as_deref()).await,
        Some(Commands::Config) => commands::config::run(cli.config.as_deref()),
        None => {
            // If URL provided directly, treat as probe command
            if let Some(url) = cli.url {
                commands::probe::run(&url, &cli.options, cli.config.as_deref()).await
            } else {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
