//! fundlens CLI - startup funding dataset analyzer
//!
//! Usage:
//!   fundlens --file data.csv schema          Show resolved columns
//!   fundlens --file data.csv summary         Headline statistics
//!   fundlens --file data.csv insights        Ranked insight lines
//!   fundlens --file data.csv investors       Investor leaderboard

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use fundlens_core::NormalizeOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let options = NormalizeOptions {
        require_complete: cli.require_complete,
    };
    let record_filter = commands::build_filter(&cli)?;

    match cli.command {
        Commands::Schema => commands::cmd_schema(&cli.file, &options, cli.json),
        Commands::Summary => commands::cmd_summary(&cli.file, &options, &record_filter, cli.json),
        Commands::Insights => commands::cmd_insights(&cli.file, &options, &record_filter, cli.json),
        Commands::Investors { top } => {
            commands::cmd_investors(&cli.file, &options, &record_filter, top, cli.json)
        }
    }
}
