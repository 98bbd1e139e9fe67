//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// fundlens - Make sense of messy startup funding CSVs
#[derive(Parser)]
#[command(name = "fundlens")]
#[command(about = "Normalize startup funding datasets and surface insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dataset CSV file
    ///
    /// Always explicit; there is no default dataset location.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Drop rows lacking a date, amount, or startup name
    ///
    /// By default every input row is kept, with nulls where cells could
    /// not be parsed.
    #[arg(long, global = true)]
    pub require_complete: bool,

    /// Earliest year to include (inclusive)
    #[arg(long, global = true)]
    pub year_from: Option<i32>,

    /// Latest year to include (inclusive)
    #[arg(long, global = true)]
    pub year_to: Option<i32>,

    /// Only include these industries (repeatable)
    #[arg(long, global = true)]
    pub industry: Vec<String>,

    /// Only include these sectors (repeatable)
    #[arg(long, global = true)]
    pub sector: Vec<String>,

    /// Only include these cities (repeatable)
    #[arg(long, global = true)]
    pub city: Vec<String>,

    /// Only include these recognition statuses (repeatable):
    /// recognized, not_recognized, unknown
    #[arg(long, global = true)]
    pub recognition: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which columns resolved to which canonical fields
    Schema,

    /// Show headline statistics for the selection
    Summary,

    /// Show ranked insight lines for the selection
    Insights,

    /// Show the investor leaderboard for the selection
    Investors {
        /// Number of investors to show (0 for all)
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}
