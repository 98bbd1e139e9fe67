//! CLI command implementations
//!
//! Each command loads the dataset from the explicit `--file` path, applies
//! the selection filters, and prints either text or JSON.

use std::path::Path;

use anyhow::{Context, Result};

use fundlens_core::schema::CanonicalField;
use fundlens_core::{Dataset, NormalizeOptions, RecordFilter, Recognition};

use crate::cli::Cli;

/// Build the record filter from the CLI's selection flags
pub fn build_filter(cli: &Cli) -> Result<RecordFilter> {
    let year_range = if cli.year_from.is_some() || cli.year_to.is_some() {
        Some((
            cli.year_from.unwrap_or(i32::MIN),
            cli.year_to.unwrap_or(i32::MAX),
        ))
    } else {
        None
    };

    let recognition = if cli.recognition.is_empty() {
        None
    } else {
        Some(
            cli.recognition
                .iter()
                .map(|s| {
                    s.parse::<Recognition>()
                        .map_err(|e| anyhow::anyhow!("--recognition: {}", e))
                })
                .collect::<Result<Vec<_>>>()?,
        )
    };

    let to_set = |values: &[String]| -> Option<Vec<String>> {
        if values.is_empty() {
            None
        } else {
            Some(values.to_vec())
        }
    };

    Ok(RecordFilter {
        year_range,
        industries: to_set(&cli.industry),
        sectors: to_set(&cli.sector),
        cities: to_set(&cli.city),
        recognition,
    })
}

/// Load the dataset and apply the selection; shared by every command
pub fn load_dataset(file: &Path, options: &NormalizeOptions, filter: &RecordFilter) -> Result<Dataset> {
    let dataset = Dataset::load_path(file, options)
        .with_context(|| format!("Failed to load dataset from {}", file.display()))?;

    if dataset.is_degraded() {
        let missing: Vec<&str> = dataset
            .fields()
            .missing_critical()
            .iter()
            .map(|f| f.as_str())
            .collect();
        eprintln!(
            "⚠️  No column matched: {}. Totals and per-startup views are reduced.",
            missing.join(", ")
        );
    }

    let filtered = dataset.filter(filter);
    tracing::debug!(
        loaded = dataset.records().len(),
        selected = filtered.records().len(),
        "Applied selection filters"
    );
    Ok(filtered)
}

pub fn cmd_schema(file: &Path, options: &NormalizeOptions, json: bool) -> Result<()> {
    // Schema only depends on the header row; selection flags don't apply
    let dataset = Dataset::load_path(file, options)
        .with_context(|| format!("Failed to load dataset from {}", file.display()))?;
    let fields = dataset.fields();

    if json {
        println!("{}", serde_json::to_string_pretty(fields)?);
        return Ok(());
    }

    println!();
    println!("📋 Resolved schema");
    for field in CanonicalField::ALL {
        match fields.column(field) {
            Some(column) => println!("   {:12} ← {}", field.as_str(), column),
            None => println!("   {:12}   (unresolved)", field.as_str()),
        }
    }
    if fields.sector_from_industry {
        println!("   (sector shares the industry column)");
    }
    if dataset.is_degraded() {
        println!("   ⚠️  degraded: no usable amount or startup column");
    }
    println!();
    Ok(())
}

pub fn cmd_summary(
    file: &Path,
    options: &NormalizeOptions,
    filter: &RecordFilter,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(file, options, filter)?;
    let stats = dataset.summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if stats.rows == 0 {
        println!("No data under the current filters.");
        return Ok(());
    }

    println!();
    println!("💰 Summary ({} rounds)", stats.rows);
    println!("   Total funding: ${:.0}", stats.total_funding_usd);
    println!("   Startups: {}", stats.startups);
    match stats.avg_round_usd {
        Some(avg) => println!("   Avg round: ${:.0}", avg),
        None => println!("   Avg round: n/a"),
    }
    println!(
        "   Recognition: {} recognized / {} not recognized / {} unknown",
        stats.recognition.recognized,
        stats.recognition.not_recognized,
        stats.recognition.unknown
    );
    let parse = dataset.parse_stats();
    if parse.amount_failures > 0 || parse.date_failures > 0 {
        println!(
            "   (unparseable cells: {} amounts, {} dates)",
            parse.amount_failures, parse.date_failures
        );
    }
    println!();
    Ok(())
}

pub fn cmd_insights(
    file: &Path,
    options: &NormalizeOptions,
    filter: &RecordFilter,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(file, options, filter)?;
    let findings = dataset.insights();

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
        return Ok(());
    }

    println!();
    println!("💡 Insights");
    for finding in &findings {
        println!("   {}. {}", finding.rank, finding.text);
    }
    println!();
    Ok(())
}

pub fn cmd_investors(
    file: &Path,
    options: &NormalizeOptions,
    filter: &RecordFilter,
    top: usize,
    json: bool,
) -> Result<()> {
    let dataset = load_dataset(file, options, filter)?;
    let leaderboard = dataset.investor_leaderboard(top);

    if json {
        println!("{}", serde_json::to_string_pretty(&leaderboard)?);
        return Ok(());
    }

    if leaderboard.is_empty() {
        println!("No investors found under the current filters.");
        return Ok(());
    }

    println!();
    println!("🏆 Top investors");
    for (i, stats) in leaderboard.iter().enumerate() {
        println!(
            "   {:2}. {:30} {:4} deals  ${:.0}",
            i + 1,
            stats.investor,
            stats.deals,
            stats.amount_usd
        );
    }
    println!();
    Ok(())
}
