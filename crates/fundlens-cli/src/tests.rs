//! CLI command tests

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tempfile::NamedTempFile;

use fundlens_core::{NormalizeOptions, Recognition};

use crate::cli::Cli;
use crate::commands;

/// Write a small funding dataset to a temp CSV file
fn sample_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "Date,Startup Name,Industry Vertical,City,Amount in USD,Investors Name,Is MeitY Recognized"
    )
    .unwrap();
    writeln!(
        file,
        "01/10/2020,Acme Pay,Fintech,Bengaluru,\"$1,000\",\"Sequoia, Accel\",Yes"
    )
    .unwrap();
    writeln!(
        file,
        "03/15/2021,PayZen,Fintech,Bengaluru,\"$2,000\",Sequoia,no"
    )
    .unwrap();
    writeln!(
        file,
        "06/20/2021,HealthKart,Health,Mumbai,undisclosed,Tiger Global,bogus"
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(args)
}

#[test]
fn test_build_filter_defaults_match_everything() {
    let cli = parse(&["fundlens", "--file", "x.csv", "insights"]);
    let filter = commands::build_filter(&cli).unwrap();
    assert!(filter.year_range.is_none());
    assert!(filter.industries.is_none());
    assert!(filter.recognition.is_none());
}

#[test]
fn test_build_filter_from_flags() {
    let cli = parse(&[
        "fundlens",
        "--file",
        "x.csv",
        "--year-from",
        "2020",
        "--industry",
        "Fintech",
        "--recognition",
        "unknown",
        "insights",
    ]);
    let filter = commands::build_filter(&cli).unwrap();
    assert_eq!(filter.year_range, Some((2020, i32::MAX)));
    assert_eq!(filter.industries, Some(vec!["Fintech".to_string()]));
    assert_eq!(filter.recognition, Some(vec![Recognition::Unknown]));
}

#[test]
fn test_build_filter_rejects_bad_recognition() {
    let cli = parse(&[
        "fundlens",
        "--file",
        "x.csv",
        "--recognition",
        "maybe",
        "insights",
    ]);
    assert!(commands::build_filter(&cli).is_err());
}

#[test]
fn test_load_dataset_applies_filter() {
    let file = sample_csv();
    let cli = parse(&[
        "fundlens",
        "--file",
        file.path().to_str().unwrap(),
        "--year-from",
        "2021",
        "insights",
    ]);
    let filter = commands::build_filter(&cli).unwrap();
    let dataset =
        commands::load_dataset(file.path(), &NormalizeOptions::default(), &filter).unwrap();
    assert_eq!(dataset.records().len(), 2);
}

#[test]
fn test_load_dataset_missing_file() {
    let filter = Default::default();
    let result = commands::load_dataset(
        &PathBuf::from("/nonexistent/funding.csv"),
        &NormalizeOptions::default(),
        &filter,
    );
    assert!(result.is_err());
}

#[test]
fn test_commands_run_on_sample_data() {
    let file = sample_csv();
    let options = NormalizeOptions::default();
    let filter = Default::default();

    assert!(commands::cmd_schema(file.path(), &options, false).is_ok());
    assert!(commands::cmd_summary(file.path(), &options, &filter, false).is_ok());
    assert!(commands::cmd_insights(file.path(), &options, &filter, false).is_ok());
    assert!(commands::cmd_investors(file.path(), &options, &filter, 5, false).is_ok());
}

#[test]
fn test_commands_json_output() {
    let file = sample_csv();
    let options = NormalizeOptions::default();
    let filter = Default::default();

    assert!(commands::cmd_schema(file.path(), &options, true).is_ok());
    assert!(commands::cmd_insights(file.path(), &options, &filter, true).is_ok());
}

#[test]
fn test_require_complete_mode() {
    let file = sample_csv();
    let options = NormalizeOptions {
        require_complete: true,
    };
    let filter = Default::default();
    // The undisclosed-amount row is dropped in this mode
    let dataset = commands::load_dataset(file.path(), &options, &filter).unwrap();
    assert_eq!(dataset.records().len(), 2);
}
