//! Shared fixtures for in-crate tests

use crate::models::{NormalizedRecord, RawTable, Recognition};
use crate::normalize::{self, NormalizeOptions};
use crate::schema::{self, FieldMap};

/// Hand-build a normalized record with the fields tests care about
pub fn record(
    startup: &str,
    year: Option<i32>,
    amount: Option<f64>,
    industry: Option<&str>,
    city: Option<&str>,
    investors: Option<&str>,
) -> NormalizedRecord {
    NormalizedRecord {
        row: 0,
        date: None,
        year,
        startup: startup.to_string(),
        city: city.map(|s| s.to_string()),
        industry: industry.map(|s| s.to_string()),
        sector: None,
        amount_usd: amount,
        investors: investors.map(|s| s.to_string()),
        recognition: Recognition::Unknown,
    }
}

/// A small dataset run through the real resolve + normalize pipeline:
/// $1,000 Fintech/Bengaluru in 2020, $2,000 Fintech/Bengaluru in 2021,
/// ₹500 Health/Mumbai in 2021.
pub fn sample_records() -> (Vec<NormalizedRecord>, FieldMap) {
    let table = RawTable::new(
        vec![
            "Date".to_string(),
            "Startup Name".to_string(),
            "Industry Vertical".to_string(),
            "City".to_string(),
            "Amount in USD".to_string(),
            "Investors Name".to_string(),
        ],
        vec![
            vec![
                "01/10/2020".to_string(),
                "Acme Pay".to_string(),
                "Fintech".to_string(),
                "Bengaluru".to_string(),
                "$1,000".to_string(),
                "Sequoia, Accel".to_string(),
            ],
            vec![
                "03/15/2021".to_string(),
                "PayZen".to_string(),
                "Fintech".to_string(),
                "Bengaluru".to_string(),
                "$2,000".to_string(),
                "Sequoia".to_string(),
            ],
            vec![
                "06/20/2021".to_string(),
                "HealthKart".to_string(),
                "Health".to_string(),
                "Mumbai".to_string(),
                "₹500".to_string(),
                "Tiger Global".to_string(),
            ],
        ],
    );

    let fields = schema::resolve(&table.columns);
    let (records, _) = normalize::normalize(&table, &fields, &NormalizeOptions::default());
    (records, fields)
}
