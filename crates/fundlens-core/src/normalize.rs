//! Value normalization: coerce raw cells into canonical typed columns
//!
//! Every coercion here is a total function. A cell either parses or lands
//! on its null/Unknown sentinel; no row can fail the pipeline. Parse
//! failures are tallied per field and logged once per load.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{NormalizedRecord, RawTable, Recognition};
use crate::schema::{CanonicalField, FieldMap};

/// Tokens that mean "no value" wherever they appear, case-insensitively
const NULL_TOKENS: [&str; 4] = ["undisclosed", "nan", "none", "n/a"];

/// Currency codes that ride along with amounts as words
const CURRENCY_CODES: [&str; 4] = ["rs.", "rs", "usd", "inr"];

/// Normalization options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Drop rows that lack a date, an amount, or a real startup name.
    /// Off by default: incomplete rows are kept with null fields so the
    /// row count matches the input.
    pub require_complete: bool,
}

/// Per-load coercion counters, for observability only
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Input rows seen
    pub rows: usize,
    /// Amount cells that held a value but would not parse
    pub amount_failures: usize,
    /// Date cells that held a value but would not parse
    pub date_failures: usize,
    /// Rows dropped by `require_complete`
    pub dropped_incomplete: usize,
}

/// Whether a trimmed cell is empty or one of the null sentinels
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || NULL_TOKENS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

/// Trim a free-text cell, mapping empty and sentinel values to None
fn clean_text(value: &str) -> Option<String> {
    if is_null_token(value) {
        None
    } else {
        Some(value.trim().to_string())
    }
}

fn strip_currency_code(s: &str) -> &str {
    let mut out = s;
    loop {
        if !out.is_ascii() {
            return out;
        }
        let lower = out.to_lowercase();
        let mut changed = false;
        for code in CURRENCY_CODES {
            if lower.starts_with(code) {
                out = &out[code.len()..];
                changed = true;
                break;
            }
            if lower.ends_with(code) {
                out = &out[..out.len() - code.len()];
                changed = true;
                break;
            }
        }
        if !changed {
            return out;
        }
    }
}

/// Clean a raw amount cell into a funding amount in USD.
///
/// Strips currency symbols, thousands separators, and currency-code words;
/// treats sentinel tokens as null; accounting parentheses mean negative.
/// Negative results are floored to None: a negative funding round is
/// treated the same as an unparseable cell, so returned amounts are never
/// negative.
pub fn clean_amount(raw: &str) -> Option<f64> {
    if is_null_token(raw) {
        return None;
    }

    let cleaned: String = raw
        .trim()
        .replace(['$', '₹', '€', '£', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");
    let cleaned = strip_currency_code(&cleaned);

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Parse a date cell in various common formats
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    // Month-first formats are tried before day-first, so ambiguous dates
    // resolve deterministically toward the US convention.
    let formats = [
        "%m/%d/%Y",  // 01/15/2024
        "%m/%d/%y",  // 01/15/24
        "%Y-%m-%d",  // 2024-01-15
        "%d-%m-%Y",  // 15-01-2024
        "%m-%d-%Y",  // 01-15-2024
        "%d/%m/%Y",  // 15/01/2024 (European)
        "%Y/%m/%d",  // 2024/01/15
        "%d %b %Y",  // 15 Jan 2024
        "%b %d, %Y", // Jan 15, 2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    None
}

/// Normalize a raw table into canonical typed records.
///
/// One output record per input row unless `require_complete` is set.
/// Missing startup names get the positional placeholder `startup_<row#>`
/// (1-based) so every record has a usable display name.
pub fn normalize(
    table: &RawTable,
    fields: &FieldMap,
    options: &NormalizeOptions,
) -> (Vec<NormalizedRecord>, ParseStats) {
    // Column positions are fixed per load; look them up once.
    let position = |field: CanonicalField| -> Option<usize> {
        fields.column(field).and_then(|c| table.column_position(c))
    };
    let date_col = position(CanonicalField::Date);
    let startup_col = position(CanonicalField::Startup);
    let city_col = position(CanonicalField::City);
    let industry_col = position(CanonicalField::Industry);
    let sector_col = position(CanonicalField::Sector);
    let amount_col = position(CanonicalField::Amount);
    let investors_col = position(CanonicalField::Investors);
    let recognition_col = position(CanonicalField::Recognition);

    fn cell_at<'a>(table: &'a RawTable, row: usize, col: Option<usize>) -> &'a str {
        col.and_then(|c| table.cell(row, c)).unwrap_or("")
    }

    let mut stats = ParseStats {
        rows: table.len(),
        ..Default::default()
    };
    let mut records = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let date_raw = cell_at(table, row, date_col);
        let date = parse_date(date_raw);
        if date.is_none() && !is_null_token(date_raw) {
            stats.date_failures += 1;
        }

        let amount_raw = cell_at(table, row, amount_col);
        let amount_usd = clean_amount(amount_raw);
        if amount_usd.is_none() && !is_null_token(amount_raw) {
            stats.amount_failures += 1;
        }

        let named_startup = clean_text(cell_at(table, row, startup_col));
        if options.require_complete
            && (date.is_none() || amount_usd.is_none() || named_startup.is_none())
        {
            stats.dropped_incomplete += 1;
            continue;
        }

        records.push(NormalizedRecord {
            row,
            date,
            year: date.map(|d| d.year()),
            startup: named_startup.unwrap_or_else(|| format!("startup_{}", row + 1)),
            city: clean_text(cell_at(table, row, city_col)),
            industry: clean_text(cell_at(table, row, industry_col)),
            sector: clean_text(cell_at(table, row, sector_col)),
            amount_usd,
            investors: clean_text(cell_at(table, row, investors_col)),
            recognition: Recognition::from_raw(cell_at(table, row, recognition_col)),
        });
    }

    debug!(
        rows = stats.rows,
        normalized = records.len(),
        amount_failures = stats.amount_failures,
        date_failures = stats.date_failures,
        dropped = stats.dropped_incomplete,
        "Normalized raw table"
    );

    (records, stats)
}
