//! Domain models for fundlens

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A raw tabular dataset as loaded, before any schema resolution.
///
/// Column names keep their original spelling; every cell is kept as the
/// string it arrived as. Rows are padded/truncated to the header width by
/// the loader, so `cell()` lookups never go out of bounds for a valid
/// column position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTable {
    /// Column names in file order, original spelling preserved
    pub columns: Vec<String>,
    /// One entry per input row, one cell per column
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by its original (raw) name
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at (row, column position), if present
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }
}

/// Government recognition status of a startup
///
/// Deliberately three-way rather than a boolean: datasets routinely carry
/// blank, misspelled, or free-text values in this column, and those must
/// stay in their own `Unknown` bucket instead of being folded into
/// `NotRecognized` when computing shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recognition {
    Recognized,
    NotRecognized,
    Unknown,
}

impl Recognition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recognized => "recognized",
            Self::NotRecognized => "not_recognized",
            Self::Unknown => "unknown",
        }
    }

    /// Map a raw cell value to a recognition status.
    ///
    /// Total function: affirmative tokens map to `Recognized`, negative
    /// tokens to `NotRecognized`, and everything else (blank cells
    /// included) to `Unknown`.
    pub fn from_raw(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Self::Recognized,
            "no" | "n" | "false" | "0" => Self::NotRecognized,
            _ => Self::Unknown,
        }
    }
}

impl std::str::FromStr for Recognition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recognized" => Ok(Self::Recognized),
            "not_recognized" | "notrecognized" => Ok(Self::NotRecognized),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown recognition status: {}", s)),
        }
    }
}

impl std::fmt::Display for Recognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One funding record with canonical, typed fields.
///
/// Every normalized record corresponds 1:1 with a raw row; cells that
/// could not be coerced land on their null sentinel rather than dropping
/// or failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Zero-based position of the source row in the raw table
    pub row: usize,
    /// Funding date, if the raw cell parsed
    pub date: Option<NaiveDate>,
    /// Calendar year derived from `date`
    pub year: Option<i32>,
    /// Startup name; a positional placeholder when the cell was missing
    pub startup: String,
    pub city: Option<String>,
    pub industry: Option<String>,
    pub sector: Option<String>,
    /// Funding amount in USD; never negative after cleaning
    pub amount_usd: Option<f64>,
    /// Raw investor list, unsplit (see `expand` for per-investor records)
    pub investors: Option<String>,
    pub recognition: Recognition,
}

impl NormalizedRecord {
    /// Whether the startup name is a loader-generated placeholder rather
    /// than a name from the dataset
    pub fn has_placeholder_name(&self) -> bool {
        self.startup.starts_with("startup_")
            && self.startup["startup_".len()..].chars().all(|c| c.is_ascii_digit())
    }
}

/// One investor's participation in one funding round, produced by
/// expanding a record's comma-separated investor list.
///
/// Aggregation-only view; never written back to the normalized table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorDeal {
    pub investor: String,
    pub startup: String,
    pub year: Option<i32>,
    pub amount_usd: Option<f64>,
    pub industry: Option<String>,
    pub recognition: Recognition,
}

/// Aggregate line for the investor leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorStats {
    pub investor: String,
    /// Number of expanded deals this investor appears in
    pub deals: usize,
    /// Sum of the non-null amounts across those deals
    pub amount_usd: f64,
}
