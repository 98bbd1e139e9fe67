//! Schema resolution: map arbitrary raw column names to canonical fields
//!
//! Datasets in the wild name the same column a dozen ways ("Amount in USD",
//! "funding_amount", "AMOUNT"). Instead of per-field lookup code scattered
//! around the pipeline, each canonical field carries one ordered alias list
//! and a single resolver walks it, first match wins. No fuzzy matching, no
//! scoring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The fixed set of semantic roles the pipeline understands, regardless of
/// what the source column is literally called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Date,
    Startup,
    City,
    Industry,
    Sector,
    Amount,
    Investors,
    Recognition,
}

impl CanonicalField {
    /// All canonical fields, in resolution order
    pub const ALL: [CanonicalField; 8] = [
        Self::Date,
        Self::Startup,
        Self::City,
        Self::Industry,
        Self::Sector,
        Self::Amount,
        Self::Investors,
        Self::Recognition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Startup => "startup",
            Self::City => "city",
            Self::Industry => "industry",
            Self::Sector => "sector",
            Self::Amount => "amount",
            Self::Investors => "investors",
            Self::Recognition => "recognition",
        }
    }

    /// Acceptable column names for this field, most canonical first,
    /// loosest synonym last. Compared against normalized header names.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Date => &["date", "funding_date", "date_of_funding", "investment_date"],
            Self::Startup => &["startup_name", "startup", "company_name", "company", "name"],
            Self::City => &["city", "city_location", "location", "headquarters"],
            Self::Industry => &["industry_vertical", "industry", "vertical"],
            Self::Sector => &["sector", "sub_vertical", "subvertical"],
            Self::Amount => &[
                "amount_in_usd",
                "amount_usd",
                "amount",
                "funding_amount",
                "amount_in_inr",
                "investment_amount",
            ],
            Self::Investors => &[
                "investors_name",
                "investors",
                "investor_name",
                "investor",
                "lead_investors",
            ],
            Self::Recognition => &[
                "is_meity_recognized",
                "meity_recognized",
                "meity",
                "dpiit_recognized",
                "is_recognized",
                "recognized",
            ],
        }
    }

    /// Fields the downstream consumers cannot meaningfully work without.
    /// Their absence puts the dataset in degraded mode (totals and
    /// per-startup views disabled) but never aborts the pipeline.
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Amount | Self::Startup)
    }
}

impl std::str::FromStr for CanonicalField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "startup" => Ok(Self::Startup),
            "city" => Ok(Self::City),
            "industry" => Ok(Self::Industry),
            "sector" => Ok(Self::Sector),
            "amount" => Ok(Self::Amount),
            "investors" => Ok(Self::Investors),
            "recognition" => Ok(Self::Recognition),
            _ => Err(format!("Unknown canonical field: {}", s)),
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalize a raw column name for alias matching: trim, lowercase, and
/// collapse whitespace runs to a single underscore.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// The resolved mapping from canonical fields to raw column names.
///
/// Built once per dataset load; a pure function of the column-name set.
/// Stores the column's original spelling so cells can be looked up in the
/// raw table without re-normalizing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMap {
    columns: HashMap<CanonicalField, String>,
    /// True when `Sector` resolved by reusing the `Industry` column (the
    /// one sanctioned case of two fields sharing a raw column)
    pub sector_from_industry: bool,
}

impl FieldMap {
    /// Raw column name a field resolved to, if any
    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        self.columns.get(&field).map(|s| s.as_str())
    }

    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.columns.contains_key(&field)
    }

    /// Critical fields (amount, startup) that failed to resolve
    pub fn missing_critical(&self) -> Vec<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|f| f.is_critical() && !self.is_resolved(*f))
            .collect()
    }

    /// Whether downstream consumers should present a reduced-functionality
    /// state (some critical field has no source column)
    pub fn is_degraded(&self) -> bool {
        !self.missing_critical().is_empty()
    }

    /// Resolved (field, raw column) pairs in canonical order
    pub fn entries(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        CanonicalField::ALL
            .into_iter()
            .filter_map(move |f| self.column(f).map(|c| (f, c)))
    }
}

/// Resolve the canonical schema for a set of raw column names.
///
/// For each canonical field the alias list is checked in priority order
/// against the normalized column names; the first alias present wins. When
/// two raw columns normalize to the same name the first one in file order
/// is used.
pub fn resolve(columns: &[String]) -> FieldMap {
    let mut lookup: HashMap<String, &str> = HashMap::new();
    for raw in columns {
        lookup.entry(normalize_header(raw)).or_insert(raw.as_str());
    }

    let mut map = FieldMap::default();
    for field in CanonicalField::ALL {
        for alias in field.aliases() {
            if let Some(raw) = lookup.get(*alias) {
                map.columns.insert(field, raw.to_string());
                break;
            }
        }
    }

    // An "industry" column may serve double duty as the sector grouping
    // when the dataset has no sector column of its own.
    if !map.is_resolved(CanonicalField::Sector) {
        if let Some(industry_col) = map.column(CanonicalField::Industry) {
            let industry_col = industry_col.to_string();
            map.columns.insert(CanonicalField::Sector, industry_col);
            map.sector_from_industry = true;
        }
    }

    for (field, column) in map.entries() {
        debug!(field = field.as_str(), column, "Resolved column");
    }
    for field in map.missing_critical() {
        warn!(
            field = field.as_str(),
            "No column matched a critical field; entering degraded mode"
        );
    }

    map
}
