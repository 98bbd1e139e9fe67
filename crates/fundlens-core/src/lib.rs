//! fundlens Core Library
//!
//! Shared functionality for the fundlens startup funding analyzer:
//! - CSV loading into a raw string table (explicit path, no fallbacks)
//! - Schema resolution from heuristic column-name aliases
//! - Value normalization into canonical typed records
//! - Investor expansion for per-investor aggregation
//! - Exact-match filtering and headline statistics
//! - Rule-based insight engine producing ranked text lines
//!
//! The pipeline is synchronous and total: malformed cells resolve to null
//! or Unknown sentinels, never to errors, and only schema-level gaps (no
//! usable amount or startup column) are surfaced - as a degraded-mode
//! signal, not a failure.

pub mod dataset;
pub mod error;
pub mod expand;
pub mod filter;
pub mod insights;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod schema;
pub mod summary;

#[cfg(test)]
mod test_utils;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use filter::RecordFilter;
pub use insights::{AnalysisContext, Finding, Insight, InsightEngine, InsightKind};
pub use models::{InvestorDeal, InvestorStats, NormalizedRecord, RawTable, Recognition};
pub use normalize::{NormalizeOptions, ParseStats};
pub use schema::{CanonicalField, FieldMap};
pub use summary::{RecognitionBreakdown, SummaryStats};
