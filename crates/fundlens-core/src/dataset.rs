//! Dataset façade: one loaded dataset, resolved and normalized once
//!
//! Owns the field map, the normalized table, and the load's parse
//! counters. Filtering produces a new view over cloned records; the
//! original table is never mutated by any downstream computation.

use std::path::Path;

use crate::error::Result;
use crate::expand;
use crate::filter::RecordFilter;
use crate::insights::{AnalysisContext, Finding, InsightEngine};
use crate::loader;
use crate::models::{InvestorStats, NormalizedRecord, RawTable};
use crate::normalize::{self, NormalizeOptions, ParseStats};
use crate::schema::{self, FieldMap};
use crate::summary::SummaryStats;

pub struct Dataset {
    fields: FieldMap,
    records: Vec<NormalizedRecord>,
    stats: ParseStats,
}

impl Dataset {
    /// Resolve the schema and normalize a raw table
    pub fn from_table(table: &RawTable, options: &NormalizeOptions) -> Self {
        let fields = schema::resolve(&table.columns);
        let (records, stats) = normalize::normalize(table, &fields, options);
        Self {
            fields,
            records,
            stats,
        }
    }

    /// Load, resolve, and normalize a CSV file at an explicit path
    pub fn load_path(path: &Path, options: &NormalizeOptions) -> Result<Self> {
        let table = loader::load_path(path)?;
        Ok(Self::from_table(&table, options))
    }

    /// The resolved field map (which filters/charts can be enabled)
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// The normalized record table
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Coercion counters from the load
    pub fn parse_stats(&self) -> ParseStats {
        self.stats
    }

    /// Whether a critical field (amount, startup) has no source column
    pub fn is_degraded(&self) -> bool {
        self.fields.is_degraded()
    }

    /// Headline KPIs for the current records
    pub fn summary(&self) -> SummaryStats {
        SummaryStats::compute(&self.records)
    }

    /// Ranked insight lines for the current records
    pub fn insights(&self) -> Vec<Finding> {
        let engine = InsightEngine::new();
        engine.analyze_all(&AnalysisContext::new(&self.records, &self.fields))
    }

    /// Investor leaderboard over the current records; `top_n` of 0 means
    /// no limit
    pub fn investor_leaderboard(&self, top_n: usize) -> Vec<InvestorStats> {
        expand::investor_leaderboard(&self.records, top_n)
    }

    /// A filtered view sharing this dataset's field map and load counters
    pub fn filter(&self, filter: &RecordFilter) -> Dataset {
        Dataset {
            fields: self.fields.clone(),
            records: filter.apply(&self.records),
            stats: self.stats,
        }
    }
}
