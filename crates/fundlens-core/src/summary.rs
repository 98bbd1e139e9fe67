//! Headline statistics over a (possibly filtered) set of records

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{NormalizedRecord, Recognition};

/// Row counts per recognition status.
///
/// All three buckets are reported; `unknown` is never folded into
/// `not_recognized` when computing shares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionBreakdown {
    pub recognized: usize,
    pub not_recognized: usize,
    pub unknown: usize,
}

impl RecognitionBreakdown {
    /// Share of recognized rows over all rows, as a percentage
    pub fn recognized_pct(&self) -> Option<f64> {
        let total = self.recognized + self.not_recognized + self.unknown;
        if total == 0 {
            None
        } else {
            Some(self.recognized as f64 / total as f64 * 100.0)
        }
    }
}

/// Dashboard-style KPIs for a record set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Records in the selection
    pub rows: usize,
    /// Sum of non-null amounts
    pub total_funding_usd: f64,
    /// Records with a non-null amount
    pub funded_rounds: usize,
    /// Mean round size over funded rounds; None when no round has an amount
    pub avg_round_usd: Option<f64>,
    /// Distinct startup names, excluding loader-generated placeholders
    pub startups: usize,
    pub recognition: RecognitionBreakdown,
}

impl SummaryStats {
    pub fn compute(records: &[NormalizedRecord]) -> Self {
        let mut total = 0.0;
        let mut funded = 0;
        let mut names: HashSet<&str> = HashSet::new();
        let mut breakdown = RecognitionBreakdown::default();

        for record in records {
            if let Some(amount) = record.amount_usd {
                total += amount;
                funded += 1;
            }
            if !record.has_placeholder_name() {
                names.insert(record.startup.as_str());
            }
            match record.recognition {
                Recognition::Recognized => breakdown.recognized += 1,
                Recognition::NotRecognized => breakdown.not_recognized += 1,
                Recognition::Unknown => breakdown.unknown += 1,
            }
        }

        Self {
            rows: records.len(),
            total_funding_usd: total,
            funded_rounds: funded,
            avg_round_usd: if funded > 0 {
                Some(total / funded as f64)
            } else {
                None
            },
            startups: names.len(),
            recognition: breakdown,
        }
    }
}
