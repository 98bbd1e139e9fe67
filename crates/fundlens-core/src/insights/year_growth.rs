//! Year growth insight

use std::collections::BTreeMap;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightKind};

/// Compares total funding between the earliest and latest calendar year in
/// the selection. Needs at least two distinct years and a non-zero
/// earliest-year total; a zero base omits the insight instead of producing
/// infinity.
///
/// The years compared are the first and last present in the *filtered*
/// rows, so narrowing a filter changes the comparison window with it.
pub struct YearGrowthInsight;

impl YearGrowthInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YearGrowthInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for YearGrowthInsight {
    fn id(&self) -> InsightKind {
        InsightKind::YearGrowth
    }

    fn name(&self) -> &'static str {
        "Year Growth"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding> {
        // Years with at least one record, whether or not the amount parsed
        let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
        for record in ctx.records {
            if let Some(year) = record.year {
                *totals.entry(year).or_insert(0.0) += record.amount_usd.unwrap_or(0.0);
            }
        }

        if totals.len() < 2 {
            return None;
        }

        let (&first_year, &first_total) = totals.iter().next()?;
        let (&last_year, &last_total) = totals.iter().next_back()?;
        if first_total == 0.0 {
            return None;
        }

        let change = (last_total - first_total) / first_total * 100.0;
        let direction = if change >= 0.0 { "grew" } else { "fell" };

        Some(Finding::new(
            InsightKind::YearGrowth,
            format!(
                "Funding {} {:.1}% between {} and {}.",
                direction,
                change.abs(),
                first_year,
                last_year
            ),
        ))
    }
}
