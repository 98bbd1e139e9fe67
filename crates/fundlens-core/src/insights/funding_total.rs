//! Funding total insight

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightKind};

/// Reports the total funding across the selection. Included whenever at
/// least one round has a usable amount.
pub struct FundingTotalInsight;

impl FundingTotalInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FundingTotalInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for FundingTotalInsight {
    fn id(&self) -> InsightKind {
        InsightKind::FundingTotal
    }

    fn name(&self) -> &'static str {
        "Funding Total"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding> {
        let amounts: Vec<f64> = ctx.records.iter().filter_map(|r| r.amount_usd).collect();
        if amounts.is_empty() {
            return None;
        }

        let total: f64 = amounts.iter().sum();
        let rounds = amounts.len();
        Some(Finding::new(
            InsightKind::FundingTotal,
            format!(
                "Total funding across {} round{} is ${:.0}.",
                rounds,
                if rounds == 1 { "" } else { "s" },
                total
            ),
        ))
    }
}
