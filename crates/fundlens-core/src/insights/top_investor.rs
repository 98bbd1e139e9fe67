//! Top investor insight

use crate::expand;
use crate::schema::CanonicalField;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightKind};

/// Reports the most frequent investor across expanded deals. Needs the
/// investors column resolved and the expansion to yield at least one name.
pub struct TopInvestorInsight;

impl TopInvestorInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TopInvestorInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for TopInvestorInsight {
    fn id(&self) -> InsightKind {
        InsightKind::TopInvestor
    }

    fn name(&self) -> &'static str {
        "Top Investor"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding> {
        if !ctx.fields.is_resolved(CanonicalField::Investors) {
            return None;
        }

        let top = expand::investor_leaderboard(ctx.records, 1).into_iter().next()?;

        Some(Finding::new(
            InsightKind::TopInvestor,
            format!(
                "{} is the most active investor with {} deal{}.",
                top.investor,
                top.deals,
                if top.deals == 1 { "" } else { "s" }
            ),
        ))
    }
}
