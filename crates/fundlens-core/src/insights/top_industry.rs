//! Top industry insight

use std::collections::HashMap;

use crate::schema::CanonicalField;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightKind};

/// Reports the industry with the largest amount-sum. Needs the industry
/// column resolved and at least one row carrying both an industry and an
/// amount.
pub struct TopIndustryInsight;

impl TopIndustryInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TopIndustryInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for TopIndustryInsight {
    fn id(&self) -> InsightKind {
        InsightKind::TopIndustry
    }

    fn name(&self) -> &'static str {
        "Top Industry"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding> {
        if !ctx.fields.is_resolved(CanonicalField::Industry) {
            return None;
        }

        let mut totals: HashMap<&str, f64> = HashMap::new();
        for record in ctx.records {
            if let (Some(industry), Some(amount)) = (record.industry.as_deref(), record.amount_usd)
            {
                *totals.entry(industry).or_insert(0.0) += amount;
            }
        }

        // Ties break by name so the result is deterministic
        let (industry, total) = totals.into_iter().max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.0.cmp(a.0))
        })?;

        Some(Finding::new(
            InsightKind::TopIndustry,
            format!("{} leads all industries with ${:.0} raised.", industry, total),
        ))
    }
}
