//! City concentration insight

use std::collections::HashMap;

use crate::schema::CanonicalField;

use super::engine::{AnalysisContext, Insight};
use super::types::{Finding, InsightKind};

/// Reports the city holding the largest share of rounds, by row count
/// rather than amount. Needs the city column resolved and at least one row
/// with a city.
pub struct CityConcentrationInsight;

impl CityConcentrationInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CityConcentrationInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for CityConcentrationInsight {
    fn id(&self) -> InsightKind {
        InsightKind::CityConcentration
    }

    fn name(&self) -> &'static str {
        "City Concentration"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding> {
        if !ctx.fields.is_resolved(CanonicalField::City) {
            return None;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in ctx.records {
            if let Some(city) = record.city.as_deref() {
                *counts.entry(city).or_insert(0) += 1;
            }
        }

        let located: usize = counts.values().sum();
        if located == 0 {
            return None;
        }

        let (city, count) = counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))?;
        let share = count as f64 / located as f64 * 100.0;

        Some(Finding::new(
            InsightKind::CityConcentration,
            format!("{} accounts for {:.1}% of funding rounds.", city, share),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use crate::test_utils::{record, sample_records};

    #[test]
    fn test_share_is_over_located_rows_only() {
        let fields = schema::resolve(&["City".to_string()]);
        // Two located rows in Bengaluru, one in Mumbai, one with no city:
        // the share denominator is 3, not 4
        let records = vec![
            record("A", None, None, None, Some("Bengaluru"), None),
            record("B", None, None, None, Some("Bengaluru"), None),
            record("C", None, None, None, Some("Mumbai"), None),
            record("D", None, None, None, None, None),
        ];
        let finding = CityConcentrationInsight::new()
            .analyze(&AnalysisContext::new(&records, &fields))
            .unwrap();
        assert!(finding.text.contains("Bengaluru"));
        assert!(finding.text.contains("66.7%"));
    }

    #[test]
    fn test_sample_scenario() {
        let (records, fields) = sample_records();
        let finding = CityConcentrationInsight::new()
            .analyze(&AnalysisContext::new(&records, &fields))
            .unwrap();
        assert!(finding.text.contains("Bengaluru"));
    }

    #[test]
    fn test_omitted_without_cities() {
        let fields = schema::resolve(&["City".to_string()]);
        let records = vec![record("A", None, None, None, None, None)];
        assert!(CityConcentrationInsight::new()
            .analyze(&AnalysisContext::new(&records, &fields))
            .is_none());
    }

    #[test]
    fn test_omitted_when_city_unresolved() {
        let fields = schema::resolve(&["Startup Name".to_string()]);
        let records = vec![record("A", None, None, None, Some("Mumbai"), None)];
        assert!(CityConcentrationInsight::new()
            .analyze(&AnalysisContext::new(&records, &fields))
            .is_none());
    }
}
