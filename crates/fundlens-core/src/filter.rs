//! Exact-match filtering over normalized records
//!
//! Mirrors the selections a dashboard sidebar offers: a year range plus
//! value sets for industry, sector, city, and recognition. Unset criteria
//! match everything. A record whose field is null only passes a criterion
//! that is unset, and zero surviving rows is a valid result ("no data"),
//! not an error.

use serde::{Deserialize, Serialize};

use crate::models::{NormalizedRecord, Recognition};

/// Filter selection. `Default` matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Inclusive year range
    pub year_range: Option<(i32, i32)>,
    pub industries: Option<Vec<String>>,
    pub sectors: Option<Vec<String>>,
    pub cities: Option<Vec<String>>,
    pub recognition: Option<Vec<Recognition>>,
}

impl RecordFilter {
    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        if let Some((from, to)) = self.year_range {
            match record.year {
                Some(year) if year >= from && year <= to => {}
                _ => return false,
            }
        }
        if !set_matches(&self.industries, record.industry.as_deref()) {
            return false;
        }
        if !set_matches(&self.sectors, record.sector.as_deref()) {
            return false;
        }
        if !set_matches(&self.cities, record.city.as_deref()) {
            return false;
        }
        if let Some(allowed) = &self.recognition {
            if !allowed.contains(&record.recognition) {
                return false;
            }
        }
        true
    }

    /// Records passing every criterion, in input order
    pub fn apply(&self, records: &[NormalizedRecord]) -> Vec<NormalizedRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn set_matches(allowed: &Option<Vec<String>>, value: Option<&str>) -> bool {
    match allowed {
        None => true,
        Some(set) => match value {
            Some(v) => set.iter().any(|s| s == v),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Option<i32>, industry: Option<&str>, rec: Recognition) -> NormalizedRecord {
        NormalizedRecord {
            row: 0,
            date: None,
            year,
            startup: "X".to_string(),
            city: None,
            industry: industry.map(|s| s.to_string()),
            sector: None,
            amount_usd: None,
            investors: None,
            recognition: rec,
        }
    }

    #[test]
    fn test_default_filter_matches_all() {
        let records = vec![
            record(Some(2020), Some("Fintech"), Recognition::Recognized),
            record(None, None, Recognition::Unknown),
        ];
        assert_eq!(RecordFilter::default().apply(&records).len(), 2);
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let filter = RecordFilter {
            year_range: Some((2020, 2021)),
            ..Default::default()
        };
        assert!(filter.matches(&record(Some(2020), None, Recognition::Unknown)));
        assert!(filter.matches(&record(Some(2021), None, Recognition::Unknown)));
        assert!(!filter.matches(&record(Some(2022), None, Recognition::Unknown)));
        // A record without a year cannot pass a year filter
        assert!(!filter.matches(&record(None, None, Recognition::Unknown)));
    }

    #[test]
    fn test_industry_set_filter() {
        let filter = RecordFilter {
            industries: Some(vec!["Fintech".to_string()]),
            ..Default::default()
        };
        assert!(filter.matches(&record(None, Some("Fintech"), Recognition::Unknown)));
        assert!(!filter.matches(&record(None, Some("Health"), Recognition::Unknown)));
        assert!(!filter.matches(&record(None, None, Recognition::Unknown)));
    }

    #[test]
    fn test_recognition_filter_keeps_unknown_distinct() {
        // Selecting not_recognized must not sweep in unknown rows
        let filter = RecordFilter {
            recognition: Some(vec![Recognition::NotRecognized]),
            ..Default::default()
        };
        assert!(filter.matches(&record(None, None, Recognition::NotRecognized)));
        assert!(!filter.matches(&record(None, None, Recognition::Unknown)));

        // Unknown is selectable in its own right
        let filter = RecordFilter {
            recognition: Some(vec![Recognition::Unknown]),
            ..Default::default()
        };
        assert!(filter.matches(&record(None, None, Recognition::Unknown)));
        assert!(!filter.matches(&record(None, None, Recognition::NotRecognized)));
    }

    #[test]
    fn test_empty_result_is_valid() {
        let records = vec![record(Some(2020), None, Recognition::Unknown)];
        let filter = RecordFilter {
            year_range: Some((1999, 2000)),
            ..Default::default()
        };
        assert!(filter.apply(&records).is_empty());
    }
}
