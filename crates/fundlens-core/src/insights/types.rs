//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of insight the engine can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Sum of funding across the selection
    FundingTotal,
    /// Industry with the largest amount-sum
    TopIndustry,
    /// City with the largest share of rounds
    CityConcentration,
    /// Change between the earliest and latest year's totals
    YearGrowth,
    /// Most frequent investor across expanded deals
    TopInvestor,
    /// Fallback when nothing else was computable
    NoPatterns,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::FundingTotal => "funding_total",
            InsightKind::TopIndustry => "top_industry",
            InsightKind::CityConcentration => "city_concentration",
            InsightKind::YearGrowth => "year_growth",
            InsightKind::TopInvestor => "top_investor",
            InsightKind::NoPatterns => "no_patterns",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "funding_total" => Ok(InsightKind::FundingTotal),
            "top_industry" => Ok(InsightKind::TopIndustry),
            "city_concentration" => Ok(InsightKind::CityConcentration),
            "year_growth" => Ok(InsightKind::YearGrowth),
            "top_investor" => Ok(InsightKind::TopInvestor),
            "no_patterns" => Ok(InsightKind::NoPatterns),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// One ranked insight line.
///
/// `rank` is 1-based and assigned by the engine from its fixed evaluation
/// order; analyzers create findings with rank 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub rank: usize,
    pub kind: InsightKind,
    pub text: String,
}

impl Finding {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            rank: 0,
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_kind_round_trip() {
        for kind in [
            InsightKind::FundingTotal,
            InsightKind::TopIndustry,
            InsightKind::CityConcentration,
            InsightKind::YearGrowth,
            InsightKind::TopInvestor,
            InsightKind::NoPatterns,
        ] {
            assert_eq!(InsightKind::from_str(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_finding_starts_unranked() {
        let finding = Finding::new(InsightKind::FundingTotal, "text");
        assert_eq!(finding.rank, 0);
        assert_eq!(finding.text, "text");
    }
}
