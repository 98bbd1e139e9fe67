//! Insight engine - orchestrates the candidate analyzers

use crate::models::NormalizedRecord;
use crate::schema::FieldMap;

use super::types::{Finding, InsightKind};
use super::{
    CityConcentrationInsight, FundingTotalInsight, TopIndustryInsight, TopInvestorInsight,
    YearGrowthInsight,
};

/// Context provided to insight analyzers: the caller's (already filtered)
/// selection plus the resolved schema.
pub struct AnalysisContext<'a> {
    pub records: &'a [NormalizedRecord],
    pub fields: &'a FieldMap,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(records: &'a [NormalizedRecord], fields: &'a FieldMap) -> Self {
        Self { records, fields }
    }
}

/// Trait for insight analyzers.
///
/// Each analyzer checks its own preconditions and returns `None` when they
/// fail; that insight is simply omitted. There is no catch-all around
/// analyzers — an unexpected panic would be a real bug, not missing data.
pub trait Insight {
    /// Unique identifier for this insight kind
    fn id(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Analyze the selection and produce a finding, if computable
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Option<Finding>;
}

/// The main insight engine. Registration order is rank order.
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in analyzers in their fixed order
    pub fn new() -> Self {
        let mut engine = Self { insights: vec![] };

        engine.register(Box::new(FundingTotalInsight::new()));
        engine.register(Box::new(TopIndustryInsight::new()));
        engine.register(Box::new(CityConcentrationInsight::new()));
        engine.register(Box::new(YearGrowthInsight::new()));
        engine.register(Box::new(TopInvestorInsight::new()));

        engine
    }

    /// Register an insight analyzer
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    /// Run every analyzer and collect the computable findings, ranked.
    ///
    /// Callers always receive at least one line: when no candidate was
    /// computable the single fallback finding is returned instead of an
    /// empty list.
    pub fn analyze_all(&self, ctx: &AnalysisContext<'_>) -> Vec<Finding> {
        let mut findings = vec![];

        for insight in &self.insights {
            match insight.analyze(ctx) {
                Some(finding) => {
                    tracing::debug!(insight = insight.id().as_str(), "Insight computed");
                    findings.push(finding);
                }
                None => {
                    tracing::debug!(
                        insight = insight.id().as_str(),
                        "Insight omitted (preconditions not met)"
                    );
                }
            }
        }

        if findings.is_empty() {
            findings.push(Finding::new(
                InsightKind::NoPatterns,
                "No patterns found under current filters.",
            ));
        }

        for (i, finding) in findings.iter_mut().enumerate() {
            finding.rank = i + 1;
        }

        findings
    }

    /// Kinds of the registered analyzers, in rank order
    pub fn insight_kinds(&self) -> Vec<InsightKind> {
        self.insights.iter().map(|i| i.id()).collect()
    }
}
