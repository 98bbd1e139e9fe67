//! Insight engine - ranked natural-language summaries
//!
//! Given a (possibly filtered) set of normalized records and the resolved
//! field map, the engine evaluates a fixed, ordered set of candidate
//! insights. Each candidate guards its own preconditions and is omitted
//! individually when they fail; the caller always gets at least one line
//! back, falling back to a "no patterns" entry on empty or featureless
//! selections.
//!
//! ## Candidates, in rank order
//!
//! - **Funding Total** - sum of usable amounts
//! - **Top Industry** - industry with the largest amount-sum
//! - **City Concentration** - city with the largest share of rounds
//! - **Year Growth** - change between earliest and latest year totals
//! - **Top Investor** - most frequent investor across expanded deals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fundlens_core::insights::{AnalysisContext, InsightEngine};
//!
//! let engine = InsightEngine::new();
//! let findings = engine.analyze_all(&AnalysisContext::new(&records, &fields));
//! ```

pub mod city_concentration;
pub mod engine;
pub mod funding_total;
pub mod top_industry;
pub mod top_investor;
pub mod types;
pub mod year_growth;

pub use city_concentration::CityConcentrationInsight;
pub use engine::{AnalysisContext, Insight, InsightEngine};
pub use funding_total::FundingTotalInsight;
pub use top_industry::TopIndustryInsight;
pub use top_investor::TopInvestorInsight;
pub use types::{Finding, InsightKind};
pub use year_growth::YearGrowthInsight;
