//! Investor expansion: one aggregation row per investor in a deal
//!
//! Funding datasets pack every participating investor into a single
//! comma-separated cell. For investor-level aggregation each record is
//! expanded into one `InvestorDeal` per name. Expansion is lazy and reads
//! from the normalized table without ever writing back to it, so the
//! one-row-per-source-row invariant holds no matter how often it runs.

use std::collections::HashMap;

use crate::models::{InvestorDeal, InvestorStats, NormalizedRecord};
use crate::normalize::is_null_token;

/// Split a raw investor cell into individual names.
///
/// Tokens are comma-separated and trimmed; empty and sentinel tokens are
/// dropped. An empty cell yields no names, which is valid.
pub fn split_investors(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !is_null_token(t))
}

/// Expand one record into per-investor deals
pub fn expand(record: &NormalizedRecord) -> impl Iterator<Item = InvestorDeal> + '_ {
    record
        .investors
        .as_deref()
        .into_iter()
        .flat_map(split_investors)
        .map(move |investor| InvestorDeal {
            investor: investor.to_string(),
            startup: record.startup.clone(),
            year: record.year,
            amount_usd: record.amount_usd,
            industry: record.industry.clone(),
            recognition: record.recognition,
        })
}

/// Expand every record in a table, in row order
pub fn expand_all(records: &[NormalizedRecord]) -> impl Iterator<Item = InvestorDeal> + '_ {
    records.iter().flat_map(expand)
}

/// Aggregate expanded deals into a leaderboard: deal count and amount sum
/// per investor, most deals first. Ties break by amount, then name, so the
/// ordering is stable across runs. `top_n` of 0 means no limit.
pub fn investor_leaderboard(records: &[NormalizedRecord], top_n: usize) -> Vec<InvestorStats> {
    let mut totals: HashMap<String, (usize, f64)> = HashMap::new();
    for deal in expand_all(records) {
        let entry = totals.entry(deal.investor).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += deal.amount_usd.unwrap_or(0.0);
    }

    let mut leaderboard: Vec<InvestorStats> = totals
        .into_iter()
        .map(|(investor, (deals, amount_usd))| InvestorStats {
            investor,
            deals,
            amount_usd,
        })
        .collect();

    leaderboard.sort_by(|a, b| {
        b.deals
            .cmp(&a.deals)
            .then_with(|| {
                b.amount_usd
                    .partial_cmp(&a.amount_usd)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| a.investor.cmp(&b.investor))
    });

    if top_n > 0 {
        leaderboard.truncate(top_n);
    }
    leaderboard
}
