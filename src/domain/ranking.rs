//! Ranking of accepted opportunities.

use super::opportunity::Opportunity;

/// Sort by profit, highest first, and keep the best `top_n`.
///
/// The sort is stable: equal profits keep their scan order.
#[must_use]
pub fn rank(mut opportunities: Vec<Opportunity>, top_n: usize) -> Vec<Opportunity> {
    opportunities.sort_by(|a, b| b.profit().cmp(&a.profit()));
    opportunities.truncate(top_n);
    opportunities
}
