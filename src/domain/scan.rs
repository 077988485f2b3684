//! Per-sport batch evaluation.
//!
//! Every event is classified on its own: accepted, rejected as no
//! arbitrage, or skipped. Nothing here fails the batch.

use tracing::{debug, info};

use super::best_price::{best_prices, MarketShape};
use super::error::SkipReason;
use super::evaluator::{evaluate, EvaluatorConfig, NoArbitrage, Rejection};
use super::event::RawEvent;
use super::opportunity::Opportunity;
use super::sport::Sport;

/// Everything the scanner needs besides the events themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub evaluator: EvaluatorConfig,
    pub market_shape: MarketShape,
}

/// Classification of a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Opportunity(Opportunity),
    Rejected(NoArbitrage),
    Skipped(SkipReason),
}

/// An event that did not produce an opportunity, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissed<R> {
    /// `home vs away`, with `?` for a missing side.
    pub event: String,
    pub reason: R,
}

/// Result of scanning one sport's events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportScan {
    pub sport: Sport,
    pub events_seen: usize,
    pub opportunities: Vec<Opportunity>,
    pub rejected: Vec<Dismissed<NoArbitrage>>,
    pub skipped: Vec<Dismissed<SkipReason>>,
}

/// Classify one event.
pub fn assess(sport: &Sport, event: &RawEvent, config: &ScanConfig) -> Verdict {
    let teams = match event.teams() {
        Ok(teams) => teams,
        Err(reason) => return Verdict::Skipped(reason),
    };
    let best = match best_prices(event) {
        Ok(best) => best,
        Err(reason) => return Verdict::Skipped(reason),
    };
    let market = match best.two_way(config.market_shape) {
        Ok(market) => market,
        Err(reason) => return Verdict::Skipped(reason),
    };

    match evaluate(sport, teams, market, &config.evaluator) {
        Ok(opportunity) => Verdict::Opportunity(opportunity),
        Err(Rejection::NoArbitrage(rejected)) => Verdict::Rejected(rejected),
        Err(Rejection::Skipped(reason)) => Verdict::Skipped(reason),
    }
}

/// Classify every event of one sport.
///
/// An empty event list yields an empty scan.
pub fn scan_events(sport: &Sport, events: &[RawEvent], config: &ScanConfig) -> SportScan {
    let mut scan = SportScan {
        sport: sport.clone(),
        events_seen: events.len(),
        opportunities: Vec::new(),
        rejected: Vec::new(),
        skipped: Vec::new(),
    };

    for event in events {
        match assess(sport, event, config) {
            Verdict::Opportunity(opportunity) => {
                info!(
                    sport = %sport,
                    event = opportunity.description(),
                    profit = %opportunity.profit(),
                    total_implied = %opportunity.total_implied(),
                    "Arbitrage found"
                );
                scan.opportunities.push(opportunity);
            }
            Verdict::Rejected(reason) => {
                debug!(sport = %sport, event = %event.label(), reason = %reason, "No arbitrage");
                scan.rejected.push(Dismissed {
                    event: event.label(),
                    reason,
                });
            }
            Verdict::Skipped(reason) => {
                debug!(sport = %sport, event = %event.label(), reason = %reason, "Event skipped");
                scan.skipped.push(Dismissed {
                    event: event.label(),
                    reason,
                });
            }
        }
    }

    scan
}
