//! Scan orchestration.
//!
//! Fetches every selected sport concurrently, evaluates each sport's events
//! independently, then merges on a single task: persistence and ranking only
//! see the collected results, never a shared accumulator.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::domain::{rank, scan_events, Opportunity, ScanConfig, Sport, SportScan};
use crate::port::outbound::odds::OddsSource;
use crate::port::outbound::sink::OpportunitySink;

/// Outcome of a full scan across sports.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Per-sport results, in the order the sports were requested.
    pub sports: Vec<SportScan>,
    /// The best opportunities across all sports, highest profit first.
    pub ranked: Vec<Opportunity>,
    /// Opportunities written to the sink.
    pub persisted: usize,
    /// Opportunities the sink failed to write.
    pub persist_failures: usize,
}

impl ScanReport {
    /// Total accepted opportunities before ranking truncation.
    pub fn total_opportunities(&self) -> usize {
        self.sports.iter().map(|scan| scan.opportunities.len()).sum()
    }

    pub fn total_events(&self) -> usize {
        self.sports.iter().map(|scan| scan.events_seen).sum()
    }

    /// Whether the scan found nothing worth reporting.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Drives an [`OddsSource`] through the arbitrage engine.
pub struct Scanner {
    source: Arc<dyn OddsSource>,
    config: ScanConfig,
    top: usize,
}

impl Scanner {
    pub fn new(source: Arc<dyn OddsSource>, config: ScanConfig, top: usize) -> Self {
        Self {
            source,
            config,
            top,
        }
    }

    /// Fetch and evaluate each sport. Sports run concurrently; results keep
    /// the requested order.
    pub async fn scan(&self, sports: &[Sport]) -> Vec<SportScan> {
        let config = self.config;
        let source = &self.source;

        join_all(sports.iter().map(|sport| async move {
            let events = source.fetch_odds(sport).await;
            scan_events(sport, &events, &config)
        }))
        .await
    }

    /// Scan, persist accepted opportunities, then rank.
    ///
    /// Sink failures are logged and counted; they never abort the scan.
    pub async fn run(
        &self,
        sports: &[Sport],
        sink: Option<&mut dyn OpportunitySink>,
    ) -> ScanReport {
        info!(
            source = self.source.source_name(),
            sports = sports.len(),
            bankroll = %self.config.evaluator.bankroll.amount(),
            min_profit = %self.config.evaluator.min_profit,
            "Scanning for arbitrage"
        );

        let scans = self.scan(sports).await;

        let (persisted, persist_failures) = match sink {
            Some(sink) => persist(&scans, sink),
            None => (0, 0),
        };

        let all: Vec<Opportunity> = scans
            .iter()
            .flat_map(|scan| scan.opportunities.iter().cloned())
            .collect();
        let ranked = rank(all, self.top);

        let report = ScanReport {
            sports: scans,
            ranked,
            persisted,
            persist_failures,
        };

        info!(
            events = report.total_events(),
            opportunities = report.total_opportunities(),
            shown = report.ranked.len(),
            "Scan complete"
        );

        report
    }
}

fn persist(scans: &[SportScan], sink: &mut dyn OpportunitySink) -> (usize, usize) {
    let mut persisted = 0;
    let mut failures = 0;

    for opportunity in scans.iter().flat_map(|scan| &scan.opportunities) {
        match sink.record(opportunity) {
            Ok(()) => persisted += 1,
            Err(err) => {
                failures += 1;
                warn!(
                    event = opportunity.description(),
                    error = %err,
                    "Failed to record opportunity"
                );
            }
        }
    }

    if let Err(err) = sink.flush() {
        warn!(error = %err, "Failed to flush opportunity sink");
    }

    (persisted, failures)
}
