//! Rendering of a finished scan.

use std::path::Path;

use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::app::ScanReport;
use crate::domain::money::round_probability;
use crate::domain::{Dismissed, NoArbitrage, Opportunity, Probability, RejectCause};

/// What to show beyond the ranked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions<'a> {
    /// Math breakdown per opportunity and rejection diagnostics.
    pub verbose: bool,
    /// Reasons events were skipped.
    pub show_skips: bool,
    /// Where accepted opportunities were logged, if anywhere.
    pub csv_path: Option<&'a Path>,
}

/// Render the report in the configured output mode.
pub fn render(report: &ScanReport, options: &ReportOptions<'_>) {
    if output::is_json() {
        output::json_output(to_json(report, options));
        return;
    }

    if report.is_empty() {
        output::section("No arbitrage opportunities found");
        output::note(&format!(
            "{} events checked across {} sports",
            report.total_events(),
            report.sports.len()
        ));
    } else {
        output::section(&format!("Top {} arbitrage opportunities", report.ranked.len()));
        for (rank, opportunity) in report.ranked.iter().enumerate() {
            opportunity_block(rank + 1, opportunity, options.verbose);
        }
        if report.total_opportunities() > report.ranked.len() {
            output::note(&format!(
                "{} more not shown (raise --top to see them)",
                report.total_opportunities() - report.ranked.len()
            ));
        }
    }

    if options.verbose {
        rejections(report);
    }
    if options.show_skips {
        skips(report);
    }

    if let Some(path) = options.csv_path {
        if report.persisted > 0 {
            output::success(&format!(
                "Logged {} opportunities to {}",
                report.persisted,
                path.display()
            ));
        }
    }
    if report.persist_failures > 0 {
        output::warning(&format!(
            "{} opportunities could not be written to the CSV log",
            report.persist_failures
        ));
    }
}

fn opportunity_block(rank: usize, opportunity: &Opportunity, verbose: bool) {
    output::lines(&format!("{rank}. {}", output::highlight(opportunity.description())));
    for leg in opportunity.legs() {
        output::lines(&format!(
            "   {} @ {} (odds {}) → stake {}",
            leg.outcome, leg.bookmaker, leg.price, leg.stake
        ));
    }
    output::lines(&format!(
        "   profit {}  combined {}",
        output::positive(opportunity.profit()),
        percent(opportunity.total_implied())
    ));

    if verbose {
        for leg in opportunity.legs() {
            output::lines(&output::muted(format!(
                "     1/{} = {}  payout {} × {} = {}",
                leg.price,
                round_probability(leg.implied_probability),
                leg.stake,
                leg.price,
                leg.payout()
            )));
        }
        output::lines(&output::muted(format!(
            "     combined implied {}  total stake {}",
            opportunity.total_implied(),
            opportunity.total_stake()
        )));
    }
}

fn rejections(report: &ScanReport) {
    let rejected: Vec<&Dismissed<NoArbitrage>> = report
        .sports
        .iter()
        .flat_map(|scan| &scan.rejected)
        .collect();
    if rejected.is_empty() {
        return;
    }

    output::section("No arbitrage");
    for dismissed in rejected {
        let reason = &dismissed.reason;
        output::lines(&dismissed.event);
        output::lines(&output::muted(format!(
            "   {} @ {} → {}   {} @ {} → {}   sum {}",
            reason.first_outcome,
            reason.first_price,
            round_probability(reason.split.implied_first),
            reason.second_outcome,
            reason.second_price,
            round_probability(reason.split.implied_second),
            reason.total_implied
        )));
        if reason.cause == RejectCause::BelowMinProfit {
            output::lines(&output::muted(format!(
                "   profit {} below minimum {}",
                reason.split.profit, reason.min_profit
            )));
        }
    }
}

fn skips(report: &ScanReport) {
    let skipped: Vec<_> = report
        .sports
        .iter()
        .flat_map(|scan| scan.skipped.iter().map(move |d| (&scan.sport, d)))
        .collect();
    if skipped.is_empty() {
        return;
    }

    output::section("Skipped events");
    for (sport, dismissed) in skipped {
        output::lines(&format!(
            "{} {}: {}",
            output::muted(sport.label()),
            dismissed.event,
            dismissed.reason
        ));
    }
}

/// `0.9524` → `95.24%`, always two decimals.
fn percent(probability: Probability) -> String {
    let mut value = (probability * Decimal::ONE_HUNDRED).round_dp(2);
    value.rescale(2);
    format!("{value}%")
}

fn to_json(report: &ScanReport, options: &ReportOptions<'_>) -> serde_json::Value {
    let sports: Vec<_> = report
        .sports
        .iter()
        .map(|scan| {
            let mut value = json!({
                "sport": scan.sport.key(),
                "events": scan.events_seen,
                "opportunities": scan.opportunities.len(),
                "rejected": scan.rejected.len(),
                "skipped": scan.skipped.len(),
            });
            if options.show_skips {
                value["skips"] = scan
                    .skipped
                    .iter()
                    .map(|d| json!({ "event": d.event, "reason": d.reason.to_string() }))
                    .collect();
            }
            value
        })
        .collect();

    json!({
        "command": "scan",
        "opportunities": report.ranked,
        "total_opportunities": report.total_opportunities(),
        "sports": sports,
        "persisted": report.persisted,
        "persist_failures": report.persist_failures,
    })
}
