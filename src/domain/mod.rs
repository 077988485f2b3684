//! Odds-comparison domain logic.
//!
//! Pure and synchronous: raw events in, opportunities and diagnostics out.

pub mod best_price;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod money;
pub mod opportunity;
pub mod ranking;
pub mod scan;
pub mod sport;

pub use best_price::{best_prices, BestPrice, BestPrices, MarketShape, TwoWay};
pub use error::{DomainError, SkipReason};
pub use evaluator::{
    evaluate, Bankroll, EvaluatorConfig, NoArbitrage, RejectCause, Rejection, StakeSplit,
    MAX_BANKROLL,
};
pub use event::{Bookmaker, Market, OutcomeQuote, RawEvent, Teams};
pub use money::{Amount, Price, Probability};
pub use opportunity::{Opportunity, OpportunityLeg};
pub use ranking::rank;
pub use scan::{assess, scan_events, Dismissed, ScanConfig, SportScan, Verdict};
pub use sport::Sport;
