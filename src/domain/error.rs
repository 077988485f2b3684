//! Reasons an event is skipped before it reaches the evaluator.
//!
//! None of these abort a scan. The scanner records them so the caller can
//! surface skip diagnostics, then moves on to the next event.

use thiserror::Error;

use super::money::Price;

/// Why an event could not be turned into a two-way price comparison.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The event lacks a home or away team identifier.
    #[error("missing {field}")]
    MalformedEvent {
        /// Name of the absent field.
        field: &'static str,
    },

    /// Fewer than two distinct outcome names were quoted.
    #[error("only {found} outcome(s) found")]
    InsufficientOutcomes {
        /// Number of distinct outcome names collected.
        found: usize,
    },

    /// More than two outcome names were quoted for a two-way market.
    #[error("{found} outcomes quoted, expected exactly 2")]
    UnsupportedMarketShape {
        /// Number of distinct outcome names collected.
        found: usize,
    },

    /// The best price for an outcome cannot describe a real bet.
    #[error("best price {price} for {outcome} is not above 1.0")]
    InvalidPrice {
        outcome: String,
        price: Price,
    },

    /// The stake split for these prices leaves `Decimal` range.
    #[error("stake split for prices {first} and {second} is out of range")]
    StakeOverflow { first: Price, second: Price },
}

/// Errors that occur when domain invariants are violated at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Stakes are split from a positive bankroll only.
    #[error("bankroll must be positive, got {bankroll}")]
    NonPositiveBankroll {
        bankroll: super::money::Amount,
    },

    #[error("bankroll must be at most {max}, got {bankroll}")]
    BankrollTooLarge {
        bankroll: super::money::Amount,
        max: super::money::Amount,
    },
}
