//! Accepted arbitrage opportunities.
//!
//! An [`Opportunity`] is only constructed by the evaluator once the combined
//! implied probability is below one and the profit clears the threshold.
//! It has no setters.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::money::{round_currency, Amount, Price, Probability};
use super::sport::Sport;

/// One side of a two-way bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpportunityLeg {
    pub outcome: String,
    pub bookmaker: String,
    pub price: Price,
    pub stake: Amount,
    pub implied_probability: Probability,
}

impl OpportunityLeg {
    /// What this leg returns if its outcome wins, rounded to cents.
    #[must_use]
    pub fn payout(&self) -> Amount {
        round_currency(self.stake * self.price)
    }
}

/// A detected two-way arbitrage with its stake split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    sport: Sport,
    legs: [OpportunityLeg; 2],
    profit: Amount,
    total_implied: Probability,
    description: String,
    detected_at: DateTime<Utc>,
}

impl Opportunity {
    pub(crate) fn new(
        sport: Sport,
        legs: [OpportunityLeg; 2],
        profit: Amount,
        total_implied: Probability,
        description: String,
    ) -> Self {
        Self {
            sport,
            legs,
            profit,
            total_implied,
            description,
            detected_at: Utc::now(),
        }
    }

    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    /// First compared outcome.
    pub fn first(&self) -> &OpportunityLeg {
        &self.legs[0]
    }

    /// Second compared outcome.
    pub fn second(&self) -> &OpportunityLeg {
        &self.legs[1]
    }

    pub fn legs(&self) -> &[OpportunityLeg; 2] {
        &self.legs
    }

    /// Guaranteed profit in currency, rounded to cents.
    pub fn profit(&self) -> Amount {
        self.profit
    }

    /// Sum of both implied probabilities, rounded to four places.
    pub fn total_implied(&self) -> Probability {
        self.total_implied
    }

    /// `"{SPORT} — {home} vs {away}"`.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }

    /// Total amount staked across both legs.
    pub fn total_stake(&self) -> Amount {
        self.legs[0].stake + self.legs[1].stake
    }
}
