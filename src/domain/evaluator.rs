//! Two-way arbitrage evaluation.
//!
//! Given the best price for each side of a market, the evaluator splits a
//! bankroll in proportion to the implied probabilities. That split pays the
//! same amount whichever side wins; when the implied probabilities sum to
//! less than one, that payout exceeds the bankroll.
//!
//! Stakes and profit are rounded to cents and the combined probability to
//! four places, all with banker's rounding. Profit is taken from the
//! unrounded stakes. Each stake is rounded on its own, so the two payouts
//! `stake × price` can differ by up to a cent times the larger price.
//!
//! An event is an arbitrage when the combined probability, rounded to four
//! places, is below one. A sum in `[0.99995, 1)` rounds to `1.0000` and is
//! rejected as overround.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::best_price::{BestPrice, TwoWay};
use super::error::{DomainError, SkipReason};
use super::event::Teams;
use super::money::{round_currency, round_probability, Amount, Price, Probability};
use super::opportunity::{Opportunity, OpportunityLeg};
use super::sport::Sport;

/// Largest accepted bankroll. Keeps every stake split well inside
/// `Decimal` range.
pub const MAX_BANKROLL: Amount = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A bankroll that has been checked to be positive and at most [`MAX_BANKROLL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bankroll(Amount);

impl Bankroll {
    /// # Errors
    ///
    /// [`DomainError::NonPositiveBankroll`] for zero or negative amounts,
    /// [`DomainError::BankrollTooLarge`] above [`MAX_BANKROLL`].
    pub fn new(amount: Amount) -> Result<Self, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::NonPositiveBankroll { bankroll: amount });
        }
        if amount > MAX_BANKROLL {
            return Err(DomainError::BankrollTooLarge {
                bankroll: amount,
                max: MAX_BANKROLL,
            });
        }
        Ok(Self(amount))
    }

    #[must_use]
    pub const fn amount(self) -> Amount {
        self.0
    }
}

/// Thresholds applied to every evaluated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub bankroll: Bankroll,
    /// Minimum guaranteed profit (inclusive) for an event to count.
    pub min_profit: Amount,
}

/// The stake split for a pair of prices and a bankroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StakeSplit {
    pub implied_first: Probability,
    pub implied_second: Probability,
    /// Unrounded sum of both implied probabilities.
    pub total_implied: Probability,
    pub stake_first: Amount,
    pub stake_second: Amount,
    pub guaranteed_return: Amount,
    pub profit: Amount,
}

impl StakeSplit {
    /// Split `bankroll` across two decimal prices.
    ///
    /// Returns `None` unless both prices are above 1 and the split stays
    /// within `Decimal` range.
    #[must_use]
    pub fn compute(first: Price, second: Price, bankroll: Bankroll) -> Option<Self> {
        if first <= Decimal::ONE || second <= Decimal::ONE {
            return None;
        }
        Self::split(first, second, bankroll)
    }

    /// Split `bankroll` across a validated two-way market.
    ///
    /// `None` when an intermediate value leaves `Decimal` range.
    #[must_use]
    pub fn for_market(market: TwoWay<'_>, bankroll: Bankroll) -> Option<Self> {
        Self::split(market.first().price(), market.second().price(), bankroll)
    }

    /// Both prices must be above 1.
    fn split(first: Price, second: Price, bankroll: Bankroll) -> Option<Self> {
        let bankroll = bankroll.amount();
        let implied_first = Decimal::ONE.checked_div(first)?;
        let implied_second = Decimal::ONE.checked_div(second)?;
        let total_implied = implied_first.checked_add(implied_second)?;

        let stake_first = bankroll.checked_mul(implied_first.checked_div(total_implied)?)?;
        let stake_second = bankroll.checked_mul(implied_second.checked_div(total_implied)?)?;
        let guaranteed_return = stake_first.checked_mul(first)?;
        let profit = guaranteed_return.checked_sub(stake_first.checked_add(stake_second)?)?;

        Some(Self {
            implied_first,
            implied_second,
            total_implied,
            stake_first: round_currency(stake_first),
            stake_second: round_currency(stake_second),
            guaranteed_return: round_currency(guaranteed_return),
            profit: round_currency(profit),
        })
    }

    /// Whether the implied probabilities, rounded to four places, sum to
    /// less than one.
    #[must_use]
    pub fn is_arbitrage(&self) -> bool {
        round_probability(self.total_implied) < Decimal::ONE
    }
}

/// What made a valid comparison fall short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectCause {
    /// Implied probabilities sum to one or more.
    Overround,
    /// An arbitrage exists but pays less than the configured minimum.
    BelowMinProfit,
}

/// A valid two-way comparison that is not an opportunity.
///
/// Carries what a diagnostic display needs: both sides, their implied
/// probabilities and the sum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no arbitrage: {first_outcome} @ {first_price} + {second_outcome} @ {second_price} implies {total_implied}")]
pub struct NoArbitrage {
    pub cause: RejectCause,
    pub first_outcome: String,
    pub first_price: Price,
    pub second_outcome: String,
    pub second_price: Price,
    pub split: StakeSplit,
    pub total_implied: Probability,
    pub min_profit: Amount,
}

/// Why [`evaluate`] produced no opportunity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A valid comparison without a (large enough) arbitrage.
    #[error(transparent)]
    NoArbitrage(#[from] NoArbitrage),

    /// The prices cannot be split at all.
    #[error(transparent)]
    Skipped(#[from] SkipReason),
}

/// Evaluate one event's best prices.
///
/// `teams` supplies the home/away order used in the description, which may
/// differ from the order of the compared outcomes.
///
/// # Errors
///
/// [`Rejection::NoArbitrage`] unless the rounded combined implied
/// probability is strictly below one and the profit is at least
/// `config.min_profit`; [`Rejection::Skipped`] with
/// [`SkipReason::StakeOverflow`] when the split leaves `Decimal` range.
pub fn evaluate(
    sport: &Sport,
    teams: Teams<'_>,
    market: TwoWay<'_>,
    config: &EvaluatorConfig,
) -> Result<Opportunity, Rejection> {
    let (first, second) = (market.first(), market.second());
    let split = StakeSplit::for_market(market, config.bankroll).ok_or_else(|| {
        SkipReason::StakeOverflow {
            first: first.price(),
            second: second.price(),
        }
    })?;

    let cause = if !split.is_arbitrage() {
        Some(RejectCause::Overround)
    } else if split.profit < config.min_profit {
        Some(RejectCause::BelowMinProfit)
    } else {
        None
    };

    if let Some(cause) = cause {
        return Err(NoArbitrage {
            cause,
            first_outcome: first.outcome().to_string(),
            first_price: first.price(),
            second_outcome: second.outcome().to_string(),
            second_price: second.price(),
            split,
            total_implied: round_probability(split.total_implied),
            min_profit: config.min_profit,
        }
        .into());
    }

    let description = format!(
        "{} — {} vs {}",
        sport.description_label(),
        teams.home,
        teams.away
    );

    Ok(Opportunity::new(
        sport.clone(),
        [
            leg(first, split.stake_first, split.implied_first),
            leg(second, split.stake_second, split.implied_second),
        ],
        split.profit,
        round_probability(split.total_implied),
        description,
    ))
}

fn leg(best: &BestPrice, stake: Amount, implied: Probability) -> OpportunityLeg {
    OpportunityLeg {
        outcome: best.outcome().to_string(),
        bookmaker: best.bookmaker().to_string(),
        price: best.price(),
        stake,
        implied_probability: implied,
    }
}
