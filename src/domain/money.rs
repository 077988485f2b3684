//! Monetary types for price, stake and probability representation.

use rust_decimal::Decimal;

/// Decimal odds: the payout multiplier for a unit stake.
pub type Price = Decimal;

/// A currency amount (stake, payout, profit, bankroll).
pub type Amount = Decimal;

/// An implied probability in `[0, 1]` (or above 1 for overround sums).
pub type Probability = Decimal;

/// Decimal places kept for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Decimal places kept for combined implied probabilities.
pub const PROBABILITY_DP: u32 = 4;

/// Round an amount to cents.
///
/// `round_dp` uses banker's rounding (midpoint to even). The result always
/// carries exactly two decimal places, so `50` displays as `50.00`.
#[must_use]
pub fn round_currency(amount: Amount) -> Amount {
    round_fixed(amount, CURRENCY_DP)
}

/// Round a probability to four decimal places (banker's rounding).
#[must_use]
pub fn round_probability(probability: Probability) -> Probability {
    round_fixed(probability, PROBABILITY_DP)
}

fn round_fixed(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp(dp);
    rounded.rescale(dp);
    rounded
}
