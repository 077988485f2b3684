//! Explanation of two-way arbitrage with a worked example.
//!
//! The example figures come from [`StakeSplit`], so they always match what
//! `scan` would report for the same prices.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::domain::money::{round_currency, round_probability};
use crate::domain::{Bankroll, StakeSplit};
use crate::error::Result;

const EXAMPLE_PRICE: Decimal = dec!(2.10);
const EXAMPLE_BANKROLL: Decimal = dec!(100);

/// Stake on each side to collect a fixed payout, and the resulting profit.
fn fixed_payout(price: Decimal, payout: Decimal) -> (Decimal, Decimal) {
    let stake = payout / price;
    (round_currency(stake), round_currency(payout - stake - stake))
}

/// Execute `explain`.
pub fn execute() -> Result<()> {
    let bankroll = Bankroll::new(EXAMPLE_BANKROLL)?;
    let Some(split) = StakeSplit::compute(EXAMPLE_PRICE, EXAMPLE_PRICE, bankroll) else {
        return Ok(());
    };
    let (fixed_stake, fixed_profit) = fixed_payout(EXAMPLE_PRICE, EXAMPLE_BANKROLL);
    let total_implied = round_probability(split.total_implied);

    if output::is_json() {
        output::json_output(json!({
            "command": "explain",
            "example": {
                "prices": [EXAMPLE_PRICE, EXAMPLE_PRICE],
                "bankroll": EXAMPLE_BANKROLL,
                "split": split,
                "total_implied": total_implied,
                "fixed_payout": {
                    "payout": EXAMPLE_BANKROLL,
                    "stake_each": fixed_stake,
                    "profit": fixed_profit,
                },
            },
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));

    output::section("Two-way arbitrage");
    output::lines(
        "A decimal price p implies a win probability of 1/p. When the best
prices for both sides of a match, taken from different bookmakers, imply
probabilities that sum to less than 1, betting both sides returns more
than the total stake whichever side wins.",
    );

    output::section("Stake split");
    output::lines(
        "The bankroll is split in proportion to each side's implied probability:

  stake_a = bankroll × (1/p_a) / (1/p_a + 1/p_b)
  stake_b = bankroll × (1/p_b) / (1/p_a + 1/p_b)

Both legs then pay the same amount, bankroll / (1/p_a + 1/p_b).",
    );

    output::section("Worked example");
    output::lines(&format!(
        "Team A @ {p} at one book, Team B @ {p} at another, bankroll {b}

  1/{p} + 1/{p} = {total}  (below 1, so this is an arbitrage)
  stake A {sa}, stake B {sb}
  either side pays {ret}, profit {profit}

Framed as a fixed {b} payout instead: stake {fs} on each side,
total {total_fixed}, profit {fp}.",
        p = EXAMPLE_PRICE,
        b = EXAMPLE_BANKROLL,
        total = total_implied,
        sa = split.stake_first,
        sb = split.stake_second,
        ret = split.guaranteed_return,
        profit = output::positive(split.profit),
        fs = fixed_stake,
        total_fixed = fixed_stake + fixed_stake,
        fp = output::positive(fixed_profit),
    ));

    output::hint(&format!(
        "set a floor with {}",
        output::highlight("smartbet scan --min-profit <amount>")
    ));

    Ok(())
}
