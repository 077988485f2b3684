//! Best-price aggregation across bookmakers.
//!
//! Reduces one event's quotes to the highest price per outcome name. The
//! result keeps outcome names in first-seen order, which decides the
//! "first two" pair when a market is truncated.

use serde::Deserialize;

use super::error::SkipReason;
use super::event::RawEvent;
use super::money::Price;

/// The highest price seen for one outcome and the bookmaker offering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPrice {
    outcome: String,
    price: Price,
    bookmaker: String,
}

impl BestPrice {
    pub fn new(outcome: impl Into<String>, price: Price, bookmaker: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            price,
            bookmaker: bookmaker.into(),
        }
    }

    pub fn outcome(&self) -> &str {
        &self.outcome
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn bookmaker(&self) -> &str {
        &self.bookmaker
    }
}

/// How to treat markets that quote more than two outcome names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketShape {
    /// Require exactly two outcomes; anything else is skipped.
    #[default]
    Strict,
    /// Compare the first two outcomes in first-seen order and ignore the rest.
    FirstTwo,
}

impl MarketShape {
    /// Config-file spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::FirstTwo => "first_two",
        }
    }
}

/// Two outcomes selected for comparison, both priced above 1.
///
/// Only [`BestPrices::two_way`] builds this, so consumers can divide by
/// either price without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoWay<'a> {
    first: &'a BestPrice,
    second: &'a BestPrice,
}

impl<'a> TwoWay<'a> {
    pub fn first(&self) -> &'a BestPrice {
        self.first
    }

    pub fn second(&self) -> &'a BestPrice {
        self.second
    }
}

/// Best prices for every outcome of one event, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPrices {
    entries: Vec<BestPrice>,
}

impl BestPrices {
    /// Number of distinct outcome names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the best price for an outcome name.
    pub fn get(&self, outcome: &str) -> Option<&BestPrice> {
        self.entries.iter().find(|entry| entry.outcome == outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BestPrice> {
        self.entries.iter()
    }

    /// Select the pair of outcomes to compare.
    ///
    /// # Errors
    ///
    /// [`SkipReason::UnsupportedMarketShape`] when more than two outcomes are
    /// present under [`MarketShape::Strict`], or
    /// [`SkipReason::InvalidPrice`] when a selected price is not above 1.
    pub fn two_way(&self, shape: MarketShape) -> Result<TwoWay<'_>, SkipReason> {
        let found = self.entries.len();
        let (first, second) = match (shape, self.entries.as_slice()) {
            (_, [a, b]) | (MarketShape::FirstTwo, [a, b, ..]) => (a, b),
            (_, [] | [_]) => return Err(SkipReason::InsufficientOutcomes { found }),
            (MarketShape::Strict, _) => return Err(SkipReason::UnsupportedMarketShape { found }),
        };

        for best in [first, second] {
            if best.price <= Price::ONE {
                return Err(SkipReason::InvalidPrice {
                    outcome: best.outcome.clone(),
                    price: best.price,
                });
            }
        }

        Ok(TwoWay { first, second })
    }

    fn offer(&mut self, outcome: &str, price: Price, bookmaker: &str) {
        match self.entries.iter_mut().find(|entry| entry.outcome == outcome) {
            Some(best) => {
                if price > best.price {
                    best.price = price;
                    best.bookmaker = bookmaker.to_string();
                }
            }
            None => self.entries.push(BestPrice::new(outcome, price, bookmaker)),
        }
    }
}

/// Reduce an event to the best price per outcome name.
///
/// Ties keep the bookmaker seen first. Bookmakers without quotes are
/// ignored.
///
/// # Errors
///
/// [`SkipReason::MalformedEvent`] when a team identifier is missing, and
/// [`SkipReason::InsufficientOutcomes`] when fewer than two outcome names
/// were quoted.
pub fn best_prices(event: &RawEvent) -> Result<BestPrices, SkipReason> {
    event.teams()?;

    let mut best = BestPrices::default();
    for bookmaker in &event.bookmakers {
        for quote in bookmaker.quotes() {
            best.offer(&quote.name, quote.price, bookmaker.name());
        }
    }

    if best.len() < 2 {
        return Err(SkipReason::InsufficientOutcomes { found: best.len() });
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{bookmaker, event};
    use rust_decimal_macros::dec;

    #[test]
    fn higher_price_wins_regardless_of_order() {
        let forward = event(
            "Lakers",
            "Celtics",
            vec![
                bookmaker("Book X", &[("Lakers", dec!(1.90)), ("Celtics", dec!(2.00))]),
                bookmaker("Book Y", &[("Lakers", dec!(2.05)), ("Celtics", dec!(1.85))]),
            ],
        );
        let reversed = event(
            "Lakers",
            "Celtics",
            forward.bookmakers.iter().rev().cloned().collect(),
        );

        for raw in [&forward, &reversed] {
            let best = best_prices(raw).unwrap();
            assert_eq!(best.get("Lakers").unwrap().price(), dec!(2.05));
            assert_eq!(best.get("Lakers").unwrap().bookmaker(), "Book Y");
            assert_eq!(best.get("Celtics").unwrap().price(), dec!(2.00));
            assert_eq!(best.get("Celtics").unwrap().bookmaker(), "Book X");
        }
    }

    #[test]
    fn equal_prices_keep_first_bookmaker() {
        let raw = event(
            "Lakers",
            "Celtics",
            vec![
                bookmaker("Book X", &[("Lakers", dec!(2.10)), ("Celtics", dec!(1.80))]),
                bookmaker("Book Y", &[("Lakers", dec!(2.1)), ("Celtics", dec!(1.80))]),
            ],
        );

        let best = best_prices(&raw).unwrap();
        assert_eq!(best.get("Lakers").unwrap().bookmaker(), "Book X");
        assert_eq!(best.get("Celtics").unwrap().bookmaker(), "Book X");
    }

    #[test]
    fn single_outcome_is_insufficient() {
        let raw = event("Lakers", "Celtics", vec![bookmaker("Book X", &[("Lakers", dec!(2.10))])]);

        assert_eq!(
            best_prices(&raw),
            Err(SkipReason::InsufficientOutcomes { found: 1 })
        );
    }

    #[test]
    fn missing_away_team_is_malformed() {
        let mut raw = event(
            "Lakers",
            "Celtics",
            vec![bookmaker("Book X", &[("Lakers", dec!(2.10)), ("Celtics", dec!(2.10))])],
        );
        raw.away_team = None;

        assert_eq!(
            best_prices(&raw),
            Err(SkipReason::MalformedEvent { field: "away_team" })
        );
    }

    #[test]
    fn empty_bookmaker_is_skipped() {
        let raw = event(
            "Lakers",
            "Celtics",
            vec![
                bookmaker("Empty", &[]),
                bookmaker("Book X", &[("Lakers", dec!(2.10)), ("Celtics", dec!(2.10))]),
            ],
        );

        let best = best_prices(&raw).unwrap();
        assert_eq!(best.len(), 2);
        assert!(best.iter().all(|b| b.bookmaker() == "Book X"));
    }

    #[test]
    fn repeated_aggregation_is_identical() {
        let raw = event(
            "Lakers",
            "Celtics",
            vec![
                bookmaker("Book X", &[("Lakers", dec!(1.95)), ("Celtics", dec!(2.02))]),
                bookmaker("Book Y", &[("Celtics", dec!(2.02)), ("Lakers", dec!(1.99))]),
            ],
        );

        assert_eq!(best_prices(&raw), best_prices(&raw));
    }

    #[test]
    fn three_way_market_is_rejected_when_strict() {
        let raw = event(
            "Arsenal",
            "Chelsea",
            vec![bookmaker(
                "Book X",
                &[("Arsenal", dec!(2.60)), ("Chelsea", dec!(2.90)), ("Draw", dec!(3.30))],
            )],
        );
        let best = best_prices(&raw).unwrap();

        assert_eq!(
            best.two_way(MarketShape::Strict),
            Err(SkipReason::UnsupportedMarketShape { found: 3 })
        );
    }

    #[test]
    fn three_way_market_uses_first_two_when_truncating() {
        let raw = event(
            "Arsenal",
            "Chelsea",
            vec![bookmaker(
                "Book X",
                &[("Draw", dec!(3.30)), ("Arsenal", dec!(2.60)), ("Chelsea", dec!(2.90))],
            )],
        );
        let best = best_prices(&raw).unwrap();

        let pair = best.two_way(MarketShape::FirstTwo).unwrap();
        assert_eq!(pair.first().outcome(), "Draw");
        assert_eq!(pair.second().outcome(), "Arsenal");
    }

    #[test]
    fn price_not_above_one_is_invalid() {
        let raw = event(
            "Lakers",
            "Celtics",
            vec![bookmaker("Book X", &[("Lakers", dec!(1.00)), ("Celtics", dec!(5.00))])],
        );
        let best = best_prices(&raw).unwrap();

        assert!(matches!(
            best.two_way(MarketShape::Strict),
            Err(SkipReason::InvalidPrice { ref outcome, .. }) if outcome == "Lakers"
        ));
    }
}
