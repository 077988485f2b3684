//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`RawEvent`], [`Bookmaker`] and
//! [`Opportunity`] so tests focus on assertions rather than construction
//! boilerplate.

use rust_decimal::Decimal;

use crate::domain::{
    best_prices, evaluate, Bankroll, Bookmaker, EvaluatorConfig, Market, MarketShape,
    Opportunity, OutcomeQuote, RawEvent, ScanConfig, Sport,
};

/// Create a bookmaker quoting one `h2h` market.
///
/// An empty quote list produces a bookmaker with no markets at all.
pub fn bookmaker(title: &str, quotes: &[(&str, Decimal)]) -> Bookmaker {
    let markets = if quotes.is_empty() {
        Vec::new()
    } else {
        vec![Market {
            key: "h2h".to_string(),
            outcomes: quotes
                .iter()
                .map(|(name, price)| OutcomeQuote {
                    name: (*name).to_string(),
                    price: *price,
                })
                .collect(),
        }]
    };

    Bookmaker {
        key: title.to_lowercase().replace(' ', "_"),
        title: title.to_string(),
        markets,
    }
}

/// Create an event with both teams present.
pub fn event(home: &str, away: &str, bookmakers: Vec<Bookmaker>) -> RawEvent {
    RawEvent {
        id: Some(format!("{home}-{away}").to_lowercase().replace(' ', "-")),
        commence_time: None,
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        bookmakers,
    }
}

/// Event where `home` is best priced at one book and `away` at another.
pub fn split_book_event(home: &str, away: &str, home_price: Decimal, away_price: Decimal) -> RawEvent {
    event(
        home,
        away,
        vec![
            bookmaker("Book X", &[(home, home_price)]),
            bookmaker("Book Y", &[(away, away_price)]),
        ],
    )
}

/// Scan configuration with a strict two-way market shape.
///
/// # Panics
///
/// Panics when `bankroll` is not positive.
pub fn scan_config(bankroll: Decimal, min_profit: Decimal) -> ScanConfig {
    ScanConfig {
        evaluator: EvaluatorConfig {
            bankroll: Bankroll::new(bankroll).expect("test bankroll must be positive"),
            min_profit,
        },
        market_shape: MarketShape::Strict,
    }
}

/// An accepted NBA opportunity on a bankroll of 100.
///
/// # Panics
///
/// Panics when the prices do not form an arbitrage.
pub fn opportunity(home: &str, away: &str, home_price: Decimal, away_price: Decimal) -> Opportunity {
    let raw = split_book_event(home, away, home_price, away_price);
    let config = scan_config(Decimal::ONE_HUNDRED, Decimal::ZERO);
    let best = best_prices(&raw).expect("two outcomes");
    let market = best.two_way(config.market_shape).expect("valid market");
    let teams = raw.teams().expect("teams present");

    evaluate(&Sport::Nba, teams, market, &config.evaluator).expect("prices must form an arbitrage")
}
