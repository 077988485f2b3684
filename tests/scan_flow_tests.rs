//! End-to-end scan flow: canned provider events through the scanner into
//! the CSV log.

use std::sync::Arc;

use rust_decimal_macros::dec;

use smartbet::adapter::outbound::csv_log::{CsvLog, HEADER};
use smartbet::app::Scanner;
use smartbet::domain::{MarketShape, ScanConfig, SkipReason, Sport};
use smartbet::testkit::domain::{bookmaker, event, scan_config, split_book_event};
use smartbet::testkit::port::StaticOddsSource;

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader.records().map(Result::unwrap).collect()
}

fn nba_source() -> StaticOddsSource {
    StaticOddsSource::new().with_events(
        Sport::Nba,
        vec![
            split_book_event("Lakers", "Celtics", dec!(2.10), dec!(2.10)),
            split_book_event("Heat", "Knicks", dec!(1.50), dec!(1.80)),
        ],
    )
}

#[tokio::test]
async fn only_accepted_opportunities_reach_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/arbitrage_log.csv");
    let mut log = CsvLog::open(&path).unwrap();

    let scanner = Scanner::new(Arc::new(nba_source()), scan_config(dec!(100), dec!(0)), 5);
    let report = scanner.run(&[Sport::Nba], Some(&mut log)).await;

    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.sports[0].rejected.len(), 1);
    assert_eq!(report.persisted, 1);

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), HEADER.to_vec());
    assert_eq!(&rows[1][1], "basketball_nba");
    assert_eq!(&rows[1][2], "Lakers");
    assert_eq!(&rows[1][5], "Book X");
    assert_eq!(&rows[1][8], "50.00");
    assert_eq!(&rows[1][9], "50.00");
    assert_eq!(&rows[1][10], "5.00");
    assert_eq!(&rows[1][11], "0.9524");
}

#[tokio::test]
async fn repeated_runs_append_without_a_second_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let scanner = Scanner::new(Arc::new(nba_source()), scan_config(dec!(100), dec!(0)), 5);

    for _ in 0..2 {
        let mut log = CsvLog::open(&path).unwrap();
        scanner.run(&[Sport::Nba], Some(&mut log)).await;
    }

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "timestamp");
    assert_ne!(&rows[2][0], "timestamp");
}

#[tokio::test]
async fn min_profit_filters_before_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.csv");
    let mut log = CsvLog::open(&path).unwrap();

    let scanner = Scanner::new(Arc::new(nba_source()), scan_config(dec!(100), dec!(5.01)), 5);
    let report = scanner.run(&[Sport::Nba], Some(&mut log)).await;

    assert!(report.is_empty());
    assert_eq!(report.sports[0].rejected.len(), 2);
    assert_eq!(read_rows(&path).len(), 1);
}

#[tokio::test]
async fn three_way_soccer_markets_depend_on_market_shape() {
    let match_event = event(
        "Arsenal",
        "Chelsea",
        vec![
            bookmaker(
                "Book X",
                &[("Arsenal", dec!(2.80)), ("Chelsea", dec!(2.90)), ("Draw", dec!(3.40))],
            ),
            bookmaker("Book Y", &[("Arsenal", dec!(3.10)), ("Chelsea", dec!(2.70))]),
        ],
    );
    let source = Arc::new(StaticOddsSource::new().with_events(Sport::Epl, vec![match_event]));

    let strict = Scanner::new(source.clone(), scan_config(dec!(100), dec!(0)), 5);
    let report = strict.run(&[Sport::Epl], None).await;
    assert_eq!(
        report.sports[0].skipped[0].reason,
        SkipReason::UnsupportedMarketShape { found: 3 }
    );

    let loose_config = ScanConfig {
        market_shape: MarketShape::FirstTwo,
        ..scan_config(dec!(100), dec!(0))
    };
    let loose = Scanner::new(source, loose_config, 5);
    let report = loose.run(&[Sport::Epl], None).await;
    let opportunity = &report.ranked[0];
    assert_eq!(opportunity.first().bookmaker, "Book Y");
    assert_eq!(opportunity.first().price, dec!(3.10));
    assert_eq!(opportunity.second().price, dec!(2.90));
}

#[tokio::test]
async fn each_sport_is_fetched_once() {
    let source = Arc::new(nba_source());
    let scanner = Scanner::new(source.clone(), scan_config(dec!(100), dec!(0)), 5);

    scanner.run(&Sport::CATALOG, None).await;

    assert_eq!(source.fetch_count(), Sport::CATALOG.len());
}
