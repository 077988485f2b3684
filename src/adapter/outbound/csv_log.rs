//! Append-only CSV log of accepted opportunities.
//!
//! One row per opportunity. The header is written only when the file is
//! created (or found empty), so repeated runs extend the same log.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::debug;

use crate::domain::Opportunity;
use crate::error::Result;
use crate::port::outbound::sink::OpportunitySink;

/// Column names, in row order.
pub const HEADER: [&str; 12] = [
    "timestamp",
    "sport",
    "team1",
    "team2",
    "odds1",
    "book1",
    "odds2",
    "book2",
    "stake1",
    "stake2",
    "profit",
    "total_prob",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV file sink.
pub struct CsvLog {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvLog {
    /// Open `path` for appending, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let is_new = fs::metadata(&path).map_or(true, |meta| meta.len() == 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer.write_record(HEADER)?;
            writer.flush()?;
            debug!(path = %path.display(), "Created opportunity log");
        }

        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The CSV row for one opportunity.
#[must_use]
pub fn row(opportunity: &Opportunity) -> [String; 12] {
    let [first, second] = opportunity.legs();
    [
        opportunity
            .detected_at()
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        opportunity.sport().key().to_string(),
        first.outcome.clone(),
        second.outcome.clone(),
        first.price.to_string(),
        first.bookmaker.clone(),
        second.price.to_string(),
        second.bookmaker.clone(),
        first.stake.to_string(),
        second.stake.to_string(),
        opportunity.profit().to_string(),
        opportunity.total_implied().to_string(),
    ]
}

impl OpportunitySink for CsvLog {
    fn record(&mut self, opportunity: &Opportunity) -> Result<()> {
        self.writer.write_record(row(opportunity))?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::opportunity;
    use rust_decimal_macros::dec;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn writes_header_once_across_reopens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("arbitrage_log.csv");

        let mut log = CsvLog::open(&path).unwrap();
        log.record(&opportunity("Lakers", "Celtics", dec!(2.10), dec!(2.10)))
            .unwrap();
        drop(log);

        let mut log = CsvLog::open(&path).unwrap();
        log.record(&opportunity("Heat", "Knicks", dec!(2.50), dec!(1.80)))
            .unwrap();
        drop(log);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER.join(","));
        assert!(lines[1].contains(",basketball_nba,Lakers,Celtics,2.10,Book X,2.10,Book Y,50.00,50.00,5.00,0.9524"));
        assert!(lines[2].contains(",Heat,Knicks,"));
    }

    #[test]
    fn row_starts_with_local_timestamp() {
        let opp = opportunity("Lakers", "Celtics", dec!(2.10), dec!(2.10));
        let row = row(&opp);

        assert_eq!(row[0].len(), "2025-01-01 12:00:00".len());
        assert_eq!(row[1], "basketball_nba");
    }

    #[test]
    fn quotes_fields_containing_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        let mut log = CsvLog::open(&path).unwrap();
        log.record(&opportunity("Washington, DC", "Boston", dec!(2.10), dec!(2.10)))
            .unwrap();
        drop(log);

        let lines = read_lines(&path);
        assert!(lines[1].contains("\"Washington, DC\""));
    }
}
