//! Sport catalog listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::Sport;

#[derive(Tabled)]
struct SportRow {
    #[tabled(rename = "League")]
    label: String,
    #[tabled(rename = "Key")]
    key: String,
}

/// Execute `sports`.
pub fn execute() {
    if output::is_json() {
        let sports: Vec<_> = Sport::CATALOG
            .iter()
            .map(|sport| json!({ "key": sport.key(), "label": sport.label() }))
            .collect();
        output::json_output(json!({
            "command": "sports",
            "sports": sports,
        }));
        return;
    }
    if output::is_quiet() {
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Built-in sports");

    let rows: Vec<SportRow> = Sport::CATALOG
        .iter()
        .map(|sport| SportRow {
            label: sport.label().to_string(),
            key: sport.key().to_string(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());

    output::hint(&format!(
        "scan one with {}; any provider key is accepted",
        output::highlight("smartbet scan --sport <key>")
    ));
}
