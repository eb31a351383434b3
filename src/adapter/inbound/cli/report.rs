//! Handler for the `report` command.
//!
//! Reads the opportunity logs written by `run` and prints, for each one,
//! how to split a bank across its legs.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};

use super::command::ReportArgs;
use super::config::load_config;
use super::output;
use crate::adapter::outbound::fs::sink::DirectorySink;
use crate::application::report::{OpportunityReport, ReportEntry};
use crate::application::store::OpportunityStore;

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "Outcome")]
    outcome: String,
    #[tabled(rename = "Bookmaker")]
    bookmaker: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Payout")]
    payout: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Execute the report command.
pub fn execute(config_path: &Path, args: &ReportArgs) -> anyhow::Result<OpportunityReport> {
    let config = load_config(config_path)?;
    config.validate_settings()?;

    let directory = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.directory.clone().into());
    let store = OpportunityStore::new(Arc::new(DirectorySink::new(&directory)));

    let mut report = OpportunityReport::build(&store, args.bank)?;
    if let Some(limit) = args.limit {
        report.truncate(limit);
    }

    if output::is_json() {
        output::json_output(report_json(&report));
    } else {
        print_report(&report, &directory.display().to_string());
    }
    Ok(report)
}

fn report_json(report: &OpportunityReport) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = report
        .entries
        .iter()
        .map(|entry| {
            json!({
                "sport": entry.sport.as_str(),
                "match": entry.opportunity.match_name,
                "profit_percentage": entry.opportunity.profit_percentage,
                "commence_time": entry.opportunity.commence_time,
                "legs": entry.plan.legs.iter().map(|leg| json!({
                    "outcome": leg.outcome,
                    "bookmaker": leg.bookmaker,
                    "odds": leg.odds.to_string(),
                    "stake": leg.stake.to_string(),
                    "payout": leg.payout.to_string(),
                    "net": leg.net.to_string(),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "command": "report",
        "bank": report.bank.to_string(),
        "opportunities": entries,
    })
}

fn print_report(report: &OpportunityReport, directory: &str) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", directory);
    output::field("Bank", report.bank);

    if report.is_empty() {
        output::note("No recorded opportunities");
        return;
    }

    for entry in &report.entries {
        print_entry(entry);
    }
}

fn print_entry(entry: &ReportEntry) {
    let opportunity = &entry.opportunity;
    output::section(&format!(
        "{} ({}) +{:.2}%",
        opportunity.match_name, entry.sport, opportunity.profit_percentage
    ));
    output::field("Commences", &opportunity.commence_time);

    let rows: Vec<LegRow> = entry
        .plan
        .legs
        .iter()
        .map(|leg| LegRow {
            outcome: leg.outcome.clone(),
            bookmaker: leg.bookmaker.clone(),
            odds: leg.odds.to_string(),
            stake: leg.stake.to_string(),
            payout: leg.payout.to_string(),
            net: leg.net.to_string(),
        })
        .collect();
    output::lines(&Table::new(rows).to_string());
}
