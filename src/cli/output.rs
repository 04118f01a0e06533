//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::domain::squad::{Roster, SolutionSummary};
use crate::error::Result;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("✓ {message}");
}

/// Print a warning status line.
pub fn warn(message: &str) {
    eprintln!("⚠ {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("✗ {message}");
}

#[derive(Tabled)]
struct RosterRow {
    #[tabled(rename = "Position")]
    position: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Cost")]
    cost: Decimal,
    #[tabled(rename = "Score")]
    score: Decimal,
}

/// Render the roster as a table, goalkeepers first.
#[must_use]
pub fn roster_table(roster: &Roster) -> String {
    let rows: Vec<RosterRow> = roster
        .iter()
        .map(|e| RosterRow {
            position: e.position.as_str(),
            name: e.name.clone(),
            team: e.team_id.to_string(),
            cost: e.cost.normalize(),
            score: e.score.normalize(),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Print the roster table followed by the summary lines.
pub fn squad(roster: &Roster, summary: &SolutionSummary) {
    println!("{}", roster_table(roster));
    println!();
    key_value("Formation:", summary.formation);
    key_value("Budget:", summary.budget.normalize());
    key_value("Metric:", &summary.metric);
    key_value("Cost basis:", summary.cost_basis);
    key_value("Total score:", summary.total_score.normalize());
    key_value("Total cost:", summary.total_cost.normalize());
}

#[derive(Serialize)]
struct SquadReport<'a> {
    roster: &'a Roster,
    summary: &'a SolutionSummary,
}

/// Render roster and summary as pretty-printed JSON.
pub fn squad_json(roster: &Roster, summary: &SolutionSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SquadReport { roster, summary })?)
}
