//! Command-line interface definitions.

pub mod check;
pub mod optimize;
pub mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::formation::Formation;
use crate::domain::player::CostBasis;

/// Squadsolver - optimal fantasy football squad selection.
#[derive(Parser, Debug)]
#[command(name = "squadsolver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the highest-scoring squad within budget
    Optimize(OptimizeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `squadsolver check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `optimize` subcommand.
#[derive(Parser, Debug)]
pub struct OptimizeArgs {
    /// Path to configuration file (defaults apply when it does not exist)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Player history CSV (overrides [data].path)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Season to optimise, e.g. 2016/17
    #[arg(long, conflicts_with = "all_seasons")]
    pub season: Option<String>,

    /// Use every record without filtering by season
    #[arg(long)]
    pub all_seasons: bool,

    /// Formation as goalkeepers-defenders-midfielders-forwards, e.g. 2-5-5-3
    #[arg(short, long)]
    pub formation: Option<Formation>,

    /// Maximum cost of the selected players
    #[arg(short, long)]
    pub budget: Option<Decimal>,

    /// Price players at their current cost (same as --cost-basis now)
    #[arg(long, conflicts_with = "cost_basis")]
    pub now_cost: bool,

    /// Cost column to price players with: start, now or end
    #[arg(long)]
    pub cost_basis: Option<CostBasis>,

    /// Metric column to maximise
    #[arg(long, visible_alias = "optimize-on")]
    pub optimise_on: Option<String>,

    /// Names of players to exclude, separated by `-`
    #[arg(long)]
    pub exclude_players: Option<String>,

    /// Maximum players from any one team
    #[arg(long)]
    pub team_cap: Option<u32>,

    /// Solver time limit in seconds (0 = unlimited)
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Print the squad as JSON
    #[arg(long)]
    pub json: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl OptimizeArgs {
    /// Player names from `--exclude-players`.
    #[must_use]
    pub fn excluded_names(&self) -> Vec<String> {
        self.exclude_players
            .as_deref()
            .map(|raw| {
                raw.split('-')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cost basis selected on the command line, if any.
    #[must_use]
    pub fn selected_cost_basis(&self) -> Option<CostBasis> {
        if self.now_cost {
            Some(CostBasis::Now)
        } else {
            self.cost_basis
        }
    }
}
