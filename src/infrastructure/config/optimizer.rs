//! Squad selection defaults.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::squad::{DEFAULT_METRIC, DEFAULT_TEAM_CAP};
use crate::domain::player::CostBasis;

/// Default parameters of a squad selection; CLI flags override each one.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerConfig {
    /// Formation as `goalkeepers-defenders-midfielders-forwards`.
    #[serde(default = "default_formation")]
    pub formation: String,
    /// Metric column to maximise.
    #[serde(default = "default_metric")]
    pub metric: String,
    /// Which cost column prices players.
    #[serde(default)]
    pub cost_basis: CostBasis,
    /// Season to select from; `None` requires a single-season dataset.
    #[serde(default = "default_season")]
    pub season: Option<String>,
    /// Maximum players from one team.
    #[serde(default = "default_team_cap")]
    pub team_cap: u32,
    /// Spending limit; derived from `[budget]` when unset.
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Display names to leave out of the selection.
    #[serde(default)]
    pub exclude_players: Vec<String>,
}

fn default_formation() -> String {
    "2-5-5-3".to_string()
}

fn default_metric() -> String {
    DEFAULT_METRIC.to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_season() -> Option<String> {
    Some("2016/17".to_string())
}

const fn default_team_cap() -> u32 {
    DEFAULT_TEAM_CAP
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            formation: default_formation(),
            metric: default_metric(),
            cost_basis: CostBasis::default(),
            season: default_season(),
            team_cap: default_team_cap(),
            budget: None,
            exclude_players: Vec::new(),
        }
    }
}
