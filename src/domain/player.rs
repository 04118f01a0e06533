//! Player records and their categorical attributes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{PlayerId, TeamId};

/// Playing position.
///
/// Ordering follows the display order of a squad sheet: goalkeepers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in formation order (goalkeepers, defenders, midfielders, forwards).
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Full position name as it appears in the history data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeeper",
            Self::Defender => "Defender",
            Self::Midfielder => "Midfielder",
            Self::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goalkeeper" | "gk" | "gkp" => Ok(Self::Goalkeeper),
            "defender" | "def" => Ok(Self::Defender),
            "midfielder" | "mid" => Ok(Self::Midfielder),
            "forward" | "fwd" => Ok(Self::Forward),
            other => Err(format!("unknown position '{other}'")),
        }
    }
}

/// Which cost column prices a player.
///
/// Historical data carries the price at the start and end of a season, and
/// the current price for the live season.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostBasis {
    #[default]
    Start,
    Now,
    End,
}

impl CostBasis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Now => "now",
            Self::End => "end",
        }
    }
}

impl fmt::Display for CostBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "now" => Ok(Self::Now),
            "end" => Ok(Self::End),
            other => Err(format!("unknown cost basis '{other}' (expected start, now or end)")),
        }
    }
}

/// One player in one season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team_id: TeamId,
    pub season: String,
    pub start_cost: Decimal,
    pub now_cost: Option<Decimal>,
    pub end_cost: Option<Decimal>,
    /// Numeric performance columns keyed by column name (`total_points`, `minutes`, ...).
    pub metrics: BTreeMap<String, Decimal>,
}

impl PlayerRecord {
    /// Create a record priced at `start_cost` with no metrics.
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        position: Position,
        team_id: impl Into<TeamId>,
        start_cost: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            team_id: team_id.into(),
            season: String::new(),
            start_cost,
            now_cost: None,
            end_cost: None,
            metrics: BTreeMap::new(),
        }
    }

    /// Set the season label.
    #[must_use]
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = season.into();
        self
    }

    /// Set the current-price cost.
    #[must_use]
    pub fn with_now_cost(mut self, cost: Decimal) -> Self {
        self.now_cost = Some(cost);
        self
    }

    /// Add or replace a metric value.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }

    /// Cost under the given basis, if the record carries one.
    #[must_use]
    pub fn cost(&self, basis: CostBasis) -> Option<Decimal> {
        match basis {
            CostBasis::Start => Some(self.start_cost),
            CostBasis::Now => self.now_cost,
            CostBasis::End => self.end_cost,
        }
    }

    /// Value of a metric column, if present and numeric.
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<Decimal> {
        self.metrics.get(name).copied()
    }
}
