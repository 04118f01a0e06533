//! Player data location.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Where player history is read from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// History CSV written by the fetch tooling.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Divisor applied to cost columns (10 when costs are stored in tenths).
    #[serde(default = "default_cost_divisor")]
    pub cost_divisor: Decimal,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/fpl_history.csv")
}

fn default_cost_divisor() -> Decimal {
    Decimal::from(10)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            cost_divisor: default_cost_divisor(),
        }
    }
}
