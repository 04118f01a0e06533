//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to the reference defaults (a `2-5-5-3` squad of fifteen under
//! a budget of 100).
//!
//! # Example
//!
//! ```no_run
//! use squadsolver::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::data::DataConfig;
use super::logging::LoggingConfig;
use super::optimizer::OptimizerConfig;
use super::solver::SolverConfig;
use crate::application::squad::SquadRequest;
use crate::domain::budget::BudgetPolicy;
use crate::domain::formation::Formation;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default squad selection parameters.
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Budget derivation when no explicit budget is given.
    #[serde(default)]
    pub budget: BudgetPolicy,

    /// Solver run limits.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Player data location.
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be loaded.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that all values are within acceptable ranges.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        self.formation()?;

        if self.optimizer.metric.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "metric" }.into());
        }
        if self.optimizer.team_cap == 0 {
            return Err(ConfigError::InvalidValue {
                field: "team_cap",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(budget) = self.optimizer.budget {
            if budget <= Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "budget",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }

        if self.budget.total_budget <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "total_budget",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.budget.squad_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "squad_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.budget.min_bench_cost < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "min_bench_cost",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }

        if self.data.cost_divisor <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "cost_divisor",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// The configured formation.
    #[allow(clippy::result_large_err)]
    pub fn formation(&self) -> Result<Formation> {
        let formation = self
            .optimizer
            .formation
            .parse::<Formation>()
            .map_err(|e| ConfigError::InvalidValue {
                field: "formation",
                reason: e.to_string(),
            })?;

        if formation.total() > self.budget.squad_size {
            return Err(ConfigError::InvalidValue {
                field: "formation",
                reason: format!(
                    "{} players exceeds squad_size {}",
                    formation.total(),
                    self.budget.squad_size
                ),
            }
            .into());
        }
        Ok(formation)
    }

    /// Season to select, treating an empty label as "no filter".
    #[must_use]
    pub fn season(&self) -> Option<&str> {
        self.optimizer
            .season
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// The squad request described by this configuration.
    #[allow(clippy::result_large_err)]
    pub fn squad_request(&self) -> Result<SquadRequest> {
        Ok(SquadRequest {
            formation: self.formation()?,
            budget: self.optimizer.budget,
            metric: self.optimizer.metric.clone(),
            cost_basis: self.optimizer.cost_basis,
            team_cap: self.optimizer.team_cap,
            budget_policy: self.budget,
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
