//! Domain validation errors for squad modelling.
//!
//! These errors are raised before any solver is invoked, when the inputs to a
//! squad model violate a domain rule. They are surfaced to the caller
//! immediately and are never retried.
//!
//! # Examples
//!
//! ```
//! use squadsolver::domain::error::DomainError;
//! use squadsolver::domain::formation::Formation;
//!
//! let result = "2-5-5".parse::<Formation>();
//! assert!(matches!(result, Err(DomainError::InvalidFormation { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use super::id::PlayerId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Formation string is malformed or cannot be filled.
    #[error("invalid formation '{formation}': {reason}")]
    InvalidFormation {
        /// The formation as supplied.
        formation: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The requested optimisation metric is missing or non-numeric.
    #[error("unknown metric '{metric}': {reason}")]
    UnknownMetric {
        /// Requested metric column.
        metric: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two records in one dataset share a player id.
    #[error("duplicate player id {id} ('{first}' and '{second}')")]
    DuplicatePlayer {
        /// The repeated id.
        id: PlayerId,
        /// Display name of the first record.
        first: String,
        /// Display name of the second record.
        second: String,
    },

    /// A squad cannot be built from an empty dataset.
    #[error("dataset has no players to select from")]
    EmptyDataset,

    /// A record has no cost for the selected cost basis.
    #[error("player {id} has no {basis} cost")]
    MissingCost {
        /// Player lacking the cost.
        id: PlayerId,
        /// Name of the cost basis.
        basis: &'static str,
    },

    /// Budget must be positive.
    #[error("budget must be positive, got {budget}")]
    InvalidBudget {
        /// The invalid budget.
        budget: Decimal,
    },

    /// Team cap must allow at least one player.
    #[error("team cap must be at least 1, got {cap}")]
    InvalidTeamCap {
        /// The invalid cap.
        cap: u32,
    },
}
