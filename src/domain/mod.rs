//! Squad-selection domain types.
//!
//! Nothing in this module talks to a solver or a file: it holds the records,
//! rules and results that the application layer wires together.

pub mod budget;
pub mod constraint;
pub mod dataset;
pub mod error;
pub mod formation;
pub mod id;
pub mod player;
pub mod squad;

pub use budget::BudgetPolicy;
pub use constraint::{Constraint, ConstraintSense, VariableBounds};
pub use dataset::PlayerDataset;
pub use error::DomainError;
pub use formation::Formation;
pub use id::{PlayerId, TeamId};
pub use player::{CostBasis, PlayerRecord, Position};
pub use squad::{Roster, RosterEntry, SolutionSummary};
