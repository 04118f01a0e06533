//! Squad selection: build the integer program, solve it, read back the roster.
//!
//! ```text
//! PlayerDataset ─▶ ConstraintModelBuilder ─▶ SquadModel ─▶ Solver ─▶ SolutionExtractor
//!                                                                      │
//!                                                         (Roster, SolutionSummary)
//! ```

mod builder;
mod extractor;
mod optimizer;

pub use builder::{ConstraintModelBuilder, SquadModel};
pub use extractor::SolutionExtractor;
pub use optimizer::{SquadOptimizer, SquadOutcome};

use rust_decimal::Decimal;

use crate::domain::budget::BudgetPolicy;
use crate::domain::formation::Formation;
use crate::domain::player::CostBasis;

/// Metric optimised when none is configured.
pub const DEFAULT_METRIC: &str = "total_points";

/// Maximum players from one team when none is configured.
pub const DEFAULT_TEAM_CAP: u32 = 3;

/// Everything that parametrises one squad selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SquadRequest {
    pub formation: Formation,
    /// Spending limit; `None` derives it from `budget_policy`.
    pub budget: Option<Decimal>,
    /// Metric column to maximise.
    pub metric: String,
    pub cost_basis: CostBasis,
    pub team_cap: u32,
    pub budget_policy: BudgetPolicy,
}

impl Default for SquadRequest {
    fn default() -> Self {
        Self {
            formation: Formation::default(),
            budget: None,
            metric: DEFAULT_METRIC.to_string(),
            cost_basis: CostBasis::default(),
            team_cap: DEFAULT_TEAM_CAP,
            budget_policy: BudgetPolicy::default(),
        }
    }
}
