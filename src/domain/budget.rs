//! Squad budget rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::formation::Formation;

/// How the spending limit for the selected players is derived.
///
/// A full squad has `squad_size` slots under a `total_budget`. When the
/// formation selects fewer players, each unselected bench slot still reserves
/// `min_bench_cost` of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPolicy {
    pub total_budget: Decimal,
    pub squad_size: u32,
    pub min_bench_cost: Decimal,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            total_budget: dec!(100.0),
            squad_size: 15,
            min_bench_cost: dec!(4.0),
        }
    }
}

impl BudgetPolicy {
    /// Number of bench slots left unfilled by a formation.
    ///
    /// Saturates at zero; formations larger than the squad are rejected by
    /// the model builder.
    #[must_use]
    pub fn bench_slots(&self, formation: &Formation) -> u32 {
        self.squad_size.saturating_sub(formation.total())
    }

    /// Largest budget the selected players can sensibly use.
    #[must_use]
    pub fn max_budget(&self, formation: &Formation) -> Decimal {
        self.total_budget - Decimal::from(self.bench_slots(formation)) * self.min_bench_cost
    }

    /// The requested budget, or the maximum when none was given.
    #[must_use]
    pub fn resolve(&self, requested: Option<Decimal>, formation: &Formation) -> Decimal {
        requested.unwrap_or_else(|| self.max_budget(formation))
    }
}
