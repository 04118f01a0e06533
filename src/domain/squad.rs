//! Optimisation output: the selected roster and its totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::formation::Formation;
use super::id::{PlayerId, TeamId};
use super::player::{CostBasis, Position};

/// A selected player, priced and scored under the model that selected it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    pub team_id: TeamId,
    pub cost: Decimal,
    pub score: Decimal,
}

/// The selected squad, ordered for display: goalkeepers first, then by
/// descending score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster, sorting entries into display order.
    #[must_use]
    pub fn new(mut entries: Vec<RosterEntry>) -> Self {
        entries.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| b.score.cmp(&a.score))
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Number of selected players at a position.
    #[must_use]
    pub fn count_at(&self, position: Position) -> usize {
        self.entries.iter().filter(|e| e.position == position).count()
    }

    /// Number of selected players per team.
    #[must_use]
    pub fn team_counts(&self) -> BTreeMap<&TeamId, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(&entry.team_id).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.entries.iter().map(|e| e.cost).sum()
    }

    #[must_use]
    pub fn total_score(&self) -> Decimal {
        self.entries.iter().map(|e| e.score).sum()
    }
}

/// Aggregate totals of one solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionSummary {
    #[serde(serialize_with = "serialize_formation")]
    pub formation: Formation,
    pub budget: Decimal,
    pub metric: String,
    pub cost_basis: CostBasis,
    pub total_score: Decimal,
    pub total_cost: Decimal,
    /// Objective value reported by the solver.
    pub objective: Decimal,
}

fn serialize_formation<S: serde::Serializer>(
    formation: &Formation,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(formation)
}
