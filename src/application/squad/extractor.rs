//! Read a solver assignment back into a roster.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::error;

use super::builder::SquadModel;
use crate::domain::squad::{Roster, RosterEntry, SolutionSummary};
use crate::error::{Error, Result};
use crate::port::solver::LpSolution;

/// Values at or below this are treated as "not selected".
const SELECTION_TOLERANCE: Decimal = dec!(0.000001);

/// Slack allowed when re-checking the assignment against the model rows.
const FEASIBILITY_TOLERANCE: Decimal = dec!(0.0001);

/// Turns a solved [`SquadModel`] into a [`Roster`] and its [`SolutionSummary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionExtractor;

impl SolutionExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Collect every player whose variable is non-zero.
    ///
    /// Values such as `0.9999999` count as selected. The number of selected
    /// players must equal the formation total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solver`] if the solution carries no assignment for the
    /// model or the assignment breaks a model row, and [`Error::Integrity`] if
    /// the selected count does not match the formation. Both mean the model or
    /// solver is broken.
    pub fn extract(
        &self,
        model: &SquadModel<'_>,
        solution: &LpSolution,
    ) -> Result<(Roster, SolutionSummary)> {
        if solution.values.len() != model.num_vars() {
            return Err(Error::Solver(format!(
                "assignment has {} values for {} variables (status {:?})",
                solution.values.len(),
                model.num_vars(),
                solution.status
            )));
        }

        let mut entries = Vec::new();
        for (var, value) in solution.values.iter().enumerate() {
            if value.abs() <= SELECTION_TOLERANCE {
                continue;
            }
            let Some(player) = model.player(var) else {
                continue;
            };
            entries.push(RosterEntry {
                id: player.id.clone(),
                name: player.name.clone(),
                position: player.position,
                team_id: player.team_id.clone(),
                cost: model.cost(var),
                score: model.score(var),
            });
        }

        let expected = model.formation().total() as usize;
        if entries.len() != expected {
            error!(
                expected,
                selected = entries.len(),
                "Solver assignment does not match formation"
            );
            return Err(Error::Integrity {
                expected,
                selected: entries.len(),
            });
        }

        let violated = model
            .problem()
            .lp
            .constraints
            .iter()
            .position(|row| !row.is_satisfied(&solution.values, FEASIBILITY_TOLERANCE));
        if let Some(row) = violated {
            error!(row, "Solver assignment violates a model constraint");
            return Err(Error::Solver(format!(
                "assignment violates constraint row {row}"
            )));
        }

        let roster = Roster::new(entries);
        let summary = SolutionSummary {
            formation: model.formation(),
            budget: model.budget(),
            metric: model.metric().to_string(),
            cost_basis: model.cost_basis(),
            total_score: roster.total_score(),
            total_cost: roster.total_cost(),
            objective: solution.objective,
        };

        Ok((roster, summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::squad::{ConstraintModelBuilder, SquadRequest};
    use crate::domain::dataset::PlayerDataset;
    use crate::domain::formation::Formation;
    use crate::domain::player::Position;
    use crate::port::solver::SolutionStatus;
    use crate::testkit::dataset::player;

    fn small_dataset() -> PlayerDataset {
        PlayerDataset::try_new(vec![
            player("gk", Position::Goalkeeper, "a", dec!(4.0), dec!(50)),
            player("d1", Position::Defender, "a", dec!(4.5), dec!(60)),
            player("d2", Position::Defender, "b", dec!(5.0), dec!(70)),
            player("m1", Position::Midfielder, "b", dec!(6.0), dec!(90)),
        ])
        .unwrap()
    }

    fn request() -> SquadRequest {
        SquadRequest {
            formation: Formation::new(1, 1, 1, 0),
            budget: Some(dec!(20)),
            ..SquadRequest::default()
        }
    }

    fn optimal(values: Vec<Decimal>, objective: Decimal) -> LpSolution {
        LpSolution {
            values,
            objective,
            status: SolutionStatus::Optimal,
        }
    }

    #[test]
    fn extracts_selected_players_with_slack() {
        let dataset = small_dataset();
        let model = ConstraintModelBuilder::new().build(&dataset, &request()).unwrap();
        let solution = optimal(
            vec![dec!(0.9999999), dec!(0.0000001), dec!(1.0), dec!(1)],
            dec!(210),
        );

        let (roster, summary) = SolutionExtractor::new().extract(&model, &solution).unwrap();

        let ids: Vec<&str> = roster.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["gk", "d2", "m1"]);
        assert_eq!(summary.total_score, dec!(210));
        assert_eq!(summary.total_cost, dec!(15.0));
        assert_eq!(summary.budget, dec!(20));
        assert_eq!(summary.formation, Formation::new(1, 1, 1, 0));
        assert_eq!(summary.metric, "total_points");
        assert_eq!(summary.objective, dec!(210));
    }

    #[test]
    fn count_mismatch_is_integrity_error() {
        let dataset = small_dataset();
        let model = ConstraintModelBuilder::new().build(&dataset, &request()).unwrap();
        let solution = optimal(vec![dec!(1), dec!(1), dec!(1), dec!(1)], dec!(270));

        let result = SolutionExtractor::new().extract(&model, &solution);
        assert!(matches!(
            result,
            Err(Error::Integrity {
                expected: 3,
                selected: 4
            })
        ));
    }

    #[test]
    fn assignment_breaking_formation_is_solver_error() {
        let dataset = small_dataset();
        let model = ConstraintModelBuilder::new().build(&dataset, &request()).unwrap();
        // Right head count, but two defenders and no midfielder.
        let solution = optimal(vec![dec!(1), dec!(1), dec!(1), dec!(0)], dec!(180));

        let result = SolutionExtractor::new().extract(&model, &solution);
        assert!(matches!(result, Err(Error::Solver(_))));
    }

    #[test]
    fn missing_assignment_is_solver_error() {
        let dataset = small_dataset();
        let model = ConstraintModelBuilder::new().build(&dataset, &request()).unwrap();
        let solution = LpSolution::without_values(SolutionStatus::Infeasible);

        let result = SolutionExtractor::new().extract(&model, &solution);
        assert!(matches!(result, Err(Error::Solver(_))));
    }
}
