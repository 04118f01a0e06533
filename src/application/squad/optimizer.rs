//! One squad selection end to end.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use super::builder::ConstraintModelBuilder;
use super::extractor::SolutionExtractor;
use super::SquadRequest;
use crate::domain::dataset::PlayerDataset;
use crate::domain::squad::{Roster, SolutionSummary};
use crate::error::{Error, Result};
use crate::port::solver::{SolutionStatus, Solver};

/// Result of a selection that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum SquadOutcome {
    /// An optimal squad.
    Optimal {
        roster: Roster,
        summary: SolutionSummary,
    },
    /// No squad satisfies every constraint. The caller may relax the
    /// request (e.g. raise the budget) and try again.
    Infeasible,
}

impl SquadOutcome {
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }
}

/// Runs build → solve → extract against a solver backend.
///
/// Holds no per-solve state: every call builds a fresh model.
#[derive(Clone)]
pub struct SquadOptimizer {
    solver: Arc<dyn Solver>,
    builder: ConstraintModelBuilder,
    extractor: SolutionExtractor,
}

impl SquadOptimizer {
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self {
            solver,
            builder: ConstraintModelBuilder::new(),
            extractor: SolutionExtractor::new(),
        }
    }

    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// Select the best squad for `request` from `dataset`.
    ///
    /// Infeasibility is an outcome, not an error.
    ///
    /// # Errors
    ///
    /// - [`Error::Domain`] if the request is invalid for the dataset
    /// - [`Error::SolverTimeout`] if the solver hit its time limit
    /// - [`Error::Solver`] if the solver failed or reported an unbounded model
    /// - [`Error::Integrity`] if the assignment does not match the formation
    pub fn optimize(&self, dataset: &PlayerDataset, request: &SquadRequest) -> Result<SquadOutcome> {
        let model = self.builder.build(dataset, request)?;

        info!(
            solver = self.solver.name(),
            players = dataset.len(),
            formation = %model.formation(),
            budget = %model.budget(),
            metric = model.metric(),
            "Optimizing squad"
        );

        let started = Instant::now();
        let solution = self.solver.solve_ilp(model.problem())?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match solution.status {
            SolutionStatus::Optimal => {
                let (roster, summary) = self.extractor.extract(&model, &solution)?;
                info!(
                    elapsed_ms,
                    total_score = %summary.total_score,
                    total_cost = %summary.total_cost,
                    "Optimal squad found"
                );
                Ok(SquadOutcome::Optimal { roster, summary })
            }
            SolutionStatus::Infeasible => {
                warn!(elapsed_ms, "No squad satisfies the constraints");
                Ok(SquadOutcome::Infeasible)
            }
            SolutionStatus::TimeLimit => Err(Error::SolverTimeout {
                solver: self.solver.name(),
            }),
            SolutionStatus::Unbounded => {
                Err(Error::Solver("model reported unbounded".to_string()))
            }
            SolutionStatus::Error(reason) => Err(Error::Solver(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::formation::Formation;
    use crate::port::solver::{IlpProblem, LpProblem, LpSolution};
    use crate::testkit::dataset::scenario_dataset;
    use crate::testkit::solver::StubSolver;
    use rust_decimal_macros::dec;

    #[test]
    fn infeasible_status_is_an_outcome() {
        let optimizer = SquadOptimizer::new(Arc::new(StubSolver::returning(
            SolutionStatus::Infeasible,
        )));

        let outcome = optimizer
            .optimize(&scenario_dataset(), &SquadRequest::default())
            .unwrap();
        assert_eq!(outcome, SquadOutcome::Infeasible);
        assert!(!outcome.is_optimal());
    }

    #[test]
    fn time_limit_is_a_timeout_error() {
        let optimizer =
            SquadOptimizer::new(Arc::new(StubSolver::returning(SolutionStatus::TimeLimit)));

        let result = optimizer.optimize(&scenario_dataset(), &SquadRequest::default());
        assert!(matches!(result, Err(Error::SolverTimeout { solver: "stub" })));
    }

    #[test]
    fn unbounded_and_errors_are_solver_errors() {
        for status in [
            SolutionStatus::Unbounded,
            SolutionStatus::Error("numerical trouble".to_string()),
        ] {
            let optimizer = SquadOptimizer::new(Arc::new(StubSolver::returning(status)));
            let result = optimizer.optimize(&scenario_dataset(), &SquadRequest::default());
            assert!(matches!(result, Err(Error::Solver(_))));
        }
    }

    #[test]
    fn invalid_request_never_reaches_solver() {
        let optimizer = SquadOptimizer::new(Arc::new(StubSolver::returning(
            SolutionStatus::Optimal,
        )));
        let request = SquadRequest {
            formation: Formation::new(3, 5, 5, 3),
            ..SquadRequest::default()
        };

        let result = optimizer.optimize(&scenario_dataset(), &request);
        assert!(matches!(result, Err(Error::Domain(_))));
    }

    #[test]
    fn optimal_status_with_bad_assignment_is_integrity_error() {
        struct SelectAll;

        impl Solver for SelectAll {
            fn name(&self) -> &'static str {
                "select-all"
            }

            fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
                Ok(LpSolution {
                    values: vec![dec!(1); problem.num_vars()],
                    objective: dec!(0),
                    status: SolutionStatus::Optimal,
                })
            }

            fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
                self.solve_lp(&problem.lp)
            }
        }

        let optimizer = SquadOptimizer::new(Arc::new(SelectAll));
        let result = optimizer.optimize(&scenario_dataset(), &SquadRequest::default());
        assert!(matches!(
            result,
            Err(Error::Integrity {
                expected: 15,
                selected: 20
            })
        ));
    }
}
