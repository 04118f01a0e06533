//! Solver doubles.

use crate::error::Result;
use crate::port::solver::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};

/// A solver that never solves anything and always reports one status.
#[derive(Debug, Clone)]
pub struct StubSolver {
    status: SolutionStatus,
}

impl StubSolver {
    pub fn returning(status: SolutionStatus) -> Self {
        Self { status }
    }
}

impl Solver for StubSolver {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn solve_lp(&self, _problem: &LpProblem) -> Result<LpSolution> {
        Ok(LpSolution::without_values(self.status.clone()))
    }

    fn solve_ilp(&self, _problem: &IlpProblem) -> Result<LpSolution> {
        Ok(LpSolution::without_values(self.status.clone()))
    }
}
