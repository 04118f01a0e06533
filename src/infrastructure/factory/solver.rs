//! Solver factory.
//!
//! Provides factory functions for constructing the integer-program solver
//! used by squad selection.

use std::sync::Arc;

use crate::adapter::solver::HiGHSSolver;
use crate::infrastructure::config::solver::SolverConfig;
use crate::port::solver::{Solver, SolverOptions};

/// Build the default squad solver: HiGHS with the configured run limits.
pub fn build_solver(config: &SolverConfig) -> Arc<dyn Solver> {
    Arc::new(HiGHSSolver::with_options(SolverOptions::from(config)))
}
