//! Solver port for linear and integer programming.
//!
//! Defines the trait for LP/ILP solvers used to select squads. The squad
//! model is a 0/1 integer program; any backend that can maximise a linear
//! objective under linear constraints satisfies this port.
//!
//! # Overview
//!
//! - [`Solver`]: Core LP/ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation
//! - [`SolverOptions`]: Backend-independent run limits

use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Linear and integer programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, etc.)
/// and provide a unified interface for optimization problems.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`). Each call builds its
/// own backend model, so independent solves never share state.
///
/// # Implementation Notes
///
/// - Report infeasible, unbounded and time-limited runs through
///   [`SolutionStatus`], not through `Err`
/// - Reserve `Err` for problems that cannot be handed to the backend at all
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve a linear programming problem.
    ///
    /// Optimizes `c * x` in the direction given by the problem's
    /// [`ObjectiveSense`], subject to the constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is malformed (mismatched dimensions or
    /// non-representable coefficients).
    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution>;

    /// Solve an integer linear programming problem.
    ///
    /// # Errors
    ///
    /// Returns an error if the problem is malformed.
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Direction of optimization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

/// Linear programming problem definition.
///
/// ```text
/// minimize|maximize  c^T * x
/// subject to         constraints
///                    bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    pub objective: Vec<Decimal>,

    /// Whether `c^T * x` is minimized or maximized.
    pub sense: ObjectiveSense,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new minimization problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            sense: ObjectiveSense::Minimize,
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Objective value at `values`.
    #[must_use]
    pub fn objective_value(&self, values: &[Decimal]) -> Decimal {
        self.objective
            .iter()
            .zip(values)
            .map(|(c, v)| *c * *v)
            .sum()
    }
}

/// Integer linear programming problem definition.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    ///
    /// Variables not in this list are continuous (relaxed).
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP with every variable constrained to integer values.
    ///
    /// Combined with [`VariableBounds::binary`] this yields a 0/1 program.
    #[must_use]
    pub fn all_integer(lp: LpProblem) -> Self {
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }
}

/// Backend-independent limits for a single solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// Wall-clock limit; `None` lets the backend run to completion.
    pub time_limit: Option<Duration>,

    /// Let the backend print its own progress log.
    pub verbose: bool,
}

/// Solution to a linear or integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable. Empty unless the status is optimal.
    pub values: Vec<Decimal>,

    /// Objective function value at `values`.
    pub objective: Decimal,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// A solution carrying only a non-optimal status.
    #[must_use]
    pub fn without_values(status: SolutionStatus) -> Self {
        Self {
            values: Vec::new(),
            objective: Decimal::ZERO,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// Solver stopped at its time limit before proving optimality.
    TimeLimit,

    /// Solver encountered an internal error.
    Error(String),
}
