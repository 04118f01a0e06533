//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Instant;

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution,
    SolutionStatus as LpStatus, SolverModel, Variable,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::solver::{
    IlpProblem, LpProblem, LpSolution, ObjectiveSense, SolutionStatus, Solver, SolverOptions,
};

/// HiGHS-based LP/ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    options: SolverOptions,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with no time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with explicit run limits.
    #[must_use]
    pub fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        solve_with_good_lp(problem, &[], &self.options)
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        solve_with_good_lp(&problem.lp, &problem.integer_vars, &self.options)
    }
}

fn to_f64(value: Decimal, what: &str) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::InvalidProblem(format!("{what} {value} is not representable")))
}

fn linear_expression(vars: &[Variable], coefficients: &[Decimal], what: &str) -> Result<Expression> {
    if coefficients.len() != vars.len() {
        return Err(Error::InvalidProblem(format!(
            "{what} has {} coefficients for {} variables",
            coefficients.len(),
            vars.len()
        )));
    }

    let mut expr = Expression::with_capacity(vars.len());
    for (v, c) in vars.iter().zip(coefficients) {
        if !c.is_zero() {
            expr.add_mul(to_f64(*c, what)?, *v);
        }
    }
    Ok(expr)
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(
    problem: &LpProblem,
    integer_vars: &[usize],
    options: &SolverOptions,
) -> Result<LpSolution> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        });
    }

    if problem.bounds.len() != n {
        return Err(Error::InvalidProblem(format!(
            "{} bounds for {n} variables",
            problem.bounds.len()
        )));
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in problem.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(to_f64(lb, "lower bound")?);
        }
        if let Some(ub) = bounds.upper {
            v = v.max(to_f64(ub, "upper bound")?);
        }

        if integer_vars.contains(&i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective = linear_expression(&var_list, &problem.objective, "objective")?;

    let mut model = match problem.sense {
        ObjectiveSense::Minimize => vars.minimise(objective),
        ObjectiveSense::Maximize => vars.maximise(objective),
    }
    .using(highs);
    model.set_verbose(options.verbose);

    if let Some(limit) = options.time_limit {
        model = model.set_time_limit(limit.as_secs_f64());
    }

    for (row, constr) in problem.constraints.iter().enumerate() {
        let lhs = linear_expression(&var_list, &constr.coefficients, &format!("constraint {row}"))?;
        let rhs = to_f64(constr.rhs, "right-hand side")?;

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    debug!(
        variables = n,
        constraints = problem.constraints.len(),
        integers = integer_vars.len(),
        "Solving with HiGHS"
    );

    let started = Instant::now();
    let outcome = model.solve();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(solution) => {
            // HiGHS hands back its incumbent when a limit stops the search;
            // an unproven incumbent is not an optimum.
            match solution.status() {
                LpStatus::TimeLimit => {
                    debug!(elapsed_ms, "HiGHS stopped at its time limit");
                    return Ok(LpSolution::without_values(SolutionStatus::TimeLimit));
                }
                LpStatus::GapLimit => {
                    debug!(elapsed_ms, "HiGHS stopped within its MIP gap tolerance");
                }
                LpStatus::Optimal => {}
            }

            let mut values = Vec::with_capacity(n);
            for v in &var_list {
                let raw = solution.value(*v);
                let value = Decimal::try_from(raw).map_err(|_| {
                    Error::InvalidProblem(format!("solver returned non-finite value {raw}"))
                })?;
                values.push(value);
            }

            // Re-evaluate objective with the solved values
            let objective = problem.objective_value(&values);

            debug!(elapsed_ms, "HiGHS finished");

            Ok(LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            })
        }
        // A limit hit before any incumbent leaves HiGHS without a primal solution.
        Err(ResolutionError::Other("NoSolutionFound")) if options.time_limit.is_some() => {
            debug!(elapsed_ms, "HiGHS stopped at its time limit without an incumbent");
            Ok(LpSolution::without_values(SolutionStatus::TimeLimit))
        }
        Err(ResolutionError::Infeasible) => Ok(LpSolution::without_values(SolutionStatus::Infeasible)),
        Err(ResolutionError::Unbounded) => Ok(LpSolution::without_values(SolutionStatus::Unbounded)),
        Err(e) => Ok(LpSolution::without_values(SolutionStatus::Error(e.to_string()))),
    }
}
