//! Linear constraint types for optimization.
//!
//! These types describe the rows of an integer program independently of the
//! solver backend that eventually consumes them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single linear constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub const fn geq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub const fn leq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub const fn eq(coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }

    /// Constraint over a subset of variables, each with coefficient one.
    ///
    /// Counts how many of `indices` are selected in a 0/1 program.
    #[must_use]
    pub fn counting(
        num_vars: usize,
        indices: impl IntoIterator<Item = usize>,
        sense: ConstraintSense,
        rhs: Decimal,
    ) -> Self {
        let mut coefficients = vec![Decimal::ZERO; num_vars];
        for idx in indices {
            coefficients[idx] = Decimal::ONE;
        }
        Self {
            coefficients,
            sense,
            rhs,
        }
    }

    /// Left-hand side evaluated at `values`.
    #[must_use]
    pub fn lhs(&self, values: &[Decimal]) -> Decimal {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| *c * *v)
            .sum()
    }

    /// Whether `values` satisfy the constraint within `tolerance`.
    #[must_use]
    pub fn is_satisfied(&self, values: &[Decimal], tolerance: Decimal) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::GreaterEqual => lhs + tolerance >= self.rhs,
            ConstraintSense::LessEqual => lhs - tolerance <= self.rhs,
            ConstraintSense::Equal => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
    /// Equal (=).
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}
