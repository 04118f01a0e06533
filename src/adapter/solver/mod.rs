//! Solver implementations for linear and integer programming.
//!
//! Implements the `port::Solver` trait with concrete backends.

mod highs;

pub use highs::HiGHSSolver;
