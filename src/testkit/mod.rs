//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`dataset`] - Builders for player records and canned datasets.
//! - [`solver`] - A [`Solver`](crate::port::Solver) that returns a fixed status.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod dataset;
pub mod solver;
