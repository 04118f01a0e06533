//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured adapters from
//! application configuration.
//!
//! # Submodules
//!
//! - [`dataset`] - Player source construction
//! - [`solver`] - Optimization solver construction

pub mod dataset;
pub mod solver;
