//! Implementations of ports (hexagonal adapters).

pub mod dataset;
pub mod solver;
