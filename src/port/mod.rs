//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where external capabilities plug into the squad
//! optimizer.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────────────┐      ┌──────────────┐
//!   │ PlayerSource │ ───▶ │  application::squad  │ ───▶ │    Solver    │
//!   │  (CSV file)  │      │ build/solve/extract  │      │   (HiGHS)    │
//!   └──────────────┘      └──────────────────────┘      └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`PlayerSource`] - Player history records
//! - [`Solver`] - LP/ILP optimization backend

pub mod dataset;
pub mod solver;

pub use dataset::PlayerSource;
pub use solver::{
    IlpProblem, LpProblem, LpSolution, ObjectiveSense, SolutionStatus, Solver, SolverOptions,
};
