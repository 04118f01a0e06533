//! Squadsolver - optimal fantasy football squad selection.
//!
//! Selects the set of players that maximises a chosen performance metric
//! (total points by default) subject to a formation, a spending limit and a
//! cap on players from any one team. The selection is an integer program
//! solved with HiGHS through `good_lp`.
//!
//! # Architecture
//!
//! - [`domain`] - Players, datasets, formations, budgets and rosters
//! - [`port`] - Traits for player sources and solver backends
//! - [`adapter`] - CSV player history and the HiGHS solver
//! - [`application`] - Model building, solving and roster extraction
//! - [`infrastructure`] - Configuration loading and component factories
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use squadsolver::adapter::dataset::CsvPlayerSource;
//! use squadsolver::adapter::solver::HiGHSSolver;
//! use squadsolver::application::squad::{SquadOptimizer, SquadOutcome, SquadRequest};
//! use squadsolver::domain::PlayerDataset;
//! use squadsolver::port::PlayerSource;
//!
//! fn main() -> squadsolver::error::Result<()> {
//!     let records = CsvPlayerSource::new("data/fpl_history.csv").load()?;
//!     let dataset = PlayerDataset::select_season(records, Some("2016/17"), &[])?;
//!
//!     let optimizer = SquadOptimizer::new(Arc::new(HiGHSSolver::new()));
//!     if let SquadOutcome::Optimal { summary, .. } =
//!         optimizer.optimize(&dataset, &SquadRequest::default())?
//!     {
//!         println!("{}", summary.total_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
