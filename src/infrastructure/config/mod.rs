//! Infrastructure configuration modules.

pub mod data;
pub mod logging;
pub mod optimizer;
pub mod settings;
pub mod solver;

pub use settings::Config;
