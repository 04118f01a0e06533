//! Player data sources.
//!
//! Implements the `port::PlayerSource` trait over files on disk.

mod history;

pub use history::{read_players, CsvPlayerSource};
