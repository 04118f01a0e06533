use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Player data loading errors.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open player data: {0}")]
    Io(#[source] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[source] csv::Error),

    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("line {line}: invalid {column} '{value}'")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("solver '{solver}' reached its time limit before proving optimality")]
    SolverTimeout { solver: &'static str },

    #[error("solver error: {0}")]
    Solver(String),

    #[error("invalid optimization problem: {0}")]
    InvalidProblem(String),

    #[error("solution integrity violated: selected {selected} players, formation requires {expected}")]
    Integrity { expected: usize, selected: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
