//! Error types for the simulation core.
//!
//! Reaching a terminal simulation condition is not an error; these types
//! only cover configurations the engine cannot run and configuration
//! files that cannot be read.

use thiserror::Error;

/// Errors raised when starting a simulation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// More agents were requested than the grid has distinct cells.
    #[error("agent count exceeds grid capacity: requested {requested}, capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// The grid cannot hold even a single cell.
    #[error("grid size {0} is smaller than one cell")]
    GridTooSmall(i32),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML encoding errors
    #[error("TOML encode error: {0}")]
    Encode(#[from] toml::ser::Error),

    /// One or more parameters are out of their accepted range.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl ConfigError {
    /// Messages of every violated range check, empty for other variants.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            ConfigError::Invalid(messages) => messages,
            _ => &[],
        }
    }
}
