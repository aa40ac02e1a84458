//! Error types for algostep-core.

use thiserror::Error;

/// Engine error types.
///
/// None of these are fatal: every failure is returned to the caller so a
/// front-end can display it and let the user correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Start vertex is not part of the graph.
    #[error("Start vertex '{0}' not in vertices")]
    InvalidStart(String),

    /// Sort input rejected during preparation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Algorithm name not recognised.
    #[error("Unknown algorithm '{0}' (expected one of: dfs, bfs, bubble, insertion, selection, counting)")]
    UnknownAlgorithm(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
