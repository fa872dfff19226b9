//! Common error types for POP

use thiserror::Error;

/// Common result type for POP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the POP crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Roster file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or resolution error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or roster value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Airspeed requested from a bird that cannot fly
    #[error("{0} swallow cannot fly: thrown from the bridge of death")]
    Grounded(String),
}
