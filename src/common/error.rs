//! Error types for holonomic_dwa

use thiserror::Error;

/// Main error type for the local planner
#[derive(Debug, Error)]
pub enum DwaError {
    /// The goal could not be expressed in the robot frame this cycle
    #[error("Transform unavailable: {0}")]
    TransformUnavailable(String),

    /// A parameter is out of its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The velocity search produced no candidates
    #[error("Cost grid has no candidates")]
    EmptyCostGrid,

    /// The parameter file is not valid TOML for the planner config
    #[error("Cannot read the parameter file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planner operations
pub type DwaResult<T> = Result<T, DwaError>;
