//! Errors raised while configuring or selecting patterns
//!
//! Pattern lifecycle calls are infallible; a gated primitive that has not yet
//! reached its target is ordinary control flow, not an error.

/// Result type for drivetrain pattern operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in drivetrain_patterns
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown pattern: {name} (available: {available})")]
    UnknownPattern { name: String, available: String },

    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidParameter { name: String, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parameter file error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
