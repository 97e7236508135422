//! Error types for the sales trainer.

use std::time::Duration;

/// Top-level error type for the trainer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Reply gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for a missing catalog or session entity.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Reply generator gateway errors. These never cross the API boundary: the
/// training machines recover from every variant with a degraded turn.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Invalid response from gateway: {0}")]
    InvalidResponse(String),

    #[error("Gateway timed out after {0:?}")]
    TimedOut(Duration),

    #[error("No reply generator configured")]
    NotConfigured,
}

/// Result type alias for the trainer.
pub type Result<T> = std::result::Result<T, Error>;
