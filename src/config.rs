//! Configuration types.

use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Trainer service configuration.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Bounded wait for a single reply generator call.
    pub gateway_timeout: Duration,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            gateway_timeout: Duration::from_secs(8),
        }
    }
}

impl TrainerConfig {
    /// Build config from environment variables, falling back to defaults.
    /// A timeout that is set but not a number is rejected rather than
    /// silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            std::env::var("TRAINER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let gateway_timeout_ms: u64 = match std::env::var("TRAINER_GATEWAY_TIMEOUT_MS") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TRAINER_GATEWAY_TIMEOUT_MS".to_string(),
                message: format!("expected milliseconds, got {raw:?}"),
            })?,
            Err(_) => 8_000, // 8 seconds
        };

        Ok(Self {
            bind_addr,
            gateway_timeout: Duration::from_millis(gateway_timeout_ms),
        })
    }
}

/// Reply generator connection settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the reply generator service.
    pub base_url: String,
    /// Bearer token for the generator API.
    pub api_key: SecretString,
    /// Generator profile requested per call (controls the simulated client voice).
    pub profile: String,
}

impl GatewayConfig {
    /// Build config from environment variables.
    /// Returns `None` if `REPLY_GATEWAY_URL` is not set (dialogue modules
    /// then run with the offline fallback).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("REPLY_GATEWAY_URL").ok()?;

        let api_key =
            SecretString::from(std::env::var("REPLY_GATEWAY_API_KEY").unwrap_or_default());

        let profile = std::env::var("REPLY_GATEWAY_PROFILE")
            .unwrap_or_else(|_| "sales-client-v1".to_string());

        Some(Self {
            base_url,
            api_key,
            profile,
        })
    }
}
