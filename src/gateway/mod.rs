//! Reply generator gateway.
//!
//! The simulated client's words come from an external reply generator that
//! this crate reaches through a single request/response contract. The
//! generator itself is a collaborator, not part of the trainer: this module
//! holds the seam (the `ReplyGateway` trait), an HTTP-backed implementation
//! and the bounded-call helper the training machines share.

pub mod http;

pub use http::HttpReplyGateway;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{Emotion, ModuleKind};
use crate::error::GatewayError;

/// One request to the reply generator.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    /// Training module the session belongs to.
    pub module: ModuleKind,
    /// Scenario framing built by the session (archetype, tone, package).
    pub instructions: String,
    /// The seller's latest utterance.
    pub user_text: String,
    /// Current client emotion, where the module tracks one.
    pub emotion: Option<Emotion>,
}

/// The generator's answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientReply {
    /// What the simulated client says back.
    pub text: String,
    /// Updated client emotion, when the generator reports one.
    #[serde(default)]
    pub emotion: Option<Emotion>,
}

/// Seam to the external reply generator.
#[async_trait]
pub trait ReplyGateway: Send + Sync {
    /// Generate the simulated client's reply for one turn.
    async fn client_reply(&self, request: &ReplyRequest) -> Result<ClientReply, GatewayError>;

    /// Short name for logs.
    fn name(&self) -> &str;
}

/// Gateway used when no generator is configured. Dialogue modules degrade to
/// their offline fallback on every turn.
#[derive(Debug, Default)]
pub struct OfflineGateway;

#[async_trait]
impl ReplyGateway for OfflineGateway {
    async fn client_reply(&self, _request: &ReplyRequest) -> Result<ClientReply, GatewayError> {
        Err(GatewayError::NotConfigured)
    }

    fn name(&self) -> &str {
        "offline"
    }
}

/// Call the generator with a bounded timeout.
///
/// Returns `None` on any failure, error or elapsed timeout alike, after
/// logging it. Callers turn `None` into their degraded branch; a gateway
/// problem never propagates past the session.
pub async fn reply_within(
    gateway: &dyn ReplyGateway,
    timeout: Duration,
    request: &ReplyRequest,
) -> Option<ClientReply> {
    match tokio::time::timeout(timeout, gateway.client_reply(request)).await {
        Ok(Ok(reply)) => Some(reply),
        Ok(Err(e)) => {
            tracing::warn!(gateway = %gateway.name(), error = %e, "Reply generator failed");
            None
        }
        Err(_) => {
            tracing::warn!(
                gateway = %gateway.name(),
                timeout_ms = timeout.as_millis() as u64,
                "Reply generator timed out"
            );
            None
        }
    }
}
