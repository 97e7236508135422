//! Training sessions.
//!
//! One state machine per training module, a tagged wrapper giving them a
//! uniform capability set, an in-memory store keyed by user id and the
//! router that dispatches free-form text to whichever module a user has
//! active. Sessions live only in memory; stopping the process forgets them.

pub mod arena;
pub mod guided_path;
pub mod machine;
pub mod objections;
pub mod router;
pub mod store;
pub mod upsell;

pub use arena::ArenaSession;
pub use guided_path::GuidedPathSession;
pub use machine::{ScenarioDetail, SessionSnapshot, TrainingSession, TurnReply};
pub use objections::ObjectionSession;
pub use router::{AdvanceOutcome, RouteOutcome, SessionRouter};
pub use store::SessionStore;
pub use upsell::UpsellSession;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Emotion;
use crate::gateway::ReplyGateway;
use crate::scoring::TurnScorer;

/// Shared collaborators handed to every new session.
#[derive(Clone)]
pub struct SessionDeps {
    pub scorer: Arc<TurnScorer>,
    pub gateway: Arc<dyn ReplyGateway>,
    /// Bounded wait for one reply generator call.
    pub gateway_timeout: Duration,
}

/// One completed turn, as kept in a session's history.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    pub user_text: String,
    /// The client's reply, or the coach hint on the guided path. Empty on a
    /// degraded turn.
    pub reply: String,
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_after: Option<Emotion>,
    pub at: DateTime<Utc>,
}
