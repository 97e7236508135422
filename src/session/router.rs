//! Per-user dispatch. A user has at most one active module; free text goes
//! to whichever session is active, and activating another module quietly
//! replaces the old one.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{ModuleKind, SalesStage};

use super::SessionDeps;
use super::machine::{SessionSnapshot, TrainingSession, TurnReply};
use super::store::SessionStore;

/// What routing a free-text turn produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Nothing active for this user; the caller shows the module list.
    NoActiveSession,
    Turn(TurnReply),
}

/// What an advance request produced.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    NoActiveSession,
    /// The active module has no stages to move through.
    NothingToAdvance,
    Stage { stage: SalesStage },
}

pub struct SessionRouter {
    store: Arc<SessionStore>,
    deps: SessionDeps,
}

impl SessionRouter {
    pub fn new(store: Arc<SessionStore>, deps: SessionDeps) -> Arc<Self> {
        Arc::new(Self { store, deps })
    }

    /// Activate `module` for the user, replacing whatever was active, and
    /// report the fresh session's state.
    pub async fn set_active(&self, user_id: &str, module: ModuleKind) -> SessionSnapshot {
        let session = TrainingSession::create(module, &self.deps);
        let snapshot = session.snapshot();
        let replaced = self.store.insert(user_id, session).await.is_some();
        if replaced {
            tracing::info!(user = %user_id, module = %module, "Replaced the user's previous session");
        } else {
            tracing::info!(user = %user_id, module = %module, "Started session");
        }
        snapshot
    }

    /// Deactivate the user's session. Calling with nothing active is fine.
    pub async fn clear_active(&self, user_id: &str) -> bool {
        let removed = self.store.remove(user_id).await;
        if removed {
            tracing::info!(user = %user_id, "Stopped session");
        }
        removed
    }

    pub async fn get_active(&self, user_id: &str) -> Option<ModuleKind> {
        match self.store.get(user_id).await {
            Some(session) => Some(session.lock().await.module()),
            None => None,
        }
    }

    /// Send a free-text turn to the user's active session.
    pub async fn route(&self, user_id: &str, text: &str) -> RouteOutcome {
        let Some(session) = self.store.get(user_id).await else {
            tracing::debug!(user = %user_id, "Turn with no active session");
            return RouteOutcome::NoActiveSession;
        };
        let mut session = session.lock().await;
        RouteOutcome::Turn(session.handle(text).await)
    }

    pub async fn advance_active(&self, user_id: &str) -> AdvanceOutcome {
        let Some(session) = self.store.get(user_id).await else {
            return AdvanceOutcome::NoActiveSession;
        };
        let mut session = session.lock().await;
        match session.advance() {
            Some(stage) => AdvanceOutcome::Stage { stage },
            None => AdvanceOutcome::NothingToAdvance,
        }
    }

    /// Restart the user's session in place, keeping the module.
    pub async fn reset_active(&self, user_id: &str) -> Option<SessionSnapshot> {
        let session = self.store.get(user_id).await?;
        let mut session = session.lock().await;
        session.reset();
        tracing::info!(user = %user_id, module = %session.module(), "Reset session");
        Some(session.snapshot())
    }

    pub async fn snapshot(&self, user_id: &str) -> Option<SessionSnapshot> {
        let session = self.store.get(user_id).await?;
        let session = session.lock().await;
        Some(session.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::GatewayError;
    use crate::gateway::{ClientReply, OfflineGateway, ReplyGateway, ReplyRequest};
    use crate::scoring::TurnScorer;

    struct CannedGateway;

    #[async_trait]
    impl ReplyGateway for CannedGateway {
        async fn client_reply(&self, _req: &ReplyRequest) -> Result<ClientReply, GatewayError> {
            Ok(ClientReply {
                text: "Go on.".into(),
                emotion: None,
            })
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn make_router(gateway: Arc<dyn ReplyGateway>) -> Arc<SessionRouter> {
        SessionRouter::new(
            SessionStore::new(),
            SessionDeps {
                scorer: Arc::new(TurnScorer::new()),
                gateway,
                gateway_timeout: Duration::from_millis(50),
            },
        )
    }

    #[tokio::test]
    async fn free_text_without_a_session_asks_for_a_module() {
        let router = make_router(Arc::new(CannedGateway));
        let outcome = router.route("ada", "hello?").await;
        assert!(matches!(outcome, RouteOutcome::NoActiveSession));

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "no_active_session");
    }

    #[tokio::test]
    async fn route_dispatches_to_the_active_module() {
        let router = make_router(Arc::new(CannedGateway));
        router.set_active("ada", ModuleKind::Objections).await;

        match router.route("ada", "I hear you, fair point.").await {
            RouteOutcome::Turn(TurnReply::Objections { client_reply, .. }) => {
                assert_eq!(client_reply, "Go on.");
            }
            other => panic!("expected an objections turn, got {other:?}"),
        }

        let snapshot = router.snapshot("ada").await.expect("session is active");
        assert_eq!(snapshot.turns, 1);
    }

    #[tokio::test]
    async fn activating_a_second_module_replaces_the_first() {
        let router = make_router(Arc::new(CannedGateway));
        router.set_active("ada", ModuleKind::Arena).await;
        router.route("ada", "First module turn.").await;

        let snapshot = router.set_active("ada", ModuleKind::Upsell).await;
        assert_eq!(snapshot.module, ModuleKind::Upsell);
        assert_eq!(snapshot.turns, 0);
        assert_eq!(router.get_active("ada").await, Some(ModuleKind::Upsell));
    }

    #[tokio::test]
    async fn clear_active_is_idempotent() {
        let router = make_router(Arc::new(CannedGateway));
        assert!(!router.clear_active("ada").await);

        router.set_active("ada", ModuleKind::GuidedPath).await;
        assert!(router.clear_active("ada").await);
        assert!(!router.clear_active("ada").await);
        assert_eq!(router.get_active("ada").await, None);
    }

    #[tokio::test]
    async fn advance_reports_per_module() {
        let router = make_router(Arc::new(CannedGateway));
        assert!(matches!(
            router.advance_active("ada").await,
            AdvanceOutcome::NoActiveSession
        ));

        router.set_active("ada", ModuleKind::GuidedPath).await;
        match router.advance_active("ada").await {
            AdvanceOutcome::Stage { stage } => assert_eq!(stage, SalesStage::Qualification),
            other => panic!("expected a stage, got {other:?}"),
        }

        router.set_active("ada", ModuleKind::Arena).await;
        assert!(matches!(
            router.advance_active("ada").await,
            AdvanceOutcome::NothingToAdvance
        ));
    }

    #[tokio::test]
    async fn reset_keeps_the_module_and_empties_history() {
        let router = make_router(Arc::new(CannedGateway));
        assert!(router.reset_active("ada").await.is_none());

        router.set_active("ada", ModuleKind::Upsell).await;
        router.route("ada", "A first pitch.").await;

        let snapshot = router.reset_active("ada").await.expect("session is active");
        assert_eq!(snapshot.module, ModuleKind::Upsell);
        assert_eq!(snapshot.turns, 0);
    }

    #[tokio::test]
    async fn concurrent_turns_from_one_user_both_land() {
        let router = make_router(Arc::new(OfflineGateway));
        router.set_active("ada", ModuleKind::Objections).await;

        let (a, b) = tokio::join!(
            router.route("ada", "First try."),
            router.route("ada", "Second try."),
        );
        assert!(matches!(a, RouteOutcome::Turn(_)));
        assert!(matches!(b, RouteOutcome::Turn(_)));

        let snapshot = router.snapshot("ada").await.expect("session is active");
        assert_eq!(snapshot.turns, 2);
    }

    #[tokio::test]
    async fn turn_outcome_serializes_with_both_tags() {
        let router = make_router(Arc::new(CannedGateway));
        router.set_active("ada", ModuleKind::Objections).await;

        let outcome = router.route("ada", "I understand.").await;
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["outcome"], "turn");
        assert_eq!(value["module"], "objections");
    }
}
