//! Upsell practice: pitch an upgrade package to a client in a drawn mood.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{ClientMood, ModuleKind, UpsellPackage};
use crate::gateway::{ReplyRequest, reply_within};
use crate::scoring::TurnContext;

use super::machine::{ScenarioDetail, SessionSnapshot, TurnReply};
use super::{SessionDeps, TurnRecord};

/// The drawn buyer mood and the package the trainee is asked to pitch.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpsellScenario {
    pub mood: ClientMood,
    pub package: UpsellPackage,
}

impl UpsellScenario {
    fn draw() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            mood: ClientMood::draw(&mut rng),
            package: UpsellPackage::draw(&mut rng),
        }
    }
}

/// A user's upsell session.
pub struct UpsellSession {
    id: Uuid,
    scenario: UpsellScenario,
    history: Vec<TurnRecord>,
    started_at: DateTime<Utc>,
    deps: SessionDeps,
}

impl UpsellSession {
    pub fn new(deps: SessionDeps) -> Self {
        let scenario = UpsellScenario::draw();
        tracing::debug!(mood = %scenario.mood, package = %scenario.package, "Upsell scenario drawn");
        Self {
            id: Uuid::new_v4(),
            scenario,
            history: Vec::new(),
            started_at: Utc::now(),
            deps,
        }
    }

    pub fn scenario(&self) -> UpsellScenario {
        self.scenario
    }

    /// Score the pitch and fetch the client's reaction to it.
    pub async fn handle(&mut self, text: &str) -> TurnReply {
        let score = self.deps.scorer.score(
            text,
            TurnContext::Upsell {
                package: self.scenario.package,
            },
        );

        let request = ReplyRequest {
            module: ModuleKind::Upsell,
            instructions: self.instructions(),
            user_text: text.to_string(),
            emotion: None,
        };

        let reply = reply_within(
            self.deps.gateway.as_ref(),
            self.deps.gateway_timeout,
            &request,
        )
        .await;

        // Degraded turn: empty reply, zero score, session stays usable.
        let (client_reply, score) = match reply {
            Some(reply) => (reply.text, score),
            None => (String::new(), 0),
        };

        self.history.push(TurnRecord {
            user_text: text.to_string(),
            reply: client_reply.clone(),
            score,
            emotion_after: None,
            at: Utc::now(),
        });

        TurnReply::Upsell {
            client_reply,
            package: self.scenario.package,
            score,
        }
    }

    /// Discard the history and draw a fresh buyer and package.
    pub fn reset(&mut self) {
        self.scenario = UpsellScenario::draw();
        self.history.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            module: ModuleKind::Upsell,
            started_at: self.started_at,
            turns: self.history.len(),
            detail: ScenarioDetail::Upsell {
                mood: self.scenario.mood,
                package: self.scenario.package,
            },
        }
    }

    fn instructions(&self) -> String {
        format!(
            "You already agreed to the base product and the seller is now offering the {} package ({}). You are {}. React to the pitch in one or two sentences.",
            self.scenario.package.label(),
            self.scenario.package.pitch(),
            self.scenario.mood.brief(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::GatewayError;
    use crate::gateway::{ClientReply, OfflineGateway, ReplyGateway};
    use crate::scoring::TurnScorer;

    struct CannedGateway(&'static str);

    #[async_trait]
    impl ReplyGateway for CannedGateway {
        async fn client_reply(&self, _req: &ReplyRequest) -> Result<ClientReply, GatewayError> {
            Ok(ClientReply {
                text: self.0.to_string(),
                emotion: None,
            })
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn make_session(gateway: Arc<dyn ReplyGateway>) -> UpsellSession {
        UpsellSession::new(SessionDeps {
            scorer: Arc::new(TurnScorer::new()),
            gateway,
            gateway_timeout: Duration::from_millis(50),
        })
    }

    #[tokio::test]
    async fn handle_reports_the_pitched_package() {
        let mut session = make_session(Arc::new(CannedGateway("Hmm, what do I get for that?")));
        let package = session.scenario().package;
        let reply = session.handle("You get twice the coverage, it pays for itself.").await;
        match reply {
            TurnReply::Upsell {
                client_reply,
                package: pitched,
                score,
            } => {
                assert_eq!(client_reply, "Hmm, what do I get for that?");
                assert_eq!(pitched, package);
                assert!(score > 0);
            }
            other => panic!("expected an upsell reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn degraded_turn_on_gateway_failure() {
        let mut session = make_session(Arc::new(OfflineGateway));
        let reply = session.handle("The premium plan includes priority support.").await;
        match reply {
            TurnReply::Upsell {
                client_reply,
                score,
                ..
            } => {
                assert!(client_reply.is_empty());
                assert_eq!(score, 0);
            }
            other => panic!("expected an upsell reply, got {other:?}"),
        }
        assert_eq!(session.snapshot().turns, 1);
    }

    #[tokio::test]
    async fn reset_clears_history_and_redraws() {
        let mut session = make_session(Arc::new(CannedGateway("Sure.")));
        session.handle("Quick question first.").await;
        assert_eq!(session.snapshot().turns, 1);

        let first = session.scenario();
        let mut saw_different = false;
        for _ in 0..20 {
            session.reset();
            assert_eq!(session.snapshot().turns, 0);
            let drawn = session.scenario();
            if drawn.mood != first.mood || drawn.package != first.package {
                saw_different = true;
            }
        }
        assert!(saw_different, "20 redraws never changed the scenario");
    }

    #[test]
    fn instructions_carry_the_drawn_scenario() {
        let session = make_session(Arc::new(OfflineGateway));
        let instructions = session.instructions();
        assert!(instructions.contains(session.scenario().package.label()));
        assert!(instructions.contains(session.scenario().mood.brief()));
    }
}
