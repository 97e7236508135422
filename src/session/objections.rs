//! Objection handling: free-form sparring against one drawn objection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{ModuleKind, ObjectionKind, PersonaTone};
use crate::gateway::{ReplyRequest, reply_within};
use crate::scoring::TurnContext;

use super::machine::{ScenarioDetail, SessionSnapshot, TurnReply};
use super::{SessionDeps, TurnRecord};

/// The draw an objection session plays against. Fixed until reset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ObjectionScenario {
    pub kind: ObjectionKind,
    pub tone: PersonaTone,
}

impl ObjectionScenario {
    fn draw() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            kind: ObjectionKind::draw(&mut rng),
            tone: PersonaTone::draw(&mut rng),
        }
    }
}

/// A user's objection-handling session.
pub struct ObjectionSession {
    id: Uuid,
    scenario: ObjectionScenario,
    history: Vec<TurnRecord>,
    started_at: DateTime<Utc>,
    deps: SessionDeps,
}

impl ObjectionSession {
    pub fn new(deps: SessionDeps) -> Self {
        let scenario = ObjectionScenario::draw();
        tracing::debug!(kind = %scenario.kind, tone = %scenario.tone, "Objection drawn");
        Self {
            id: Uuid::new_v4(),
            scenario,
            history: Vec::new(),
            started_at: Utc::now(),
            deps,
        }
    }

    pub fn scenario(&self) -> ObjectionScenario {
        self.scenario
    }

    /// Score the rebuttal and fetch the client's comeback.
    pub async fn handle(&mut self, text: &str) -> TurnReply {
        let score = self.deps.scorer.score(
            text,
            TurnContext::Objections {
                kind: self.scenario.kind,
            },
        );

        let request = ReplyRequest {
            module: ModuleKind::Objections,
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

        let (client_reply, score) = match reply {
            Some(reply) => (reply.text, score),
            // Degraded turn: the generator is unavailable, the client stays
            // silent and the turn earns nothing.
            None => (String::new(), 0),
        };

        self.history.push(TurnRecord {
            user_text: text.to_string(),
            reply: client_reply.clone(),
            score,
            emotion_after: None,
            at: Utc::now(),
        });

        TurnReply::Objections {
            client_reply,
            score,
        }
    }

    /// Discard the history and draw a new objection.
    pub fn reset(&mut self) {
        self.scenario = ObjectionScenario::draw();
        self.history.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            module: ModuleKind::Objections,
            started_at: self.started_at,
            turns: self.history.len(),
            detail: ScenarioDetail::Objections {
                objection: self.scenario.kind,
                tone: self.scenario.tone,
            },
        }
    }

    fn instructions(&self) -> String {
        format!(
            "Play a {} client objecting: \"{}\" Voice: {}. Hold the objection until the seller genuinely answers it, then soften. One or two sentences per reply.",
            self.scenario.tone.label().to_lowercase(),
            self.scenario.kind.opening_line(),
            self.scenario.tone.brief(),
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

    struct CannedGateway;

    #[async_trait]
    impl ReplyGateway for CannedGateway {
        async fn client_reply(&self, _req: &ReplyRequest) -> Result<ClientReply, GatewayError> {
            Ok(ClientReply {
                text: "Hmm. And what if it breaks in a month?".into(),
                emotion: None,
            })
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn make_session(gateway: Arc<dyn ReplyGateway>) -> ObjectionSession {
        ObjectionSession::new(SessionDeps {
            scorer: Arc::new(TurnScorer::new()),
            gateway,
            gateway_timeout: Duration::from_millis(50),
        })
    }

    #[tokio::test]
    async fn handle_returns_client_reply_and_score() {
        let mut session = make_session(Arc::new(CannedGateway));
        let reply = session
            .handle("I hear you, fair point. The trial costs nothing, shall we set it up?")
            .await;
        match reply {
            TurnReply::Objections {
                client_reply,
                score,
            } => {
                assert!(client_reply.contains("breaks"));
                assert!(score > 0);
            }
            other => panic!("expected an objection reply, got {other:?}"),
        }
        assert_eq!(session.snapshot().turns, 1);
    }

    #[tokio::test]
    async fn degraded_turn_on_gateway_failure() {
        let mut session = make_session(Arc::new(OfflineGateway));
        let reply = session
            .handle("I hear you, fair point. The trial costs nothing, shall we set it up?")
            .await;
        match reply {
            TurnReply::Objections {
                client_reply,
                score,
            } => {
                assert!(client_reply.is_empty());
                assert_eq!(score, 0);
            }
            other => panic!("expected an objection reply, got {other:?}"),
        }
        // The degraded turn still lands in the history.
        assert_eq!(session.snapshot().turns, 1);
    }

    #[tokio::test]
    async fn reset_clears_history_and_redraws() {
        let mut session = make_session(Arc::new(CannedGateway));
        session.handle("Let me address that.").await;
        assert_eq!(session.snapshot().turns, 1);

        // Across enough redraws the scenario cannot stay constant.
        let first = session.scenario();
        let mut saw_different = false;
        for _ in 0..20 {
            session.reset();
            assert_eq!(session.snapshot().turns, 0);
            let drawn = session.scenario();
            if drawn.kind != first.kind || drawn.tone != first.tone {
                saw_different = true;
            }
        }
        assert!(saw_different, "20 redraws never changed the scenario");
    }

    #[test]
    fn instructions_carry_the_drawn_scenario() {
        let session = make_session(Arc::new(CannedGateway));
        let instructions = session.instructions();
        assert!(instructions.contains(session.scenario().kind.opening_line()));
        assert!(instructions.contains(&session.scenario().tone.label().to_lowercase()));
    }
}
