//! Client arena: roleplay against a drawn archetype with a live emotion.
//!
//! The emotion transition belongs to the reply generator: whatever affect it
//! reports back becomes the client's new state. The arena never computes an
//! emotion locally, it only seeds the first one at draw time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{ClientArchetype, Difficulty, Emotion, ModuleKind};
use crate::gateway::{ReplyRequest, reply_within};
use crate::scoring::TurnContext;

use super::machine::{ScenarioDetail, SessionSnapshot, TurnReply};
use super::{SessionDeps, TurnRecord};

/// The draw an arena session plays against. Archetype and difficulty are
/// fixed until reset; the emotion listed here is only the starting one.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArenaScenario {
    pub archetype: ClientArchetype,
    pub opening_emotion: Emotion,
    pub difficulty: Difficulty,
}

impl ArenaScenario {
    fn draw() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            archetype: ClientArchetype::draw(&mut rng),
            opening_emotion: Emotion::draw(&mut rng),
            difficulty: Difficulty::draw(&mut rng),
        }
    }
}

/// A user's arena session.
pub struct ArenaSession {
    id: Uuid,
    scenario: ArenaScenario,
    /// Current client emotion; starts at the drawn one, then follows the
    /// generator's reports.
    emotion: Emotion,
    /// Completed exchanges with the simulated client. Degraded turns do not
    /// count as an exchange.
    round: u32,
    history: Vec<TurnRecord>,
    started_at: DateTime<Utc>,
    deps: SessionDeps,
}

impl ArenaSession {
    pub fn new(deps: SessionDeps) -> Self {
        let scenario = ArenaScenario::draw();
        tracing::debug!(
            archetype = %scenario.archetype,
            emotion = %scenario.opening_emotion,
            difficulty = %scenario.difficulty,
            "Arena scenario drawn"
        );
        Self {
            id: Uuid::new_v4(),
            scenario,
            emotion: scenario.opening_emotion,
            round: 0,
            history: Vec::new(),
            started_at: Utc::now(),
            deps,
        }
    }

    pub fn scenario(&self) -> ArenaScenario {
        self.scenario
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    /// Score the utterance, fetch the client's reply and follow its emotion.
    pub async fn handle(&mut self, text: &str) -> TurnReply {
        let score = self.deps.scorer.score(
            text,
            TurnContext::Arena {
                emotion: self.emotion,
            },
        );

        let request = ReplyRequest {
            module: ModuleKind::Arena,
            instructions: self.instructions(),
            user_text: text.to_string(),
            emotion: Some(self.emotion),
        };

        let reply = reply_within(
            self.deps.gateway.as_ref(),
            self.deps.gateway_timeout,
            &request,
        )
        .await;

        let (client_reply, score) = match reply {
            Some(reply) => {
                if let Some(next) = reply.emotion {
                    if next != self.emotion {
                        tracing::debug!(session = %self.id, from = %self.emotion, to = %next, "Client emotion shifted");
                    }
                    self.emotion = next;
                }
                self.round += 1;
                (reply.text, score)
            }
            // Degraded turn: no reply, no score, emotion stays put.
            None => (String::new(), 0),
        };

        self.history.push(TurnRecord {
            user_text: text.to_string(),
            reply: client_reply.clone(),
            score,
            emotion_after: Some(self.emotion),
            at: Utc::now(),
        });

        TurnReply::Arena {
            client_reply,
            emotion: self.emotion,
            score,
        }
    }

    /// Discard the history and draw a fresh client.
    pub fn reset(&mut self) {
        self.scenario = ArenaScenario::draw();
        self.emotion = self.scenario.opening_emotion;
        self.round = 0;
        self.history.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            module: ModuleKind::Arena,
            started_at: self.started_at,
            turns: self.history.len(),
            detail: ScenarioDetail::Arena {
                archetype: self.scenario.archetype,
                emotion: self.emotion,
                difficulty: self.scenario.difficulty,
                round: self.round,
            },
        }
    }

    fn instructions(&self) -> String {
        format!(
            "Play {} ({}). Current mood: {}. Difficulty: {}. Stay in character, one or two sentences, and report your mood after each reply.",
            self.scenario.archetype.label(),
            self.scenario.archetype.brief(),
            self.emotion.label().to_lowercase(),
            self.scenario.difficulty.brief(),
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

    /// Always answers and always reports the same emotion.
    struct MoodyGateway(Emotion);

    #[async_trait]
    impl ReplyGateway for MoodyGateway {
        async fn client_reply(&self, _req: &ReplyRequest) -> Result<ClientReply, GatewayError> {
            Ok(ClientReply {
                text: "Fine, go on.".into(),
                emotion: Some(self.0),
            })
        }

        fn name(&self) -> &str {
            "moody"
        }
    }

    fn make_session(gateway: Arc<dyn ReplyGateway>) -> ArenaSession {
        ArenaSession::new(SessionDeps {
            scorer: Arc::new(TurnScorer::new()),
            gateway,
            gateway_timeout: Duration::from_millis(50),
        })
    }

    #[tokio::test]
    async fn emotion_follows_the_generator() {
        let mut session = make_session(Arc::new(MoodyGateway(Emotion::Excited)));
        let reply = session.handle("Thank you for your patience!").await;
        assert_eq!(session.emotion(), Emotion::Excited);
        match reply {
            TurnReply::Arena { emotion, .. } => assert_eq!(emotion, Emotion::Excited),
            other => panic!("expected an arena reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn degraded_turn_keeps_the_emotion() {
        let mut session = make_session(Arc::new(OfflineGateway));
        let before = session.emotion();
        let reply = session.handle("I understand, let me explain.").await;
        match reply {
            TurnReply::Arena {
                client_reply,
                emotion,
                score,
            } => {
                assert!(client_reply.is_empty());
                assert_eq!(score, 0);
                assert_eq!(emotion, before);
            }
            other => panic!("expected an arena reply, got {other:?}"),
        }
        // Still recorded as a turn, but not as a completed round.
        let snapshot = session.snapshot();
        assert_eq!(snapshot.turns, 1);
        match snapshot.detail {
            ScenarioDetail::Arena { round, .. } => assert_eq!(round, 0),
            other => panic!("expected arena detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rounds_count_completed_exchanges() {
        let mut session = make_session(Arc::new(MoodyGateway(Emotion::Neutral)));
        session.handle("First pass.").await;
        session.handle("Second pass.").await;
        match session.snapshot().detail {
            ScenarioDetail::Arena { round, .. } => assert_eq!(round, 2),
            other => panic!("expected arena detail, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reset_redraws_and_restarts() {
        let mut session = make_session(Arc::new(MoodyGateway(Emotion::Angry)));
        session.handle("Hello there.").await;
        assert_eq!(session.emotion(), Emotion::Angry);

        let first = session.scenario();
        let mut saw_different = false;
        for _ in 0..20 {
            session.reset();
            assert_eq!(session.snapshot().turns, 0);
            assert_eq!(session.emotion(), session.scenario().opening_emotion);
            let drawn = session.scenario();
            if drawn.archetype != first.archetype
                || drawn.opening_emotion != first.opening_emotion
                || drawn.difficulty != first.difficulty
            {
                saw_different = true;
            }
        }
        assert!(saw_different, "20 redraws never changed the scenario");
    }

    #[test]
    fn instructions_carry_the_drawn_client() {
        let session = make_session(Arc::new(OfflineGateway));
        let instructions = session.instructions();
        assert!(instructions.contains(session.scenario().archetype.label()));
        assert!(instructions.contains(session.scenario().difficulty.brief()));
    }
}
