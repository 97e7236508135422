//! Guided sales path: a staged script walked with explicit commands.
//!
//! The stage only moves on `advance`; utterances are scored against the
//! current stage and answered with a coach hint when they fall short. No
//! reply generator is involved, the coach is fully deterministic.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::catalog::{ModuleKind, SalesStage};
use crate::scoring::TurnContext;

use super::machine::{ScenarioDetail, SessionSnapshot, TurnReply};
use super::{SessionDeps, TurnRecord};

/// A user's guided-path session.
pub struct GuidedPathSession {
    id: Uuid,
    stage: SalesStage,
    history: Vec<TurnRecord>,
    started_at: DateTime<Utc>,
    deps: SessionDeps,
}

impl GuidedPathSession {
    pub fn new(deps: SessionDeps) -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: SalesStage::default(),
            history: Vec::new(),
            started_at: Utc::now(),
            deps,
        }
    }

    pub fn stage(&self) -> SalesStage {
        self.stage
    }

    /// Score the utterance against the current stage. The stage does not move.
    pub fn handle(&mut self, text: &str) -> TurnReply {
        let score = self
            .deps
            .scorer
            .score(text, TurnContext::GuidedPath { stage: self.stage });
        let coach_hint = self.deps.scorer.coach_hint(self.stage, score);

        self.history.push(TurnRecord {
            user_text: text.to_string(),
            reply: coach_hint.clone().unwrap_or_default(),
            score,
            emotion_after: None,
            at: Utc::now(),
        });

        TurnReply::GuidedPath {
            stage: self.stage,
            score,
            coach_hint,
        }
    }

    /// Move one stage forward. At the terminal stage this is a no-op that
    /// reports the stage unchanged.
    pub fn advance(&mut self) -> SalesStage {
        if let Some(next) = self.stage.next() {
            tracing::debug!(session = %self.id, from = %self.stage, to = %next, "Stage advanced");
            self.stage = next;
        }
        self.stage
    }

    /// Back to the first stage with an empty history.
    pub fn reset(&mut self) {
        self.stage = SalesStage::default();
        self.history.clear();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            module: ModuleKind::GuidedPath,
            started_at: self.started_at,
            turns: self.history.len(),
            detail: ScenarioDetail::GuidedPath { stage: self.stage },
        }
    }
}
