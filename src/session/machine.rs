//! The uniform contract every training machine answers to.
//!
//! A session is created for exactly one module and never changes kind.
//! Callers talk to [`TrainingSession`] and get back a [`TurnReply`] tagged
//! with the module that produced it, so the rendering layer can stay a
//! single match.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{
    ClientArchetype, ClientMood, Difficulty, Emotion, ModuleKind, ObjectionKind, PersonaTone,
    SalesStage, UpsellPackage,
};

use super::arena::ArenaSession;
use super::guided_path::GuidedPathSession;
use super::objections::ObjectionSession;
use super::upsell::UpsellSession;
use super::SessionDeps;

/// What a single turn produced, tagged by module.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "module", rename_all = "snake_case")]
pub enum TurnReply {
    GuidedPath {
        stage: SalesStage,
        score: u8,
        #[serde(skip_serializing_if = "Option::is_none")]
        coach_hint: Option<String>,
    },
    Objections {
        client_reply: String,
        score: u8,
    },
    Arena {
        client_reply: String,
        emotion: Emotion,
        score: u8,
    },
    Upsell {
        client_reply: String,
        package: UpsellPackage,
        score: u8,
    },
}

impl TurnReply {
    pub fn score(&self) -> u8 {
        match self {
            Self::GuidedPath { score, .. }
            | Self::Objections { score, .. }
            | Self::Arena { score, .. }
            | Self::Upsell { score, .. } => *score,
        }
    }
}

/// The module-specific part of a snapshot. Untagged: the snapshot already
/// carries the module, the detail just adds its fields.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScenarioDetail {
    GuidedPath {
        stage: SalesStage,
    },
    Objections {
        objection: ObjectionKind,
        tone: PersonaTone,
    },
    Arena {
        archetype: ClientArchetype,
        emotion: Emotion,
        difficulty: Difficulty,
        round: u32,
    },
    Upsell {
        mood: ClientMood,
        package: UpsellPackage,
    },
}

/// Point-in-time view of a session, safe to hand to the API layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub module: ModuleKind,
    pub started_at: DateTime<Utc>,
    pub turns: usize,
    pub detail: ScenarioDetail,
}

/// One user's active training session, whichever module it runs.
pub enum TrainingSession {
    GuidedPath(GuidedPathSession),
    Objections(ObjectionSession),
    Arena(ArenaSession),
    Upsell(UpsellSession),
}

impl TrainingSession {
    pub fn create(module: ModuleKind, deps: &SessionDeps) -> Self {
        match module {
            ModuleKind::GuidedPath => Self::GuidedPath(GuidedPathSession::new(deps.clone())),
            ModuleKind::Objections => Self::Objections(ObjectionSession::new(deps.clone())),
            ModuleKind::Arena => Self::Arena(ArenaSession::new(deps.clone())),
            ModuleKind::Upsell => Self::Upsell(UpsellSession::new(deps.clone())),
        }
    }

    pub fn module(&self) -> ModuleKind {
        match self {
            Self::GuidedPath(_) => ModuleKind::GuidedPath,
            Self::Objections(_) => ModuleKind::Objections,
            Self::Arena(_) => ModuleKind::Arena,
            Self::Upsell(_) => ModuleKind::Upsell,
        }
    }

    /// Run one turn of the active module.
    pub async fn handle(&mut self, text: &str) -> TurnReply {
        match self {
            Self::GuidedPath(session) => session.handle(text),
            Self::Objections(session) => session.handle(text).await,
            Self::Arena(session) => session.handle(text).await,
            Self::Upsell(session) => session.handle(text).await,
        }
    }

    /// Move forward where the module has a notion of progress. Only the
    /// guided path does; the roleplay machines report `None`.
    pub fn advance(&mut self) -> Option<SalesStage> {
        match self {
            Self::GuidedPath(session) => Some(session.advance()),
            _ => None,
        }
    }

    /// Restart the session in place, keeping the module.
    pub fn reset(&mut self) {
        match self {
            Self::GuidedPath(session) => session.reset(),
            Self::Objections(session) => session.reset(),
            Self::Arena(session) => session.reset(),
            Self::Upsell(session) => session.reset(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match self {
            Self::GuidedPath(session) => session.snapshot(),
            Self::Objections(session) => session.snapshot(),
            Self::Arena(session) => session.snapshot(),
            Self::Upsell(session) => session.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::gateway::OfflineGateway;
    use crate::scoring::TurnScorer;

    fn make_deps() -> SessionDeps {
        SessionDeps {
            scorer: Arc::new(TurnScorer::new()),
            gateway: Arc::new(OfflineGateway),
            gateway_timeout: Duration::from_millis(50),
        }
    }

    #[test]
    fn created_session_reports_its_module() {
        let deps = make_deps();
        for module in ModuleKind::ALL {
            let session = TrainingSession::create(module, &deps);
            assert_eq!(session.module(), module);
            assert_eq!(session.snapshot().module, module);
        }
    }

    #[test]
    fn advance_only_moves_the_guided_path() {
        let deps = make_deps();

        let mut guided = TrainingSession::create(ModuleKind::GuidedPath, &deps);
        assert_eq!(guided.advance(), Some(SalesStage::Qualification));

        for module in [ModuleKind::Objections, ModuleKind::Arena, ModuleKind::Upsell] {
            let mut session = TrainingSession::create(module, &deps);
            assert_eq!(session.advance(), None);
        }
    }

    #[tokio::test]
    async fn reply_is_tagged_with_the_module() {
        let deps = make_deps();
        let mut session = TrainingSession::create(ModuleKind::Objections, &deps);
        let reply = session.handle("I understand the hesitation.").await;
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["module"], "objections");
        assert!(value["client_reply"].is_string());
    }

    #[test]
    fn guided_hint_is_omitted_when_absent() {
        let reply = TurnReply::GuidedPath {
            stage: SalesStage::Greeting,
            score: 9,
            coach_hint: None,
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["module"], "guided_path");
        assert!(value.get("coach_hint").is_none());
    }

    #[test]
    fn snapshot_detail_flattens_without_a_tag() {
        let deps = make_deps();
        let session = TrainingSession::create(ModuleKind::Arena, &deps);
        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert!(value["detail"]["archetype"].is_string());
        assert_eq!(value["detail"]["round"], 0);
    }

    #[test]
    fn reset_keeps_the_module() {
        let deps = make_deps();
        let mut session = TrainingSession::create(ModuleKind::Upsell, &deps);
        session.reset();
        assert_eq!(session.module(), ModuleKind::Upsell);
        assert_eq!(session.snapshot().turns, 0);
    }
}
