//! Scenario catalog: the static definitions behind every training module.
//!
//! Client archetypes, emotions, objection kinds, personas, packages, quiz
//! banks and the lesson library all live here. The catalog is built once at
//! startup and shared read-only; nothing in it changes at runtime, and every
//! lookup returns an explicit `Option` for callers to handle.

pub mod data;
pub mod lessons;
pub mod quizzes;

pub use data::{
    ClientArchetype, ClientMood, Difficulty, Emotion, ModuleKind, ObjectionKind, PersonaTone,
    SalesStage, UpsellPackage,
};
pub use lessons::{Lesson, lesson_library};
pub use quizzes::{DEFAULT_PASSING_SCORE, Quiz, QuizQuestion, quiz_bank};

use serde::Serialize;

/// One drawable (or scripted) dimension entry of a module, as shown in
/// catalog listings.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeInfo {
    pub id: String,
    pub label: String,
    pub brief: String,
}

/// Read-only source of truth for scenarios, quizzes and lessons.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    quizzes: Vec<Quiz>,
    lessons: Vec<Lesson>,
}

impl ScenarioCatalog {
    /// Build the catalog from the built-in banks.
    pub fn new() -> Self {
        Self {
            quizzes: quiz_bank(),
            lessons: lesson_library(),
        }
    }

    /// All quizzes, in bank order.
    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    /// Look up a quiz by id.
    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// All lessons, in library order.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Look up a lesson by id.
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// Lessons tagged as preparation for a module.
    pub fn recommended_lessons(&self, module: ModuleKind) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.modules.contains(&module))
            .collect()
    }

    /// The drawable dimension of a module, for catalog listings. The guided
    /// path has no draw, so it lists its stages instead.
    pub fn archetypes(&self, module: ModuleKind) -> Vec<ArchetypeInfo> {
        match module {
            ModuleKind::GuidedPath => SalesStage::ALL
                .iter()
                .map(|s| ArchetypeInfo {
                    id: s.to_string(),
                    label: s.label().to_string(),
                    brief: s.brief().to_string(),
                })
                .collect(),
            ModuleKind::Objections => ObjectionKind::ALL
                .iter()
                .map(|k| ArchetypeInfo {
                    id: k.to_string(),
                    label: k.label().to_string(),
                    brief: k.opening_line().to_string(),
                })
                .collect(),
            ModuleKind::Arena => ClientArchetype::ALL
                .iter()
                .map(|a| ArchetypeInfo {
                    id: a.to_string(),
                    label: a.label().to_string(),
                    brief: a.brief().to_string(),
                })
                .collect(),
            ModuleKind::Upsell => UpsellPackage::ALL
                .iter()
                .map(|p| ArchetypeInfo {
                    id: p.to_string(),
                    label: p.label().to_string(),
                    brief: p.pitch().to_string(),
                })
                .collect(),
        }
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::new()
    }
}
