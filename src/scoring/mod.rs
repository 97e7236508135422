//! Scoring engine: quiz reports and per-turn dialogue scores.
//!
//! Both halves are pure. Quiz scoring turns a submission into a pass/fail
//! report; turn scoring rates one seller utterance against the active
//! scenario. Neither touches session state or anything external, and the
//! same input always produces the same output.

pub mod quiz;
pub mod turn;

pub use quiz::{QuestionResult, QuizReport, score_quiz};
pub use turn::{ModuleRubric, Rubric, SCORE_MAX, TurnContext, TurnScorer};
