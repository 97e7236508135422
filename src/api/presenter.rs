//! Outward shaping: display strings for engine results and answer-free
//! quiz views.
//!
//! Rendering is deterministic per module so clients can rely on the text.
//! Quiz views exist because the bank types carry the answer key; only the
//! submit report may reveal it.

use serde::Serialize;

use crate::catalog::Quiz;
use crate::scoring::QuizReport;
use crate::session::{AdvanceOutcome, RouteOutcome, ScenarioDetail, SessionSnapshot, TurnReply};

/// Shown whenever a user talks to the trainer without an active module.
pub const NO_SESSION_HELP: &str = "No training module is active. Pick one to begin: \
guided_path (walk the sales script stage by stage), \
objections (answer a drawn client objection), \
arena (free roleplay against a random client), \
upsell (offer an upgrade to a client who already bought).";

// ── Quiz views ──────────────────────────────────────────────────────────

/// Listing row for a quiz, without its questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub question_count: usize,
    pub passing_score: u8,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            question_count: quiz.questions.len(),
            passing_score: quiz.passing_score,
        }
    }
}

/// A question as shown to the trainee: prompt and options only.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

/// A full quiz as served for taking it.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub passing_score: u8,
    pub questions: Vec<QuestionView>,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            passing_score: quiz.passing_score,
            questions: quiz
                .questions
                .iter()
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

// ── Display strings ─────────────────────────────────────────────────────

pub fn render_turn(reply: &TurnReply) -> String {
    match reply {
        TurnReply::GuidedPath {
            stage,
            score,
            coach_hint,
        } => match coach_hint {
            Some(hint) => format!("Stage {}: scored {}/10. Hint: {}", stage.label(), score, hint),
            None => format!("Stage {}: scored {}/10.", stage.label(), score),
        },
        TurnReply::Objections {
            client_reply,
            score,
        } => {
            if client_reply.is_empty() {
                format!("The client did not reply. Scored {score}/10.")
            } else {
                format!("Client: {client_reply}\nScored {score}/10.")
            }
        }
        TurnReply::Arena {
            client_reply,
            emotion,
            score,
        } => {
            if client_reply.is_empty() {
                format!("The client did not reply. Scored {score}/10.")
            } else {
                format!("Client ({}): {}\nScored {}/10.", emotion.label(), client_reply, score)
            }
        }
        TurnReply::Upsell {
            client_reply,
            package,
            score,
        } => {
            if client_reply.is_empty() {
                format!("The client did not reply. Scored {score}/10.")
            } else {
                format!(
                    "Client: {}\nScored {}/10 on the {} pitch.",
                    client_reply,
                    score,
                    package.label()
                )
            }
        }
    }
}

pub fn render_route(outcome: &RouteOutcome) -> String {
    match outcome {
        RouteOutcome::NoActiveSession => NO_SESSION_HELP.to_string(),
        RouteOutcome::Turn(reply) => render_turn(reply),
    }
}

pub fn render_advance(outcome: &AdvanceOutcome) -> String {
    match outcome {
        AdvanceOutcome::NoActiveSession => NO_SESSION_HELP.to_string(),
        AdvanceOutcome::NothingToAdvance => {
            "This module has no stages. Just keep talking to the client.".to_string()
        }
        AdvanceOutcome::Stage { stage } if stage.is_terminal() => {
            "The script is complete. Reset the session to run it again.".to_string()
        }
        AdvanceOutcome::Stage { stage } => {
            format!("Moved to {}: {}", stage.label(), stage.brief())
        }
    }
}

pub fn render_session(snapshot: &SessionSnapshot) -> String {
    match &snapshot.detail {
        ScenarioDetail::GuidedPath { stage } => format!(
            "Guided Sales Path. Stage: {} ({}). Turns so far: {}.",
            stage.label(),
            stage.brief(),
            snapshot.turns
        ),
        ScenarioDetail::Objections { objection, tone } => format!(
            "Objection Handling. Objection: {}. Client tone: {}. Turns so far: {}.",
            objection.label(),
            tone.label(),
            snapshot.turns
        ),
        ScenarioDetail::Arena {
            archetype,
            emotion,
            difficulty,
            round,
        } => format!(
            "Client Arena. {} client, {} mood, {} difficulty. Rounds played: {}.",
            archetype.label(),
            emotion.label(),
            difficulty.label(),
            round
        ),
        ScenarioDetail::Upsell { mood, package } => format!(
            "Upsell Practice. Client is {}. Pitch the {} package. Turns so far: {}.",
            mood.label().to_lowercase(),
            package.label(),
            snapshot.turns
        ),
    }
}

pub fn render_report(report: &QuizReport) -> String {
    format!(
        "{} of {} correct. Score {} of 100: {}.",
        report.correct_count,
        report.total,
        report.score,
        if report.passed { "passed" } else { "not passed" }
    )
}
