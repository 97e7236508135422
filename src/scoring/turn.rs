//! Per-turn dialogue scoring.
//!
//! Every turn lands on a 0-10 scale built from four signals:
//! - module relevance: up to three distinct marker-phrase hits, two points
//!   each (the marker lists below are the per-module heuristics);
//! - engagement: two points when the seller asks the client a question;
//! - workable length: one point for an utterance of 4 to 120 words;
//! - courtesy: one point when a courtesy marker is present.
//!
//! Two module-specific twists sit on top. In the arena, while the client is
//! annoyed or angry a turn with no de-escalation marker is capped at 4
//! points. In the upsell module, naming the drawn package counts as two
//! marker hits.
//!
//! Scoring is deterministic: the same module, scenario and utterance always
//! produce the same score.

use regex::Regex;
use serde::Serialize;

use crate::catalog::{Emotion, ModuleKind, ObjectionKind, SalesStage, UpsellPackage};

/// Upper bound of the per-turn scale.
pub const SCORE_MAX: u8 = 10;

/// Turns scoring below this get a coach hint attached.
const HINT_THRESHOLD: u8 = 7;

const COURTESY: &[&str] = &["please", "thank you", "thanks", "appreciate"];

const GREETING_MARKERS: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "my name is",
    "calling from",
];

const QUALIFICATION_MARKERS: &[&str] =
    &["what", "how", "which", "tell me", "how often", "what matters"];

const SUPPORT_MARKERS: &[&str] = &[
    "i understand",
    "i hear you",
    "that makes sense",
    "sounds like",
    "i can see",
];

const OFFER_MARKERS: &[&str] = &[
    "based on",
    "you mentioned",
    "that means",
    "for your",
    "covers",
];

const DEMO_MARKERS: &[&str] = &[
    "let me show",
    "for example",
    "here's how",
    "imagine",
    "in practice",
];

const FINAL_CLOSE_MARKERS: &[&str] =
    &["shall we", "ready to", "confirm", "book", "get started", "sign"];

const DONE_MARKERS: &[&str] = &["thank you for your time", "great talking", "have a good day"];

const ACKNOWLEDGE_MARKERS: &[&str] = &[
    "i understand",
    "i hear you",
    "fair point",
    "i see why",
    "common concern",
    "thanks for being direct",
];

const VALUE_MARKERS: &[&str] = &[
    "value",
    "saves",
    "pays for itself",
    "included",
    "worth",
    "per day",
];

const PROOF_MARKERS: &[&str] = &[
    "guarantee",
    "contract",
    "money back",
    "reviews",
    "trial",
    "references",
];

const COMMITMENT_MARKERS: &[&str] = &[
    "two minutes",
    "no obligation",
    "one question",
    "before you decide",
    "right now",
];

const EMPATHY_MARKERS: &[&str] = &[
    "i understand",
    "i hear you",
    "i can imagine",
    "that makes sense",
    "i'm sorry",
    "thank you for",
];

const DEESCALATION_MARKERS: &[&str] = &[
    "sorry",
    "apologies",
    "apologize",
    "my fault",
    "you're right",
    "let's fix",
];

const UPSELL_VALUE_MARKERS: &[&str] = &[
    "you get",
    "includes",
    "per day",
    "difference",
    "worth",
    "in return",
    "covers",
    "adds",
];

/// The slice of session state the scorer looks at.
#[derive(Debug, Clone, Copy)]
pub enum TurnContext {
    GuidedPath { stage: SalesStage },
    Objections { kind: ObjectionKind },
    Arena { emotion: Emotion },
    Upsell { package: UpsellPackage },
}

impl TurnContext {
    pub fn module(&self) -> ModuleKind {
        match self {
            Self::GuidedPath { .. } => ModuleKind::GuidedPath,
            Self::Objections { .. } => ModuleKind::Objections,
            Self::Arena { .. } => ModuleKind::Arena,
            Self::Upsell { .. } => ModuleKind::Upsell,
        }
    }
}

/// A named list of marker phrases with compiled word-boundary patterns.
#[derive(Debug)]
struct MarkerSet {
    phrases: &'static [&'static str],
    patterns: Vec<Regex>,
}

impl MarkerSet {
    fn compile(phrases: &'static [&'static str]) -> Self {
        let patterns = phrases
            .iter()
            .map(|p| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p))).unwrap())
            .collect();
        Self { phrases, patterns }
    }

    /// Number of distinct phrases present in the text.
    fn hits(&self, text: &str) -> usize {
        self.patterns.iter().filter(|r| r.is_match(text)).count()
    }
}

/// Structured description of the scoring criteria, served by the catalog API.
#[derive(Debug, Clone, Serialize)]
pub struct Rubric {
    pub scale_max: u8,
    pub common: Vec<String>,
    pub modules: Vec<ModuleRubric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleRubric {
    pub module: ModuleKind,
    pub criteria: Vec<String>,
}

/// Deterministic per-turn scorer. Compile once, share behind an `Arc`.
#[derive(Debug)]
pub struct TurnScorer {
    courtesy: MarkerSet,
    acknowledge: MarkerSet,
    value: MarkerSet,
    proof: MarkerSet,
    commitment: MarkerSet,
    empathy: MarkerSet,
    deescalation: MarkerSet,
    upsell_value: MarkerSet,
    stages: Vec<(SalesStage, MarkerSet)>,
    packages: Vec<(UpsellPackage, Regex)>,
}

impl TurnScorer {
    pub fn new() -> Self {
        let stages = vec![
            (SalesStage::Greeting, MarkerSet::compile(GREETING_MARKERS)),
            (
                SalesStage::Qualification,
                MarkerSet::compile(QUALIFICATION_MARKERS),
            ),
            (SalesStage::Support, MarkerSet::compile(SUPPORT_MARKERS)),
            (SalesStage::Offer, MarkerSet::compile(OFFER_MARKERS)),
            (SalesStage::Demo, MarkerSet::compile(DEMO_MARKERS)),
            (
                SalesStage::FinalClose,
                MarkerSet::compile(FINAL_CLOSE_MARKERS),
            ),
            (SalesStage::Done, MarkerSet::compile(DONE_MARKERS)),
        ];

        let packages = UpsellPackage::ALL
            .iter()
            .map(|p| {
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", p)).unwrap();
                (*p, pattern)
            })
            .collect();

        Self {
            courtesy: MarkerSet::compile(COURTESY),
            acknowledge: MarkerSet::compile(ACKNOWLEDGE_MARKERS),
            value: MarkerSet::compile(VALUE_MARKERS),
            proof: MarkerSet::compile(PROOF_MARKERS),
            commitment: MarkerSet::compile(COMMITMENT_MARKERS),
            empathy: MarkerSet::compile(EMPATHY_MARKERS),
            deescalation: MarkerSet::compile(DEESCALATION_MARKERS),
            upsell_value: MarkerSet::compile(UPSELL_VALUE_MARKERS),
            stages,
            packages,
        }
    }

    /// Score one seller utterance against the session's scenario.
    pub fn score(&self, text: &str, context: TurnContext) -> u8 {
        let marker_hits = match context {
            TurnContext::GuidedPath { stage } => self.stage_markers(stage).hits(text),
            TurnContext::Objections { kind } => {
                self.acknowledge.hits(text) + self.objection_focus(kind).hits(text)
            }
            TurnContext::Arena { .. } => self.empathy.hits(text),
            TurnContext::Upsell { package } => {
                let named = self
                    .packages
                    .iter()
                    .any(|(p, r)| *p == package && r.is_match(text));
                self.upsell_value.hits(text) + if named { 2 } else { 0 }
            }
        };

        let words = text.split_whitespace().count();
        let mut score = (marker_hits.min(3) as u8) * 2;
        if text.contains('?') {
            score += 2;
        }
        if (4..=120).contains(&words) {
            score += 1;
        }
        if self.courtesy.hits(text) > 0 {
            score += 1;
        }

        // A heated client has to be cooled down before anything else counts.
        if let TurnContext::Arena { emotion } = context {
            if emotion.is_heated() && self.deescalation.hits(text) == 0 {
                score = score.min(4);
            }
        }

        score.min(SCORE_MAX)
    }

    /// Coach hint for a guided-path turn, attached when the score is weak.
    pub fn coach_hint(&self, stage: SalesStage, score: u8) -> Option<String> {
        if score >= HINT_THRESHOLD {
            return None;
        }
        Some(stage_tip(stage).to_string())
    }

    /// Structured view of the criteria, for the catalog rubric endpoint.
    pub fn rubric(&self) -> Rubric {
        let common = vec![
            "up to 6 points: distinct module marker phrases, 2 points each".to_string(),
            "2 points: the turn asks the client a question".to_string(),
            "1 point: utterance length between 4 and 120 words".to_string(),
            format!("1 point: courtesy marker ({})", COURTESY.join(", ")),
        ];
        let modules = vec![
            ModuleRubric {
                module: ModuleKind::GuidedPath,
                criteria: vec![
                    "markers follow the current stage of the script".to_string(),
                    format!(
                        "e.g. qualification stage: {}",
                        QUALIFICATION_MARKERS.join(", ")
                    ),
                ],
            },
            ModuleRubric {
                module: ModuleKind::Objections,
                criteria: vec![
                    format!("acknowledgment: {}", self.acknowledge.phrases.join(", ")),
                    "focus markers follow the drawn objection (value, proof or commitment)"
                        .to_string(),
                ],
            },
            ModuleRubric {
                module: ModuleKind::Arena,
                criteria: vec![
                    format!("empathy: {}", self.empathy.phrases.join(", ")),
                    format!(
                        "heated client without de-escalation ({}) caps the turn at 4",
                        self.deescalation.phrases.join(", ")
                    ),
                ],
            },
            ModuleRubric {
                module: ModuleKind::Upsell,
                criteria: vec![
                    format!("value framing: {}", self.upsell_value.phrases.join(", ")),
                    "naming the drawn package counts as two marker hits".to_string(),
                ],
            },
        ];
        Rubric {
            scale_max: SCORE_MAX,
            common,
            modules,
        }
    }

    fn stage_markers(&self, stage: SalesStage) -> &MarkerSet {
        // Every stage is registered in `new`, so the lookup always succeeds.
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, set)| set)
            .unwrap_or(&self.courtesy)
    }

    fn objection_focus(&self, kind: ObjectionKind) -> &MarkerSet {
        use ObjectionKind::*;
        match kind {
            Price | TooExpensive | Competitor => &self.value,
            Trust | ScamFear => &self.proof,
            Hurry | Think | AskSpouse | NotNeeded | Later => &self.commitment,
        }
    }
}

impl Default for TurnScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn stage_tip(stage: SalesStage) -> &'static str {
    match stage {
        SalesStage::Greeting => {
            "Open with a greeting, give your name and where you are calling from."
        }
        SalesStage::Qualification => {
            "Ask open questions: what matters to the client, how they work today."
        }
        SalesStage::Support => {
            "Reflect what you heard before moving on. \"I hear you\" goes a long way."
        }
        SalesStage::Offer => {
            "Tie the offer to the client's own words: \"based on what you mentioned\"."
        }
        SalesStage::Demo => "Make it concrete: an example, a number, a before-and-after.",
        SalesStage::FinalClose => "Ask for the decision plainly: \"shall we get started?\"",
        SalesStage::Done => "The script is finished. Thank the client for their time.",
    }
}
