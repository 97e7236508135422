//! Built-in lesson library.

use serde::{Deserialize, Serialize};

use super::data::ModuleKind;

/// A short theory lesson users read between practice sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub body: String,
    /// Estimated reading time.
    pub minutes: u8,
    /// Training modules this lesson prepares the user for.
    pub modules: Vec<ModuleKind>,
}

fn lesson(
    id: &str,
    title: &str,
    summary: &str,
    body: &str,
    minutes: u8,
    modules: &[ModuleKind],
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        body: body.to_string(),
        minutes,
        modules: modules.to_vec(),
    }
}

/// The built-in lesson library. Ids are stable; the API exposes them directly.
pub fn lesson_library() -> Vec<Lesson> {
    vec![
        lesson(
            "sales-script-walkthrough",
            "The Six-Stage Sales Script",
            "What each stage of the guided path is for and how to know you are done with it.",
            "Every stage has one job. Greeting earns the right to ask questions. \
             Qualification finds the need; without it the offer is a guess. Support \
             proves you heard the client. The offer ties the product to the client's \
             own words. The demo makes it tangible. The close asks plainly for a \
             decision. Skipping a stage does not save time, it moves the work into \
             the objection phase where it costs double.",
            4,
            &[ModuleKind::GuidedPath],
        ),
        lesson(
            "listen-then-answer",
            "Hear the Objection Out",
            "Why interrupting an objection makes it stronger, and the acknowledge-ask-answer loop.",
            "An objection is information, not an attack. Let the client finish. \
             Confirm what you heard in one sentence. Ask one question that narrows \
             the real concern. Only then answer, briefly, in the client's terms. \
             The loop is slower per objection and much faster per deal.",
            3,
            &[ModuleKind::Objections],
        ),
        lesson(
            "price-is-a-value-question",
            "Price Objections Are Value Questions",
            "Reframing \"too expensive\" without a discount.",
            "\"Too expensive\" compares the price to something: a competitor, last \
             year's price, a guess. Find the comparison first. Then translate the \
             difference into what the client gains: time, risk removed, support. \
             A discount offered before the comparison is known teaches the client \
             that pushing works.",
            3,
            &[ModuleKind::Objections, ModuleKind::Upsell],
        ),
        lesson(
            "reading-difficult-clients",
            "Twenty Clients, Five Emotions",
            "A field guide to the arena: archetypes, emotional states and what each one needs first.",
            "The silent client needs room, the talker needs gentle steering, the \
             skeptic needs proof, the expert needs respect before facts. Emotion \
             comes before archetype: an angry analyst is angry first and an analyst \
             second. De-escalate, then adapt to the type. The arena scores you on \
             exactly that order.",
            5,
            &[ModuleKind::Arena],
        ),
        lesson(
            "upgrade-as-an-answer",
            "The Upsell Is an Answer",
            "Anchoring an upgrade to a stated need instead of pushing features.",
            "An upgrade pitched before a need is named reads as squeezing. Ask what \
             the client would improve, connect the bigger package to that answer, \
             frame the price difference per day next to the concrete gain, and take \
             a no gracefully. The relationship outlasts the quarter.",
            3,
            &[ModuleKind::Upsell],
        ),
    ]
}
