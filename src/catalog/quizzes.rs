//! Built-in quiz banks for the academy modules.

use serde::{Deserialize, Serialize};

/// Passing threshold applied when a quiz does not override it.
pub const DEFAULT_PASSING_SCORE: u8 = 70;

/// A multiple-choice quiz owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    /// Minimum score (0-100) counted as a pass.
    pub passing_score: u8,
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
    /// Shown to the user when they get this question wrong.
    pub explanation: String,
}

fn question(
    id: &str,
    prompt: &str,
    options: &[&str],
    correct_index: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
    }
}

/// The built-in quiz bank. Ids are stable; the API exposes them directly.
pub fn quiz_bank() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "objection-basics".to_string(),
            title: "Handling Objections: the Basics".to_string(),
            passing_score: DEFAULT_PASSING_SCORE,
            questions: vec![
                question(
                    "ob-1",
                    "A client says \"that's too expensive\". What comes first?",
                    &[
                        "Offer a discount immediately",
                        "Acknowledge the concern, then ask what they compare the price to",
                        "List every feature of the product again",
                        "End the call to avoid pressure",
                    ],
                    1,
                    "Price objections hide a value question. Acknowledge first, then find out what the client measures the price against.",
                ),
                question(
                    "ob-2",
                    "\"I need to ask my spouse\" usually signals:",
                    &[
                        "A hard no",
                        "A request for written materials",
                        "Unresolved doubt the client prefers not to voice",
                        "That the spouse controls the budget",
                    ],
                    2,
                    "Deferring to a third party is most often a polite cover for doubt. Surface the doubt before the call ends.",
                ),
                question(
                    "ob-3",
                    "The strongest response to \"your competitor is cheaper\" is:",
                    &[
                        "Matching the competitor's price",
                        "Explaining what the difference in price buys the client",
                        "Questioning the competitor's honesty",
                        "Ignoring the comparison",
                    ],
                    1,
                    "Never fight on price alone. Translate the delta into concrete value for this client.",
                ),
                question(
                    "ob-4",
                    "A client keeps repeating \"I'll think about it\". You should:",
                    &[
                        "Agree and wait for them to call back",
                        "Repeat the pitch more slowly",
                        "Ask a direct question about what specifically needs thinking over",
                        "Offer a bigger discount each time",
                    ],
                    2,
                    "\"I'll think about it\" without a named doubt almost never converts. Name the doubt together while you still can.",
                ),
                question(
                    "ob-5",
                    "When a client voices an objection, interrupting them is:",
                    &[
                        "Fine if you know the answer",
                        "Never acceptable: the objection must be heard out in full",
                        "Good, it shows confidence",
                        "Required by the script",
                    ],
                    1,
                    "An interrupted objection comes back harder. Let the client finish, confirm you understood, then answer.",
                ),
            ],
        },
        Quiz {
            id: "client-communication".to_string(),
            title: "Reading the Client".to_string(),
            passing_score: DEFAULT_PASSING_SCORE,
            questions: vec![
                question(
                    "cc-1",
                    "A silent client answering in single words most needs:",
                    &[
                        "A longer monologue from the seller",
                        "Closed yes/no questions",
                        "Open questions with real pauses after them",
                        "A follow-up email instead of a call",
                    ],
                    2,
                    "Silence is not refusal. Open questions plus a pause give a quiet client room to speak.",
                ),
                question(
                    "cc-2",
                    "An angry client starts shouting about a past bad experience. First move:",
                    &[
                        "Point out the experience was with another company",
                        "Let them vent, acknowledge the frustration, lower your own pace",
                        "Match their energy to show you care",
                        "Transfer them to a manager",
                    ],
                    1,
                    "De-escalation precedes argument. Acknowledgment plus a slower pace drains the heat; facts come after.",
                ),
                question(
                    "cc-3",
                    "The analytical client asking for numbers responds best to:",
                    &[
                        "Emotional success stories",
                        "Specific figures, comparisons and sources",
                        "Time-limited discounts",
                        "Compliments on their diligence",
                    ],
                    1,
                    "Match the client's decision style. Analysts buy from sellers whose numbers survive scrutiny.",
                ),
                question(
                    "cc-4",
                    "Which habit most reliably kills rapport early in a call?",
                    &[
                        "Using the client's name",
                        "Asking how much time they have",
                        "Pitching before asking a single question",
                        "Mentioning the company's history",
                    ],
                    2,
                    "A pitch with no discovery tells the client the conversation is about you, not them.",
                ),
                question(
                    "cc-5",
                    "A busy client gives you thirty seconds. You should:",
                    &[
                        "Talk faster to fit the full pitch in",
                        "Lead with the single most relevant benefit and offer to schedule the rest",
                        "Insist the product deserves more time",
                        "Send a brochure and hang up",
                    ],
                    1,
                    "Respecting the limit earns the next call. One sharp benefit beats ten rushed ones.",
                ),
            ],
        },
        Quiz {
            id: "upsell-essentials".to_string(),
            title: "Upselling Without Pressure".to_string(),
            passing_score: DEFAULT_PASSING_SCORE,
            questions: vec![
                question(
                    "ue-1",
                    "The right moment to propose an upgrade is:",
                    &[
                        "The moment the client answers the phone",
                        "After the client has named a need the bigger plan actually covers",
                        "Right before hanging up",
                        "Only during promotions",
                    ],
                    1,
                    "An upsell is an answer to a stated need. Without the need it reads as squeezing.",
                ),
                question(
                    "ue-2",
                    "A satisfied client on the basic plan says everything works fine. You:",
                    &[
                        "Insist they are missing out",
                        "Ask what they would improve if they could, then connect that to the upgrade",
                        "Drop the subject permanently",
                        "Offer the upgrade at a loss",
                    ],
                    1,
                    "Satisfaction is the opening, not the obstacle: an improvement question surfaces the need the upgrade answers.",
                ),
                question(
                    "ue-3",
                    "When naming the price difference of an upgrade, the stronger frame is:",
                    &[
                        "The total annual cost",
                        "The per-day difference next to the concrete gain",
                        "A comparison with the most expensive competitor",
                        "Avoiding numbers until the contract",
                    ],
                    1,
                    "Small-unit framing next to a concrete gain keeps the decision proportionate.",
                ),
                question(
                    "ue-4",
                    "The client declines the upgrade after a fair pitch. You:",
                    &[
                        "Accept it, confirm the current plan still serves them, leave the door open",
                        "Repeat the pitch with more urgency",
                        "Warn that prices will rise",
                        "Escalate to a manager",
                    ],
                    0,
                    "A graceful no preserves the relationship the next upsell will need.",
                ),
            ],
        },
    ]
}
