//! Static scenario vocabulary shared by every training module.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The four training modules a user can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    GuidedPath,
    Objections,
    Arena,
    Upsell,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 4] = [
        ModuleKind::GuidedPath,
        ModuleKind::Objections,
        ModuleKind::Arena,
        ModuleKind::Upsell,
    ];

    /// Parse a module name as it appears in commands and route paths.
    pub fn parse(s: &str) -> Option<ModuleKind> {
        match s {
            "guided_path" => Some(ModuleKind::GuidedPath),
            "objections" => Some(ModuleKind::Objections),
            "arena" => Some(ModuleKind::Arena),
            "upsell" => Some(ModuleKind::Upsell),
            _ => None,
        }
    }

    /// Human-readable module title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::GuidedPath => "Guided Sales Path",
            Self::Objections => "Objection Handling",
            Self::Arena => "Client Arena",
            Self::Upsell => "Upsell Practice",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GuidedPath => "guided_path",
            Self::Objections => "objections",
            Self::Arena => "arena",
            Self::Upsell => "upsell",
        };
        write!(f, "{s}")
    }
}

/// The stages of the guided sales script.
///
/// Progresses linearly: Greeting → Qualification → Support → Offer →
/// Demo → FinalClose → Done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesStage {
    Greeting,
    Qualification,
    Support,
    Offer,
    Demo,
    FinalClose,
    Done,
}

impl SalesStage {
    pub const ALL: [SalesStage; 7] = [
        SalesStage::Greeting,
        SalesStage::Qualification,
        SalesStage::Support,
        SalesStage::Offer,
        SalesStage::Demo,
        SalesStage::FinalClose,
        SalesStage::Done,
    ];

    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SalesStage) -> bool {
        use SalesStage::*;
        matches!(
            (self, target),
            (Greeting, Qualification)
                | (Qualification, Support)
                | (Support, Offer)
                | (Offer, Demo)
                | (Demo, FinalClose)
                | (FinalClose, Done)
        )
    }

    /// Whether this stage is terminal (the script is finished).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Get the next stage in the linear progression, if any.
    pub fn next(&self) -> Option<SalesStage> {
        use SalesStage::*;
        match self {
            Greeting => Some(Qualification),
            Qualification => Some(Support),
            Support => Some(Offer),
            Offer => Some(Demo),
            Demo => Some(FinalClose),
            FinalClose => Some(Done),
            Done => None,
        }
    }

    /// Human-readable stage title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "Greeting",
            Self::Qualification => "Qualification",
            Self::Support => "Support & Rapport",
            Self::Offer => "Offer",
            Self::Demo => "Demonstration",
            Self::FinalClose => "Final Close",
            Self::Done => "Completed",
        }
    }

    /// What the seller is expected to accomplish in this stage.
    pub fn brief(&self) -> &'static str {
        match self {
            Self::Greeting => "open warmly, introduce yourself and the company",
            Self::Qualification => "ask open questions to uncover the client's needs",
            Self::Support => "acknowledge the client's situation and build rapport",
            Self::Offer => "present the offer in terms of the client's own needs",
            Self::Demo => "show the product in action with a concrete example",
            Self::FinalClose => "summarize agreements and ask for the decision",
            Self::Done => "script finished, wrap up the conversation",
        }
    }
}

impl Default for SalesStage {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for SalesStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::Qualification => "qualification",
            Self::Support => "support",
            Self::Offer => "offer",
            Self::Demo => "demo",
            Self::FinalClose => "final_close",
            Self::Done => "done",
        };
        write!(f, "{s}")
    }
}

/// Client archetypes the arena can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientArchetype {
    Silent,
    Talkative,
    Rude,
    Polite,
    Busy,
    Wealthy,
    Frugal,
    Jokester,
    Analytical,
    Emotional,
    Skeptic,
    Warm,
    Cold,
    Doubtful,
    Dominant,
    Passive,
    DetailOriented,
    Impulsive,
    Deliberate,
    Expert,
}

impl ClientArchetype {
    pub const ALL: [ClientArchetype; 20] = [
        ClientArchetype::Silent,
        ClientArchetype::Talkative,
        ClientArchetype::Rude,
        ClientArchetype::Polite,
        ClientArchetype::Busy,
        ClientArchetype::Wealthy,
        ClientArchetype::Frugal,
        ClientArchetype::Jokester,
        ClientArchetype::Analytical,
        ClientArchetype::Emotional,
        ClientArchetype::Skeptic,
        ClientArchetype::Warm,
        ClientArchetype::Cold,
        ClientArchetype::Doubtful,
        ClientArchetype::Dominant,
        ClientArchetype::Passive,
        ClientArchetype::DetailOriented,
        ClientArchetype::Impulsive,
        ClientArchetype::Deliberate,
        ClientArchetype::Expert,
    ];

    /// Draw a random archetype.
    pub fn draw<R: Rng>(rng: &mut R) -> ClientArchetype {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Human-readable archetype title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Silent => "The Silent One",
            Self::Talkative => "The Talker",
            Self::Rude => "The Rude One",
            Self::Polite => "The Polite One",
            Self::Busy => "The Busy One",
            Self::Wealthy => "The Big Spender",
            Self::Frugal => "The Bargain Hunter",
            Self::Jokester => "The Jokester",
            Self::Analytical => "The Analyst",
            Self::Emotional => "The Emotional One",
            Self::Skeptic => "The Skeptic",
            Self::Warm => "The Warm One",
            Self::Cold => "The Cold One",
            Self::Doubtful => "The Doubter",
            Self::Dominant => "The Dominant One",
            Self::Passive => "The Passive One",
            Self::DetailOriented => "The Detail Hound",
            Self::Impulsive => "The Impulsive One",
            Self::Deliberate => "The Slow Decider",
            Self::Expert => "The Expert",
        }
    }

    /// One-line voice hint fed to the reply generator.
    pub fn brief(&self) -> &'static str {
        match self {
            Self::Silent => "answers in single words, volunteers nothing",
            Self::Talkative => "rambles off topic, hard to steer back",
            Self::Rude => "snaps at the seller, questions their competence",
            Self::Polite => "courteous but evasive about committing",
            Self::Busy => "keeps saying there is no time, wants it in one sentence",
            Self::Wealthy => "money is no object, demands premium treatment",
            Self::Frugal => "haggles over every cent, asks for discounts",
            Self::Jokester => "deflects every point with a joke",
            Self::Analytical => "wants numbers, comparisons and proof",
            Self::Emotional => "reacts to tone more than substance",
            Self::Skeptic => "assumes every claim is exaggerated",
            Self::Warm => "friendly and chatty, drifts into small talk",
            Self::Cold => "distant, gives no emotional feedback",
            Self::Doubtful => "agrees, then immediately second-guesses",
            Self::Dominant => "takes over the conversation, tests authority",
            Self::Passive => "agrees with everything, decides nothing",
            Self::DetailOriented => "asks about fine print and edge cases",
            Self::Impulsive => "ready to buy instantly, just as ready to bolt",
            Self::Deliberate => "needs time, dislikes being rushed",
            Self::Expert => "claims to know the product better than the seller",
        }
    }
}

impl std::fmt::Display for ClientArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Silent => "silent",
            Self::Talkative => "talkative",
            Self::Rude => "rude",
            Self::Polite => "polite",
            Self::Busy => "busy",
            Self::Wealthy => "wealthy",
            Self::Frugal => "frugal",
            Self::Jokester => "jokester",
            Self::Analytical => "analytical",
            Self::Emotional => "emotional",
            Self::Skeptic => "skeptic",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Doubtful => "doubtful",
            Self::Dominant => "dominant",
            Self::Passive => "passive",
            Self::DetailOriented => "detail_oriented",
            Self::Impulsive => "impulsive",
            Self::Deliberate => "deliberate",
            Self::Expert => "expert",
        };
        write!(f, "{s}")
    }
}

/// Client emotional states tracked by the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Calm,
    Neutral,
    Annoyed,
    Angry,
    Excited,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Calm,
        Emotion::Neutral,
        Emotion::Annoyed,
        Emotion::Angry,
        Emotion::Excited,
    ];

    /// Draw a random starting emotion.
    pub fn draw<R: Rng>(rng: &mut R) -> Emotion {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Whether the client needs de-escalation before anything else.
    pub fn is_heated(&self) -> bool {
        matches!(self, Self::Annoyed | Self::Angry)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Neutral => "Neutral",
            Self::Annoyed => "Annoyed",
            Self::Angry => "Angry",
            Self::Excited => "Excited",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Calm => "calm",
            Self::Neutral => "neutral",
            Self::Annoyed => "annoyed",
            Self::Angry => "angry",
            Self::Excited => "excited",
        };
        write!(f, "{s}")
    }
}

/// Difficulty tiers for arena sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Intro,
    Standard,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Intro, Difficulty::Standard, Difficulty::Hard];

    pub fn draw<R: Rng>(rng: &mut R) -> Difficulty {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "Intro",
            Self::Standard => "Standard",
            Self::Hard => "Hard",
        }
    }

    /// One-line resistance hint fed to the reply generator.
    pub fn brief(&self) -> &'static str {
        match self {
            Self::Intro => "yields after one good argument",
            Self::Standard => "needs two or three solid arguments",
            Self::Hard => "resists everything short of a flawless pitch",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intro => "intro",
            Self::Standard => "standard",
            Self::Hard => "hard",
        };
        write!(f, "{s}")
    }
}

/// Objection kinds drawn for objection-handling sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectionKind {
    Price,
    Trust,
    Hurry,
    Think,
    AskSpouse,
    ScamFear,
    TooExpensive,
    NotNeeded,
    Later,
    Competitor,
}

impl ObjectionKind {
    pub const ALL: [ObjectionKind; 10] = [
        ObjectionKind::Price,
        ObjectionKind::Trust,
        ObjectionKind::Hurry,
        ObjectionKind::Think,
        ObjectionKind::AskSpouse,
        ObjectionKind::ScamFear,
        ObjectionKind::TooExpensive,
        ObjectionKind::NotNeeded,
        ObjectionKind::Later,
        ObjectionKind::Competitor,
    ];

    pub fn draw<R: Rng>(rng: &mut R) -> ObjectionKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Price => "Price pushback",
            Self::Trust => "Lack of trust",
            Self::Hurry => "No time right now",
            Self::Think => "Needs to think it over",
            Self::AskSpouse => "Has to ask the spouse",
            Self::ScamFear => "Afraid of being scammed",
            Self::TooExpensive => "Too expensive outright",
            Self::NotNeeded => "Sees no need",
            Self::Later => "Maybe later",
            Self::Competitor => "Prefers a competitor",
        }
    }

    /// The client's opening line for this objection.
    pub fn opening_line(&self) -> &'static str {
        match self {
            Self::Price => "Why does it cost that much? I can't justify it.",
            Self::Trust => "I've never heard of you. Why should I trust you?",
            Self::Hurry => "I'm in a rush, I really don't have time for this.",
            Self::Think => "Sounds fine, but I need to think about it.",
            Self::AskSpouse => "I have to discuss this with my spouse first.",
            Self::ScamFear => "How do I know this isn't some kind of scam?",
            Self::TooExpensive => "That's just too expensive for me, full stop.",
            Self::NotNeeded => "Honestly, I don't see why I'd need this at all.",
            Self::Later => "Let's come back to this some other time.",
            Self::Competitor => "Your competitor offers the same thing cheaper.",
        }
    }
}

impl std::fmt::Display for ObjectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Price => "price",
            Self::Trust => "trust",
            Self::Hurry => "hurry",
            Self::Think => "think",
            Self::AskSpouse => "ask_spouse",
            Self::ScamFear => "scam_fear",
            Self::TooExpensive => "too_expensive",
            Self::NotNeeded => "not_needed",
            Self::Later => "later",
            Self::Competitor => "competitor",
        };
        write!(f, "{s}")
    }
}

/// Persona tones coloring how an objection is voiced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaTone {
    Cold,
    Calm,
    Aggressive,
    Friendly,
}

impl PersonaTone {
    pub const ALL: [PersonaTone; 4] = [
        PersonaTone::Cold,
        PersonaTone::Calm,
        PersonaTone::Aggressive,
        PersonaTone::Friendly,
    ];

    pub fn draw<R: Rng>(rng: &mut R) -> PersonaTone {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Calm => "Calm",
            Self::Aggressive => "Aggressive",
            Self::Friendly => "Friendly",
        }
    }

    /// One-line voice hint fed to the reply generator.
    pub fn brief(&self) -> &'static str {
        match self {
            Self::Cold => "clipped sentences, no pleasantries",
            Self::Calm => "measured, reasonable, open to argument",
            Self::Aggressive => "raises the stakes, interrupts, provokes",
            Self::Friendly => "warm but still unconvinced",
        }
    }
}

impl std::fmt::Display for PersonaTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cold => "cold",
            Self::Calm => "calm",
            Self::Aggressive => "aggressive",
            Self::Friendly => "friendly",
        };
        write!(f, "{s}")
    }
}

/// Client moods drawn for upsell sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMood {
    Satisfied,
    Hesitant,
    BudgetConscious,
    InAHurry,
}

impl ClientMood {
    pub const ALL: [ClientMood; 4] = [
        ClientMood::Satisfied,
        ClientMood::Hesitant,
        ClientMood::BudgetConscious,
        ClientMood::InAHurry,
    ];

    pub fn draw<R: Rng>(rng: &mut R) -> ClientMood {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Satisfied => "Satisfied",
            Self::Hesitant => "Hesitant",
            Self::BudgetConscious => "Budget-conscious",
            Self::InAHurry => "In a hurry",
        }
    }

    /// One-line voice hint fed to the reply generator.
    pub fn brief(&self) -> &'static str {
        match self {
            Self::Satisfied => "happy with the current plan, sees no reason to pay more",
            Self::Hesitant => "curious about the bigger plan but afraid of overpaying",
            Self::BudgetConscious => "counts every cent, wants hard numbers",
            Self::InAHurry => "will listen for thirty seconds, then hangs up",
        }
    }
}

impl std::fmt::Display for ClientMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Satisfied => "satisfied",
            Self::Hesitant => "hesitant",
            Self::BudgetConscious => "budget_conscious",
            Self::InAHurry => "in_a_hurry",
        };
        write!(f, "{s}")
    }
}

/// Service packages pitched in the upsell module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsellPackage {
    Basic,
    Premium,
    Gold,
}

impl UpsellPackage {
    pub const ALL: [UpsellPackage; 3] = [
        UpsellPackage::Basic,
        UpsellPackage::Premium,
        UpsellPackage::Gold,
    ];

    pub fn draw<R: Rng>(rng: &mut R) -> UpsellPackage {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Gold => "Gold",
        }
    }

    /// One-line value proposition the seller is expected to land.
    pub fn pitch(&self) -> &'static str {
        match self {
            Self::Basic => "covers the essentials for a single user",
            Self::Premium => "adds priority support and the full lesson library",
            Self::Gold => "everything in Premium plus a personal coach",
        }
    }
}

impl std::fmt::Display for UpsellPackage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Basic => "basic",
            Self::Premium => "premium",
            Self::Gold => "gold",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn module_parse_roundtrip() {
        for module in ModuleKind::ALL {
            let name = module.to_string();
            assert_eq!(ModuleKind::parse(&name), Some(module));
        }
        assert_eq!(ModuleKind::parse("poetry"), None);
        assert_eq!(ModuleKind::parse(""), None);
    }

    #[test]
    fn stage_next_walks_all_stages() {
        use SalesStage::*;
        let expected = [Qualification, Support, Offer, Demo, FinalClose, Done];
        let mut current = Greeting;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            assert!(current.can_transition_to(next));
            current = next;
        }
        assert!(current.next().is_none());
        assert!(current.is_terminal());
    }

    #[test]
    fn stage_invalid_transitions() {
        use SalesStage::*;
        // Skip stages
        assert!(!Greeting.can_transition_to(Offer));
        // Go backward
        assert!(!Demo.can_transition_to(Support));
        // Terminal
        assert!(!Done.can_transition_to(Greeting));
        // Self-transition
        assert!(!Offer.can_transition_to(Offer));
    }

    #[test]
    fn display_matches_serde() {
        for module in ModuleKind::ALL {
            let json = serde_json::to_string(&module).unwrap();
            assert_eq!(format!("\"{module}\""), json);
        }
        for stage in SalesStage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(format!("\"{stage}\""), json);
        }
        for archetype in ClientArchetype::ALL {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(format!("\"{archetype}\""), json);
        }
        for emotion in Emotion::ALL {
            let json = serde_json::to_string(&emotion).unwrap();
            assert_eq!(format!("\"{emotion}\""), json);
        }
        for kind in ObjectionKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(format!("\"{kind}\""), json);
        }
        for mood in ClientMood::ALL {
            let json = serde_json::to_string(&mood).unwrap();
            assert_eq!(format!("\"{mood}\""), json);
        }
    }

    #[test]
    fn draws_are_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(ClientArchetype::draw(&mut a), ClientArchetype::draw(&mut b));
        assert_eq!(Emotion::draw(&mut a), Emotion::draw(&mut b));
        assert_eq!(ObjectionKind::draw(&mut a), ObjectionKind::draw(&mut b));
        assert_eq!(UpsellPackage::draw(&mut a), UpsellPackage::draw(&mut b));
    }

    #[test]
    fn heated_emotions() {
        assert!(Emotion::Angry.is_heated());
        assert!(Emotion::Annoyed.is_heated());
        assert!(!Emotion::Calm.is_heated());
        assert!(!Emotion::Excited.is_heated());
    }
}
