use serde::{Deserialize, Serialize};
use std::fmt;

/// Question bank track chosen on the welcome screen.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Ten multiple-choice questions, no bonus round.
    Classic,
    /// Ten core questions followed by five bonus challenges.
    #[default]
    Mastery,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic quiz",
            Variant::Mastery => "Mastery quiz (with bonus challenges)",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConceptPair {
    pub left: String,
    pub right: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_index: usize,
    },
    FixCode {
        initial_code: String,
        instruction: String,
        #[serde(default)]
        hint: Option<String>,
    },
    GuessOutput {
        snippet: String,
        question: String,
        options: Vec<String>,
        correct_index: usize,
    },
    MatchConcept {
        pairs: Vec<ConceptPair>,
    },
}

impl QuestionKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple-choice",
            QuestionKind::FixCode { .. } => "fix-code",
            QuestionKind::GuessOutput { .. } => "guess-output",
            QuestionKind::MatchConcept { .. } => "match-concept",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    #[serde(default)]
    pub bonus: bool,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl Question {
    /// Bonus questions only ever move the bonus score. Every challenge kind
    /// other than multiple-choice is a bonus round.
    pub fn is_bonus(&self) -> bool {
        self.bonus || !matches!(self.kind, QuestionKind::MultipleChoice { .. })
    }

    /// Options for the kinds answered by picking an index.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::MultipleChoice { options, .. }
            | QuestionKind::GuessOutput { options, .. } => Some(options),
            _ => None,
        }
    }

    pub fn correct_index(&self) -> Option<usize> {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_index, .. }
            | QuestionKind::GuessOutput { correct_index, .. } => Some(*correct_index),
            _ => None,
        }
    }

    pub fn pairs(&self) -> Option<&[ConceptPair]> {
        match &self.kind {
            QuestionKind::MatchConcept { pairs } => Some(pairs),
            _ => None,
        }
    }
}

/// What the host hands to `QuizEngine::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Option index for multiple-choice and guess-output.
    Choice(usize),
    /// Markup typed into the fix-code editor.
    Code(String),
    /// One left/right click-pair of a match-concept board, as indices into `pairs`.
    Pair { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Legendary,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Legendary];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub tier: Tier,
    pub title: String,
    pub description: String,
    pub quote: String,
    pub icon: String,
    /// RGB used by the medal, the certificate border and the quote.
    pub color: [u8; 3],
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Lesson {
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Welcome,
    Menu,
    Course,
    Playground,
    Quiz,
    Results,
    Final,
}
