use crate::model::Tier;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Data error: {0}")]
    Data(#[from] serde_yaml::Error),

    #[error("The question bank is empty")]
    EmptyQuestionBank,

    #[error("Invalid question #{index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("Badge catalog has no {0} badge")]
    MissingBadge(Tier),

    #[error("Question #{index} was already answered")]
    AlreadyAnswered { index: usize },

    #[error("Question #{index} expects a {expected} answer")]
    AnswerKindMismatch { index: usize, expected: &'static str },

    #[error("Quiz is not finished yet (question {current} of {last})")]
    NotFinished { current: usize, last: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Certificate could not be rendered: {0}")]
    Pdf(String),

    #[error("Browser error: {0}")]
    Browser(String),
}
