use thiserror::Error;

use crate::scoring::StageKind;

/// Result type for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors raised while scoring a questionnaire.
///
/// Both variants describe bad input from the caller; nothing is retried and no partial
/// classification is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// A stage was scored before every one of its questions had an answer
    #[error("Incomplete answers for {stage} stage: missing {}", .missing.join(", "))]
    IncompleteAnswers {
        stage: StageKind,
        missing: Vec<String>,
    },

    /// A response outside the 1-5 scale
    #[error("Invalid answer for question '{question}': {value} (expected 1-5)")]
    InvalidAnswer { question: String, value: i64 },
}

impl ClassifierError {
    /// Create an incomplete answers error
    pub fn incomplete(stage: StageKind, missing: Vec<String>) -> Self {
        Self::IncompleteAnswers { stage, missing }
    }

    /// Create an invalid answer error
    pub fn invalid_answer(question: impl Into<String>, value: i64) -> Self {
        Self::InvalidAnswer {
            question: question.into(),
            value,
        }
    }
}
