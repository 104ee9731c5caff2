//! Error types for lingo-core.

use thiserror::Error;

/// Result type alias using VocabError.
pub type Result<T> = std::result::Result<T, VocabError>;

/// Errors surfaced to callers by vocabulary and settings operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("\"{term}\" already exists in the vocabulary")]
    Duplicate { term: String },

    #[error("no entry with id {id}")]
    NotFound { id: String },

    #[error("unknown language code: {code}")]
    UnknownLanguage { code: String },
}

/// Errors raised when the quiz state machine is driven out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no quiz is in progress")]
    Inactive,

    #[error("answer submitted for step {got} while on step {expected}")]
    StepMismatch { expected: usize, got: usize },

    #[error("current step has not been answered")]
    Unanswered,
}
