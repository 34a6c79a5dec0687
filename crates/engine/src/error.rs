//! Shared error types for the engine crate.

use thiserror::Error;

use diary_core::model::{DayError, EntryError};

/// Errors emitted by the progress engine and quiz sessions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("day index {index} is out of range for a {len}-day program")]
    DayOutOfRange { index: usize, len: usize },

    #[error("day has no quiz questions")]
    EmptyQuiz,

    #[error("quiz session already ran to completion")]
    QuizSessionCompleted,

    #[error("quiz session is not finished: {answered} of {total} questions answered")]
    QuizUnfinished { answered: usize, total: usize },

    #[error("selected option {index} is out of bounds for {count} options")]
    OptionOutOfBounds { index: usize, count: usize },

    #[error(transparent)]
    Day(#[from] DayError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}
