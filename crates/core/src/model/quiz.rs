use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

/// XP granted per correctly answered quiz question.
pub const XP_PER_QUESTION: u32 = 10;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("a quiz question needs at least two options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct option index {index} is out of bounds for {count} options")]
    CorrectIndexOutOfBounds { index: usize, count: usize },
}

//
// ─── QUIZ QUESTION ─────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Part of the static program content; never user-mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuizQuestion {
    /// Creates a new question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::TooFewOptions` if fewer than two options are
    /// given, or `QuizError::CorrectIndexOutOfBounds` if `correct_index`
    /// does not point into `options`.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, QuizError> {
        if options.len() < 2 {
            return Err(QuizError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(QuizError::CorrectIndexOutOfBounds {
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Returns true iff the selected option is the correct one.
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
