#![forbid(unsafe_code)]

pub mod achievements;
pub mod error;
pub mod progress;
pub mod quiz_session;
pub mod store;

pub use diary_core::Clock;

pub use achievements::Achievement;
pub use error::EngineError;
pub use progress::ProgramProgress;
pub use quiz_session::{AnswerOutcome, QuizSession};
pub use store::DiaryStore;
