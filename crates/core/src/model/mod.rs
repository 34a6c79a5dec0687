mod day;
mod entry;
mod ids;
mod quiz;

pub use day::{COMPLETION_BONUS_XP, Day, DayError, Session, XP_PER_BADGE};
pub use entry::{Entry, EntryDraft, EntryError, EntryKind, Rotation};
pub use ids::{EntryId, ParseIdError, QuestionId};
pub use quiz::{QuizError, QuizQuestion, XP_PER_QUESTION};
