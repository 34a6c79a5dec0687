use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::entry::{Entry, Rotation};
use crate::model::ids::EntryId;
use crate::model::quiz::QuizQuestion;

/// One-time XP bonus for marking a day complete.
pub const COMPLETION_BONUS_XP: u32 = 25;

/// Accumulated XP needed to unlock one badge.
pub const XP_PER_BADGE: u32 = 60;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DayError {
    #[error("cannot mark a day complete with no entries")]
    NoEntries,
}

//
// ─── SCHEDULE ──────────────────────────────────────────────────────────────────
//

/// Read-only schedule item for a day. The location may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    time: String,
    title: String,
    location: String,
}

impl Session {
    #[must_use]
    pub fn new(
        time: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            title: title.into(),
            location: location.into(),
        }
    }

    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

//
// ─── DAY ───────────────────────────────────────────────────────────────────────
//

/// One unit of the program schedule: static content (sessions, quiz,
/// descriptive fields) plus the mutable board and progress state.
///
/// Entry order is insertion order. XP only ever grows, except on
/// [`Day::reset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    day_number: u32,
    date: String,
    title: String,
    quest_label: String,
    sessions: Vec<Session>,
    entries: Vec<Entry>,
    completed: bool,
    quiz_completed: bool,
    completion_xp_claimed: bool,
    xp: u32,
    quiz: Vec<QuizQuestion>,
}

impl Day {
    /// Creates a day in its fresh state from static program content.
    #[must_use]
    pub fn new(
        day_number: u32,
        date: impl Into<String>,
        title: impl Into<String>,
        quest_label: impl Into<String>,
        sessions: Vec<Session>,
        quiz: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            day_number,
            date: date.into(),
            title: title.into(),
            quest_label: quest_label.into(),
            sessions,
            entries: Vec::new(),
            completed: false,
            quiz_completed: false,
            completion_xp_claimed: false,
            xp: 0,
            quiz,
        }
    }

    // Accessors
    #[must_use]
    pub fn day_number(&self) -> u32 {
        self.day_number
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn quest_label(&self) -> &str {
        &self.quest_label
    }

    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn is_quiz_completed(&self) -> bool {
        self.quiz_completed
    }

    #[must_use]
    pub fn completion_xp_claimed(&self) -> bool {
        self.completion_xp_claimed
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    // Mutations. The progress engine is the only intended caller.

    /// Appends an entry to the board.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes the entry with the given id.
    ///
    /// Returns false (benign no-op) when the id is absent. Completion
    /// state and XP are untouched even if this empties the board.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    /// Marks the day complete, awarding the completion bonus at most once
    /// per reset cycle.
    ///
    /// Returns whether XP was newly awarded.
    ///
    /// # Errors
    ///
    /// Returns `DayError::NoEntries` when the board is empty; state is
    /// left untouched.
    pub fn mark_complete(&mut self) -> Result<bool, DayError> {
        if self.entries.is_empty() {
            return Err(DayError::NoEntries);
        }
        self.completed = true;
        if self.completion_xp_claimed {
            return Ok(false);
        }
        self.completion_xp_claimed = true;
        self.xp += COMPLETION_BONUS_XP;
        Ok(true)
    }

    /// Clears the completed flag.
    ///
    /// Asymmetric on purpose: claimed XP and the claim flag survive, so
    /// toggling completion off and on does not re-earn the bonus.
    pub fn unmark_complete(&mut self) {
        self.completed = false;
    }

    /// Records a finished quiz run, crediting the earned XP.
    ///
    /// Idempotent: a second submission is a no-op returning false, so XP
    /// cannot be double-credited.
    pub fn complete_quiz(&mut self, earned_xp: u32) -> bool {
        if self.quiz_completed {
            return false;
        }
        self.quiz_completed = true;
        self.xp += earned_xp;
        true
    }

    /// Overwrites an entry's rotation. False when the id is absent.
    pub fn rotate_entry(&mut self, id: EntryId, rotation: Rotation) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.set_rotation(rotation);
                true
            }
            None => false,
        }
    }

    /// Overwrites an entry's creation timestamp. False when the id is absent.
    pub fn retime_entry(&mut self, id: EntryId, at: DateTime<Utc>) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.set_created_at(at);
                true
            }
            None => false,
        }
    }

    /// Restores the fresh state: board cleared, flags lowered, XP zeroed.
    /// Static content (sessions, quiz, descriptive fields) is untouched.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.completed = false;
        self.quiz_completed = false;
        self.completion_xp_claimed = false;
        self.xp = 0;
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
