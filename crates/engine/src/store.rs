use chrono::{DateTime, Utc};

use diary_core::Clock;
use diary_core::model::{Day, EntryDraft, EntryId, Rotation, XP_PER_BADGE};
use diary_core::program::bip_program;

use crate::error::EngineError;
use crate::progress::ProgramProgress;

/// The progress engine: sole owner and mutator of the day collection.
///
/// The presentation layer issues commands through this store and renders
/// from the read-only snapshots it returns; nothing else touches day or
/// entry state. All state is volatile and lost on drop.
#[derive(Debug, Clone)]
pub struct DiaryStore {
    days: Vec<Day>,
    clock: Clock,
}

impl DiaryStore {
    /// Creates a store over the given program days, using real time.
    #[must_use]
    pub fn new(days: Vec<Day>) -> Self {
        Self::with_clock(days, Clock::default())
    }

    /// Creates a store with an explicit clock, for deterministic tests.
    #[must_use]
    pub fn with_clock(days: Vec<Day>, clock: Clock) -> Self {
        Self { days, clock }
    }

    /// Creates a store seeded with the built-in BIP week.
    #[must_use]
    pub fn bip() -> Self {
        Self::new(bip_program())
    }

    /// The clock driving entry timestamps.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    // ─── Queries ───────────────────────────────────────────────────────────────

    /// Read-only snapshot of all days, in program order.
    #[must_use]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Read-only snapshot of a single day.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn day(&self, index: usize) -> Result<&Day, EngineError> {
        self.days.get(index).ok_or(EngineError::DayOutOfRange {
            index,
            len: self.days.len(),
        })
    }

    /// Total program XP, recomputed on demand from day state.
    #[must_use]
    pub fn total_xp(&self) -> u32 {
        self.days.iter().map(Day::xp).sum()
    }

    /// Badges unlocked so far: one per 60 accumulated XP.
    #[must_use]
    pub fn badge_count(&self) -> u32 {
        self.total_xp() / XP_PER_BADGE
    }

    /// Aggregated progress view for the presentation layer.
    #[must_use]
    pub fn progress(&self) -> ProgramProgress {
        let days_completed = self.days.iter().filter(|d| d.is_completed()).count();
        ProgramProgress {
            total_xp: self.total_xp(),
            badge_count: self.badge_count(),
            days_completed,
            total_days: self.days.len(),
            is_complete: !self.days.is_empty() && days_completed == self.days.len(),
        }
    }

    // ─── Commands ──────────────────────────────────────────────────────────────

    /// Appends a new entry to a day's board and returns its fresh id.
    ///
    /// The entry is stamped with the store clock's current time and a
    /// neutral rotation. Content is taken as-is; emptiness checks are the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index, or a
    /// validation error from the draft (caption on a note). No state is
    /// mutated on error.
    pub fn add_entry(&mut self, day_index: usize, draft: EntryDraft) -> Result<EntryId, EngineError> {
        let now = self.clock.now();
        let day = self.day_mut(day_index)?;
        let entry = draft.validate(now)?;
        let id = entry.id();
        day.add_entry(entry);
        Ok(id)
    }

    /// Removes an entry from a day's board.
    ///
    /// Returns false (benign no-op) when the id is absent. Never touches
    /// completion state or XP, even when the board becomes empty.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn delete_entry(&mut self, day_index: usize, entry_id: EntryId) -> Result<bool, EngineError> {
        Ok(self.day_mut(day_index)?.remove_entry(entry_id))
    }

    /// Marks a day complete, awarding the one-time completion bonus.
    ///
    /// Returns whether XP was newly awarded, so the caller can trigger a
    /// one-time notification.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index, or
    /// `DayError::NoEntries` when the board is empty (fail closed).
    pub fn mark_day_complete(&mut self, day_index: usize) -> Result<bool, EngineError> {
        Ok(self.day_mut(day_index)?.mark_complete()?)
    }

    /// Clears a day's completed flag without revoking claimed XP.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn unmark_day_complete(&mut self, day_index: usize) -> Result<(), EngineError> {
        self.day_mut(day_index)?.unmark_complete();
        Ok(())
    }

    /// Records a finished quiz run for a day, crediting the earned XP.
    ///
    /// Idempotent: returns `Ok(false)` without crediting when the day's
    /// quiz was already completed.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn complete_quiz(&mut self, day_index: usize, earned_xp: u32) -> Result<bool, EngineError> {
        Ok(self.day_mut(day_index)?.complete_quiz(earned_xp))
    }

    /// Overwrites an entry's cosmetic rotation.
    ///
    /// Returns false when the entry id is absent.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index, or
    /// `EntryError::RotationOutOfRange` for degrees outside [-15, 15].
    pub fn update_entry_rotation(
        &mut self,
        day_index: usize,
        entry_id: EntryId,
        degrees: i32,
    ) -> Result<bool, EngineError> {
        let day = self.day_mut(day_index)?;
        let rotation = Rotation::new(degrees)?;
        Ok(day.rotate_entry(entry_id, rotation))
    }

    /// Overwrites an entry's creation timestamp.
    ///
    /// Returns false when the entry id is absent.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn update_entry_timestamp(
        &mut self,
        day_index: usize,
        entry_id: EntryId,
        at: DateTime<Utc>,
    ) -> Result<bool, EngineError> {
        Ok(self.day_mut(day_index)?.retime_entry(entry_id, at))
    }

    /// Restores one day to its fresh state; static content is untouched.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index.
    pub fn reset_day(&mut self, day_index: usize) -> Result<(), EngineError> {
        self.day_mut(day_index)?.reset();
        Ok(())
    }

    /// Restores every day to its fresh state.
    pub fn reset_program(&mut self) {
        for day in &mut self.days {
            day.reset();
        }
    }

    fn day_mut(&mut self, index: usize) -> Result<&mut Day, EngineError> {
        let len = self.days.len();
        self.days
            .get_mut(index)
            .ok_or(EngineError::DayOutOfRange { index, len })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
