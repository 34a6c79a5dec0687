//! Named milestone badges, distinct from the XP badge counter.
//!
//! Each achievement is a pure predicate over the day collection; nothing
//! is ever stored, so the earned set can never drift from day state.

use std::collections::HashSet;

use diary_core::model::Day;

/// A named milestone evaluated over the whole program.
pub struct Achievement {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    check: fn(&[Day]) -> bool,
}

impl Achievement {
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Evaluates the achievement against the current day state.
    #[must_use]
    pub fn is_earned(&self, days: &[Day]) -> bool {
        (self.check)(days)
    }
}

static ALL: [Achievement; 5] = [
    Achievement {
        id: "first-entry",
        name: "First Steps",
        description: "Add your first journal entry",
        check: |days| days.iter().any(|d| !d.entries().is_empty()),
    },
    Achievement {
        id: "day-complete",
        name: "Quest Master",
        description: "Complete your first day",
        check: |days| days.iter().any(Day::is_completed),
    },
    Achievement {
        id: "media-mix",
        name: "Multimedia Pro",
        description: "Use all entry types",
        check: |days| {
            let kinds: HashSet<_> = days
                .iter()
                .flat_map(Day::entries)
                .map(|e| e.kind())
                .collect();
            kinds.len() >= 3
        },
    },
    Achievement {
        id: "halfway",
        name: "Halfway Hero",
        description: "Complete 3 days",
        check: |days| days.iter().filter(|d| d.is_completed()).count() >= 3,
    },
    Achievement {
        id: "complete",
        name: "BIP Champion",
        description: "Complete all 5 days",
        check: |days| days.iter().all(Day::is_completed),
    },
];

/// All defined achievements, in display order.
#[must_use]
pub fn all() -> &'static [Achievement] {
    &ALL
}

/// The achievements currently earned, in display order.
#[must_use]
pub fn earned(days: &[Day]) -> Vec<&'static Achievement> {
    ALL.iter().filter(|a| a.is_earned(days)).collect()
}

/// How many achievements are currently earned.
#[must_use]
pub fn earned_count(days: &[Day]) -> usize {
    ALL.iter().filter(|a| a.is_earned(days)).count()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
