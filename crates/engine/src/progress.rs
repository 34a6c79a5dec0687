use serde::Serialize;

/// Aggregated view of program progress, useful for UI.
///
/// Derived from day state on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramProgress {
    pub total_xp: u32,
    pub badge_count: u32,
    pub days_completed: usize,
    pub total_days: usize,
    pub is_complete: bool,
}
