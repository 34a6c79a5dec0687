use chrono::Duration;

use diary_core::model::{COMPLETION_BONUS_XP, DayError, EntryDraft, EntryKind, XP_PER_BADGE};
use diary_core::program::bip_program;
use diary_core::time::{fixed_clock, fixed_now};
use engine::{AnswerOutcome, DiaryStore, EngineError, QuizSession, achievements};

fn store() -> DiaryStore {
    DiaryStore::with_clock(bip_program(), fixed_clock())
}

fn assert_badge_invariant(store: &DiaryStore) {
    assert_eq!(store.badge_count(), store.total_xp() / XP_PER_BADGE);
}

#[test]
fn empty_day_cannot_be_completed() {
    let mut store = store();

    let err = store.mark_day_complete(0).unwrap_err();
    assert_eq!(err, EngineError::Day(DayError::NoEntries));
    assert!(!store.day(0).unwrap().is_completed());
    assert_eq!(store.total_xp(), 0);
}

#[test]
fn completion_toggle_keeps_the_bonus_single() {
    let mut store = store();
    store.add_entry(0, EntryDraft::note("arrived at K001")).unwrap();

    assert!(store.mark_day_complete(0).unwrap());
    let day = store.day(0).unwrap();
    assert!(day.is_completed());
    assert!(day.completion_xp_claimed());
    assert_eq!(day.xp(), COMPLETION_BONUS_XP);

    store.unmark_day_complete(0).unwrap();
    let day = store.day(0).unwrap();
    assert!(!day.is_completed());
    assert!(day.completion_xp_claimed());
    assert_eq!(day.xp(), COMPLETION_BONUS_XP);

    assert!(!store.mark_day_complete(0).unwrap());
    assert_eq!(store.day(0).unwrap().xp(), COMPLETION_BONUS_XP);
    assert_badge_invariant(&store);
}

#[test]
fn quiz_run_scores_and_submits_through_the_store() {
    let mut store = store();
    let mut session = QuizSession::start(&store, 0).unwrap();

    // Miss the last question, ace the first three.
    for i in 0..4 {
        let question = session.current_question().unwrap();
        let pick = if i == 3 {
            (question.correct_index() + 1) % question.options().len()
        } else {
            question.correct_index()
        };
        let outcome = session.answer(pick).unwrap();
        if i == 3 {
            assert!(matches!(outcome, AnswerOutcome::Incorrect { .. }));
        } else {
            assert_eq!(outcome, AnswerOutcome::Correct);
        }
        assert!(session.advance());
    }

    assert!(session.is_complete());
    assert_eq!(session.earned_xp(), 30);
    assert!(session.finish(&mut store).unwrap());

    let day = store.day(0).unwrap();
    assert!(day.is_quiz_completed());
    assert_eq!(day.xp(), 30);
    assert_badge_invariant(&store);
}

#[test]
fn deleting_the_last_entry_keeps_completion_and_xp() {
    let mut store = store();
    let id = store
        .add_entry(2, EntryDraft::media(EntryKind::Image, "data:image/png;base64,AA", Some("whiteboard".into())))
        .unwrap();
    store.mark_day_complete(2).unwrap();

    assert!(store.delete_entry(2, id).unwrap());
    assert!(!store.delete_entry(2, id).unwrap());

    let day = store.day(2).unwrap();
    assert!(day.entries().is_empty());
    assert!(day.is_completed());
    assert_eq!(day.xp(), COMPLETION_BONUS_XP);
}

#[test]
fn empty_note_content_is_the_callers_problem() {
    // Documented policy: the engine appends whatever content the caller
    // hands over; pre-validation lives in the presentation layer.
    let mut store = store();
    let id = store.add_entry(4, EntryDraft::note("")).unwrap();
    assert_eq!(store.day(4).unwrap().entry(id).unwrap().content(), "");
}

#[test]
fn full_week_accumulates_and_resets() {
    let mut store = store();

    for i in 0..5 {
        store
            .add_entry(i, EntryDraft::note(format!("day {} notes", i + 1)))
            .unwrap();
        store.clock_mut().advance(Duration::days(1));
        assert!(store.mark_day_complete(i).unwrap());

        let mut session = QuizSession::start(&store, i).unwrap();
        while !session.is_complete() {
            let correct = session.current_question().unwrap().correct_index();
            session.answer(correct).unwrap();
            session.advance();
        }
        assert!(session.finish(&mut store).unwrap());
        assert_badge_invariant(&store);
    }

    // 5 days x (25 completion + 40 quiz) = 325 XP, 5 badges.
    assert_eq!(store.total_xp(), 325);
    assert_eq!(store.badge_count(), 5);

    let progress = store.progress();
    assert_eq!(progress.days_completed, 5);
    assert!(progress.is_complete);
    assert_eq!(achievements::earned_count(store.days()), 4);

    store.reset_program();

    assert_eq!(store.total_xp(), 0);
    assert_eq!(store.badge_count(), 0);
    assert!(!store.progress().is_complete);
    for day in store.days() {
        assert!(day.entries().is_empty());
        assert!(!day.is_completed());
        assert!(!day.is_quiz_completed());
        assert!(!day.completion_xp_claimed());
        assert_eq!(day.quiz().len(), 4);
        assert!(!day.sessions().is_empty());
    }
    assert_badge_invariant(&store);
}

#[test]
fn reset_day_round_trip_preserves_seed_content() {
    let mut store = store();
    let seed = bip_program();

    store.add_entry(3, EntryDraft::note("scratch")).unwrap();
    store.mark_day_complete(3).unwrap();
    store.complete_quiz(3, 20).unwrap();

    store.reset_day(3).unwrap();

    let day = store.day(3).unwrap();
    assert_eq!(day, &seed[3]);
}

#[test]
fn timestamps_are_editable_after_creation() {
    let mut store = store();
    let id = store.add_entry(0, EntryDraft::note("late entry")).unwrap();

    let backdated = fixed_now() - Duration::hours(6);
    assert!(store.update_entry_timestamp(0, id, backdated).unwrap());
    assert_eq!(store.day(0).unwrap().entry(id).unwrap().created_at(), backdated);
}
