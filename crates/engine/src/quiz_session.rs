use diary_core::model::{QuizQuestion, XP_PER_QUESTION};

use crate::error::EngineError;
use crate::store::DiaryStore;

/// Result of answering a single quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_index: usize },
    /// The current question already has an answer; the selection was ignored.
    AlreadyAnswered,
}

/// An ephemeral, strictly linear run over one day's quiz.
///
/// The session owns the scoring contract: one answer per question, 10 XP
/// per correct answer, submission only after the last question. The
/// presentation layer drives it one command at a time and submits the
/// result back to the store with [`QuizSession::finish`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    day_index: usize,
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<Option<usize>>,
    correct: u32,
}

impl QuizSession {
    /// Starts a session over the given day's quiz.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DayOutOfRange` for an invalid index, or
    /// `EngineError::EmptyQuiz` if the day has no questions.
    pub fn start(store: &DiaryStore, day_index: usize) -> Result<Self, EngineError> {
        let day = store.day(day_index)?;
        if day.quiz().is_empty() {
            return Err(EngineError::EmptyQuiz);
        }

        let questions = day.quiz().to_vec();
        let answers = vec![None; questions.len()];
        Ok(Self {
            day_index,
            questions,
            current: 0,
            answers,
            correct: 0,
        })
    }

    /// The question currently awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Records the selection for the current question.
    ///
    /// A repeat selection for an already-answered question is ignored and
    /// reported as [`AnswerOutcome::AlreadyAnswered`].
    ///
    /// # Errors
    ///
    /// Returns `EngineError::QuizSessionCompleted` after the last question
    /// has been passed, or `EngineError::OptionOutOfBounds` for a
    /// selection outside the question's options.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, EngineError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(EngineError::QuizSessionCompleted);
        };

        if option_index >= question.options().len() {
            return Err(EngineError::OptionOutOfBounds {
                index: option_index,
                count: question.options().len(),
            });
        }

        if self.answers[self.current].is_some() {
            return Ok(AnswerOutcome::AlreadyAnswered);
        }

        self.answers[self.current] = Some(option_index);
        if question.is_correct(option_index) {
            self.correct += 1;
            Ok(AnswerOutcome::Correct)
        } else {
            Ok(AnswerOutcome::Incorrect {
                correct_index: question.correct_index(),
            })
        }
    }

    /// Moves past the current question once it has been answered.
    ///
    /// Returns false (and stays put) while the current question is
    /// unanswered or the session is already complete. No skipping, no
    /// going back.
    pub fn advance(&mut self) -> bool {
        if self.current >= self.questions.len() || self.answers[self.current].is_none() {
            return false;
        }
        self.current += 1;
        true
    }

    /// True once every question has been answered and passed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// XP earned so far: correct answers times 10.
    #[must_use]
    pub fn earned_xp(&self) -> u32 {
        self.correct * XP_PER_QUESTION
    }

    /// XP available from a perfect run.
    #[must_use]
    pub fn max_xp(&self) -> u32 {
        let count = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        count.saturating_mul(XP_PER_QUESTION)
    }

    /// Submits the finished run to the store, consuming the session.
    ///
    /// Returns whether XP was credited (false when the day's quiz was
    /// already completed, mirroring the store's idempotence guard).
    ///
    /// # Errors
    ///
    /// Returns `EngineError::QuizUnfinished` unless every question has
    /// been answered and passed.
    pub fn finish(self, store: &mut DiaryStore) -> Result<bool, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::QuizUnfinished {
                answered: self.answered(),
                total: self.questions.len(),
            });
        }
        store.complete_quiz(self.day_index, self.earned_xp())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use diary_core::program::bip_program;
    use diary_core::time::fixed_clock;

    fn store() -> DiaryStore {
        DiaryStore::with_clock(bip_program(), fixed_clock())
    }

    /// Answers the current question correctly and advances.
    fn ace(session: &mut QuizSession) {
        let correct = session.current_question().unwrap().correct_index();
        assert_eq!(session.answer(correct).unwrap(), AnswerOutcome::Correct);
        assert!(session.advance());
    }

    #[test]
    fn start_rejects_bad_day_index() {
        let store = store();
        let err = QuizSession::start(&store, 7).unwrap_err();
        assert_eq!(err, EngineError::DayOutOfRange { index: 7, len: 5 });
    }

    #[test]
    fn perfect_run_earns_max_xp() {
        let mut store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        assert_eq!(session.max_xp(), 40);

        while !session.is_complete() {
            ace(&mut session);
        }
        assert_eq!(session.earned_xp(), 40);

        assert!(session.finish(&mut store).unwrap());
        assert_eq!(store.day(0).unwrap().xp(), 40);
        assert!(store.day(0).unwrap().is_quiz_completed());
    }

    #[test]
    fn three_of_four_correct_earns_thirty() {
        let mut store = store();
        let mut session = QuizSession::start(&store, 1).unwrap();

        // Miss the first question, ace the rest.
        let question = session.current_question().unwrap();
        let wrong = (question.correct_index() + 1) % question.options().len();
        let outcome = session.answer(wrong).unwrap();
        assert!(matches!(outcome, AnswerOutcome::Incorrect { .. }));
        assert!(session.advance());

        while !session.is_complete() {
            ace(&mut session);
        }

        assert_eq!(session.correct_count(), 3);
        assert_eq!(session.earned_xp(), 30);
        assert!(session.finish(&mut store).unwrap());
        assert_eq!(store.day(1).unwrap().xp(), 30);
    }

    #[test]
    fn repeat_selection_is_ignored() {
        let store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        let correct = session.current_question().unwrap().correct_index();

        assert_eq!(session.answer(correct).unwrap(), AnswerOutcome::Correct);
        // Changing the answer afterwards must not change the score.
        let wrong = (correct + 1) % session.current_question().unwrap().options().len();
        assert_eq!(session.answer(wrong).unwrap(), AnswerOutcome::AlreadyAnswered);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn out_of_bounds_selection_is_rejected() {
        let store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        let count = session.current_question().unwrap().options().len();

        let err = session.answer(count).unwrap_err();
        assert_eq!(err, EngineError::OptionOutOfBounds { index: count, count });
        assert_eq!(session.answered(), 0);
    }

    #[test]
    fn advance_requires_an_answer() {
        let store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        assert!(!session.advance());
        assert!(!session.is_complete());
    }

    #[test]
    fn finish_requires_a_complete_run() {
        let mut store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        ace(&mut session);

        let err = session.finish(&mut store).unwrap_err();
        assert_eq!(err, EngineError::QuizUnfinished { answered: 1, total: 4 });
        assert_eq!(store.day(0).unwrap().xp(), 0);
        assert!(!store.day(0).unwrap().is_quiz_completed());
    }

    #[test]
    fn answering_past_the_end_is_an_error() {
        let store = store();
        let mut session = QuizSession::start(&store, 0).unwrap();
        while !session.is_complete() {
            ace(&mut session);
        }
        let err = session.answer(0).unwrap_err();
        assert_eq!(err, EngineError::QuizSessionCompleted);
    }

    #[test]
    fn second_run_cannot_double_credit() {
        let mut store = store();

        let mut first = QuizSession::start(&store, 0).unwrap();
        while !first.is_complete() {
            ace(&mut first);
        }
        assert!(first.finish(&mut store).unwrap());

        let mut second = QuizSession::start(&store, 0).unwrap();
        while !second.is_complete() {
            ace(&mut second);
        }
        assert!(!second.finish(&mut store).unwrap());
        assert_eq!(store.day(0).unwrap().xp(), 40);
    }
}
