//! Pure state of one quiz attempt.
//!
//! `QuizSession` never touches storage. The services layer drives it and
//! persists a result when the last question is advanced past.

use thiserror::Error;
use tracing::debug;

use crate::model::{Question, Subject};
use crate::questions;

/// Minimum percentage labeled as "passed". Display only.
pub const PASS_PERCENTAGE: u32 = 60;

/// `round(num / den)` with halves rounded up; 0 when `den` is 0.
#[must_use]
pub fn rounded_ratio(num: u32, den: u32) -> u32 {
    if den == 0 {
        return 0;
    }
    let (num, den) = (u64::from(num), u64::from(den));
    u32::try_from((2 * num + den) / (2 * den)).unwrap_or(u32::MAX)
}

/// `round(score / total * 100)`.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    rounded_ratio(score.saturating_mul(100), total)
}

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub passed: bool,
}

impl QuizOutcome {
    #[must_use]
    pub fn tally(score: u32, total: u32) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            passed: percentage >= PASS_PERCENTAGE,
        }
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total.saturating_sub(self.score)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Complete(QuizOutcome),
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Completed(QuizOutcome),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("option {index} is out of range for a question with {len} options")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("quiz is already complete")]
    AlreadyComplete,
    #[error("quiz has no questions")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    subject: Subject,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<usize>>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Starts a quiz over the registered set for `subject` (mathematics if none).
    #[must_use]
    pub fn start(subject: Subject) -> Self {
        let questions = questions::questions_for(subject.id()).to_vec();
        debug!(subject = %subject.id(), count = questions.len(), "quiz started");
        Self::build(subject, questions)
    }

    /// Starts a quiz over an explicit question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Empty` when `questions` is empty.
    pub fn from_questions(
        subject: Subject,
        questions: Vec<Question>,
    ) -> Result<Self, QuizSessionError> {
        if questions.is_empty() {
            return Err(QuizSessionError::Empty);
        }
        Ok(Self::build(subject, questions))
    }

    fn build(subject: Subject, questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self {
            subject,
            questions,
            current: 0,
            answers,
            phase: QuizPhase::Answering,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers[self.current]
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, QuizPhase::Complete(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.phase {
            QuizPhase::Complete(outcome) => Some(outcome),
            QuizPhase::Answering => None,
        }
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Whether the "Next" control should be enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_complete() && self.current_answer().is_some()
    }

    /// Position through the quiz, counting the current question as reached.
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let reached = u32::try_from(self.current + 1).unwrap_or(u32::MAX);
        percentage(reached, self.total_u32())
    }

    /// Score of the answers recorded so far. Unanswered questions count as wrong.
    #[must_use]
    pub fn tally(&self) -> QuizOutcome {
        let score = self
            .questions
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| question.is_correct(**answer))
            .count();
        QuizOutcome::tally(u32::try_from(score).unwrap_or(u32::MAX), self.total_u32())
    }

    /// Records `option` as the answer to the current question.
    ///
    /// # Errors
    ///
    /// Fails when the option index is out of range or the quiz is complete.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizSessionError> {
        self.ensure_answering()?;
        let len = self.current_question().options().len();
        if option >= len {
            return Err(QuizSessionError::OptionOutOfRange { index: option, len });
        }
        self.answers[self.current] = Some(option);
        Ok(())
    }

    /// Moves to the next question, or completes the quiz on the last one.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyComplete` once the quiz is complete.
    pub fn advance(&mut self) -> Result<Advance, QuizSessionError> {
        self.ensure_answering()?;
        if !self.is_last() {
            self.current += 1;
            return Ok(Advance::Next);
        }
        let outcome = self.tally();
        self.phase = QuizPhase::Complete(outcome);
        debug!(
            subject = %self.subject.id(),
            score = outcome.score,
            total = outcome.total,
            "quiz complete"
        );
        Ok(Advance::Completed(outcome))
    }

    /// Moves back one question. No-op on the first question.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyComplete` once the quiz is complete.
    pub fn retreat(&mut self) -> Result<(), QuizSessionError> {
        self.ensure_answering()?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    /// Back to the first question with no answers, keeping the question list.
    pub fn restart(&mut self) {
        self.current = 0;
        self.answers.fill(None);
        self.phase = QuizPhase::Answering;
        debug!(subject = %self.subject.id(), "quiz restarted");
    }

    fn ensure_answering(&self) -> Result<(), QuizSessionError> {
        if self.is_complete() {
            Err(QuizSessionError::AlreadyComplete)
        } else {
            Ok(())
        }
    }

    fn total_u32(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::subjects::{HISTORY, MATHEMATICS, PHYSICS};

    fn run(subject: Subject, answers: &[usize]) -> QuizOutcome {
        let mut session = QuizSession::start(subject);
        let mut last = None;
        for &answer in answers {
            session.select_answer(answer).unwrap();
            last = Some(session.advance().unwrap());
        }
        match last {
            Some(Advance::Completed(outcome)) => outcome,
            other => panic!("quiz did not complete: {other:?}"),
        }
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(rounded_ratio(365, 6), 61);
    }

    #[test]
    fn mathematics_all_correct_scores_full_marks() {
        let outcome = run(MATHEMATICS, &[1, 2, 1, 2, 0]);
        assert_eq!(outcome.score, 5);
        assert_eq!(outcome.percentage, 100);
        assert!(outcome.passed);
    }

    #[test]
    fn physics_all_b_scores_one() {
        let outcome = run(PHYSICS, &[1, 1, 1, 1, 1]);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.percentage, 20);
        assert!(!outcome.passed);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let outcome = run(MATHEMATICS, &[3, 3, 3, 3, 3]);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.percentage, 0);
        assert_eq!(outcome.incorrect(), 5);
    }

    #[test]
    fn unregistered_subject_uses_fallback_set() {
        let session = QuizSession::start(HISTORY);
        assert_eq!(session.total(), 5);
        assert_eq!(session.current_question().prompt(), "What is 15 + 27?");
        assert_eq!(session.subject().name(), "History");
    }

    #[test]
    fn unanswered_questions_count_as_wrong() {
        let mut session = QuizSession::start(MATHEMATICS);
        session.select_answer(1).unwrap();
        for _ in 0..4 {
            session.advance().unwrap();
        }
        let Advance::Completed(outcome) = session.advance().unwrap() else {
            panic!("expected completion");
        };
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.percentage, 20);
    }

    #[test]
    fn select_overwrites_without_advancing() {
        let mut session = QuizSession::start(MATHEMATICS);
        assert!(!session.can_advance());
        session.select_answer(0).unwrap();
        session.select_answer(1).unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_answer(), Some(1));
        assert!(session.can_advance());
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = QuizSession::start(MATHEMATICS);
        assert_eq!(
            session.select_answer(4),
            Err(QuizSessionError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(session.current_answer(), None);
    }

    #[test]
    fn retreat_stops_at_first_question() {
        let mut session = QuizSession::start(MATHEMATICS);
        session.retreat().unwrap();
        assert_eq!(session.current_index(), 0);

        session.select_answer(1).unwrap();
        session.advance().unwrap();
        session.advance().unwrap();
        session.retreat().unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.progress_percent(), 40);
    }

    #[test]
    fn complete_session_rejects_further_moves() {
        let mut session = QuizSession::start(MATHEMATICS);
        for _ in 0..5 {
            session.advance().unwrap();
        }
        assert!(session.is_complete());
        assert_eq!(session.advance(), Err(QuizSessionError::AlreadyComplete));
        assert_eq!(session.retreat(), Err(QuizSessionError::AlreadyComplete));
        assert_eq!(session.select_answer(0), Err(QuizSessionError::AlreadyComplete));
    }

    #[test]
    fn restart_after_completion_returns_to_first_question() {
        let mut session = QuizSession::start(PHYSICS);
        for answer in [0, 1, 0, 2, 2] {
            session.select_answer(answer).unwrap();
            session.advance().unwrap();
        }
        assert_eq!(session.outcome().map(|o| o.score), Some(5));

        session.restart();
        assert_eq!(session.phase(), QuizPhase::Answering);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.outcome(), None);
        assert_eq!(session.total(), 5);
    }

    #[test]
    fn empty_question_list_is_rejected() {
        assert_eq!(
            QuizSession::from_questions(MATHEMATICS, Vec::new()),
            Err(QuizSessionError::Empty)
        );
    }
}
