use apex_core::model::{QuizResultRecord, Subject};
use apex_core::quiz::{Advance, QuizSession};
use apex_core::time::Clock;
use storage::QuizResultLog;

use crate::error::QuizError;

/// Runs quiz sessions and persists a result when one completes.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    results: QuizResultLog,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, results: QuizResultLog) -> Self {
        Self { clock, results }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Fresh session over the fixed question set for `subject`.
    #[must_use]
    pub fn start(&self, subject: Subject) -> QuizSession {
        QuizSession::start(subject)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` for an out-of-range option or a complete quiz.
    pub fn select_answer(&self, session: &mut QuizSession, option: usize) -> Result<(), QuizError> {
        session.select_answer(option)?;
        Ok(())
    }

    /// Advances the session; past the last question the result is appended
    /// to the log before the session is marked complete.
    ///
    /// If the append fails the session stays on the last question so the
    /// user can retry.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` once complete, or `QuizError::Storage`
    /// if the result cannot be saved.
    pub async fn advance(&self, session: &mut QuizSession) -> Result<Advance, QuizError> {
        if session.is_last() && !session.is_complete() {
            let outcome = session.tally();
            let record = QuizResultRecord::new(session.subject().name(), &outcome, self.clock.now());
            self.results.append(&record).await?;
        }
        Ok(session.advance()?)
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` once the quiz is complete.
    pub fn retreat(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        session.retreat()?;
        Ok(())
    }

    pub fn restart(&self, session: &mut QuizSession) {
        session.restart();
    }

    /// Every saved result, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Storage` if the backend cannot be read.
    pub async fn history(&self) -> Result<Vec<QuizResultRecord>, QuizError> {
        Ok(self.results.load().await?)
    }
}
