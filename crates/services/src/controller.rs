//! Single owner of the navigation state and the active quiz.
//!
//! Views hold a snapshot of `AppController` and call exactly one action per
//! input event. Nothing outside this type mutates `AppState`.
//!
//! Advancing may save a result, so it is split in two: [`PendingAdvance`]
//! runs the save on a copy of the session without borrowing the controller,
//! and [`AppController::apply_advance`] lands the step only if the quiz is
//! still the one it started from.

use std::sync::Arc;

use tracing::debug;

use apex_core::model::{ClassLevel, Stream, SubStream, Subject};
use apex_core::navigation::{AppState, Role, Screen};
use apex_core::quiz::{Advance, QuizOutcome, QuizSession};

use crate::error::QuizError;
use crate::quiz_service::QuizService;

#[derive(Clone)]
pub struct AppController {
    state: AppState,
    quiz: Option<QuizSession>,
    quiz_service: Arc<QuizService>,
}

impl AppController {
    #[must_use]
    pub fn new(quiz_service: Arc<QuizService>) -> Self {
        Self {
            state: AppState::default(),
            quiz: None,
            quiz_service,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    /// The running quiz, present only while on the quiz screen.
    #[must_use]
    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    pub fn get_started(&mut self) {
        self.state.get_started();
    }

    pub fn select_role(&mut self, role: Role) {
        self.state.select_role(role);
    }

    pub fn select_class(&mut self, class: ClassLevel) {
        self.state.select_class(class);
    }

    pub fn select_stream(&mut self, stream: Stream, sub: Option<SubStream>) {
        self.state.select_stream(stream, sub);
    }

    pub fn select_sub_stream(&mut self, sub: SubStream) {
        self.state.select_sub_stream(sub);
    }

    /// Enters the quiz screen with a fresh session for `subject`.
    pub fn take_quiz(&mut self, subject: Subject) {
        self.state.take_quiz(subject);
        if self.state.screen() == Screen::Quiz {
            self.quiz = Some(self.quiz_service.start(subject));
        }
    }

    /// Leaving the quiz screen discards the session without saving.
    pub fn back(&mut self) {
        self.state.back();
        self.drop_quiz_off_screen();
    }

    pub fn reset(&mut self) {
        self.state.reset();
        self.drop_quiz_off_screen();
    }

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────────
    //

    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuiz` off the quiz screen, or a session error.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        let session = self.quiz.as_mut().ok_or(QuizError::NoActiveQuiz)?;
        self.quiz_service.select_answer(session, option)
    }

    /// Next question, or completion with the result persisted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when there is no quiz, it is complete, or saving fails.
    pub async fn advance(&mut self) -> Result<Option<QuizOutcome>, QuizError> {
        let advanced = self.begin_advance()?.run().await?;
        let outcome = advanced.outcome();
        self.apply_advance(advanced);
        Ok(outcome)
    }

    /// Captures the current session so the advance can run while the
    /// controller stays free for other actions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuiz` off the quiz screen.
    pub fn begin_advance(&self) -> Result<PendingAdvance, QuizError> {
        let session = self.quiz.clone().ok_or(QuizError::NoActiveQuiz)?;
        Ok(PendingAdvance {
            session,
            quiz_service: Arc::clone(&self.quiz_service),
        })
    }

    /// Lands a finished advance. Returns `false` and leaves everything as is
    /// when the user has since left the quiz or changed the session.
    pub fn apply_advance(&mut self, advanced: AdvancedQuiz) -> bool {
        let on_quiz = self.state.screen() == Screen::Quiz;
        match self.quiz.as_mut().filter(|_| on_quiz) {
            Some(session) if *session == advanced.from => {
                *session = advanced.to;
                true
            }
            _ => {
                debug!("stale quiz advance ignored");
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError` when there is no quiz or it is complete.
    pub fn retreat(&mut self) -> Result<(), QuizError> {
        let session = self.quiz.as_mut().ok_or(QuizError::NoActiveQuiz)?;
        self.quiz_service.retreat(session)
    }

    /// # Errors
    ///
    /// Returns `QuizError::NoActiveQuiz` off the quiz screen.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        let session = self.quiz.as_mut().ok_or(QuizError::NoActiveQuiz)?;
        self.quiz_service.restart(session);
        Ok(())
    }

    fn drop_quiz_off_screen(&mut self) {
        if self.state.screen() != Screen::Quiz && self.quiz.take().is_some() {
            debug!("quiz session discarded");
        }
    }
}

/// An advance detached from the controller; see [`AppController::begin_advance`].
pub struct PendingAdvance {
    session: QuizSession,
    quiz_service: Arc<QuizService>,
}

impl PendingAdvance {
    /// Advances a copy of the session, saving the result on the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the quiz is complete or saving fails.
    pub async fn run(self) -> Result<AdvancedQuiz, QuizError> {
        let mut to = self.session.clone();
        let step = self.quiz_service.advance(&mut to).await?;
        Ok(AdvancedQuiz {
            from: self.session,
            to,
            step,
        })
    }
}

/// Session before and after one advance.
#[derive(Debug, Clone)]
pub struct AdvancedQuiz {
    from: QuizSession,
    to: QuizSession,
    step: Advance,
}

impl AdvancedQuiz {
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        match self.step {
            Advance::Next => None,
            Advance::Completed(outcome) => Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_core::catalog::{self, subjects};
    use apex_core::model::ClassLevelId;
    use apex_core::time::fixed_clock;
    use async_trait::async_trait;
    use storage::QuizResultLog;
    use storage::repository::{InMemoryRepository, KeyValueStore, StorageError};
    use tokio::sync::Notify;

    fn controller() -> AppController {
        let log = QuizResultLog::new(Arc::new(InMemoryRepository::new()));
        AppController::new(Arc::new(QuizService::new(fixed_clock(), log)))
    }

    fn on_subjects(grade: u8) -> AppController {
        let mut c = controller();
        c.get_started();
        c.select_role(Role::Student);
        let class = catalog::find_class(ClassLevelId::new(grade)).unwrap().clone();
        c.select_class(class);
        c
    }

    #[tokio::test]
    async fn quiz_flow_completes_and_persists() {
        let mut c = on_subjects(3);
        c.take_quiz(subjects::MATHEMATICS);
        assert_eq!(c.screen(), Screen::Quiz);

        let mut outcome = None;
        for answer in [1, 2, 1, 2, 0] {
            c.select_answer(answer).unwrap();
            outcome = c.advance().await.unwrap();
        }
        assert_eq!(outcome.map(|o| o.percentage), Some(100));
        assert!(c.quiz().unwrap().is_complete());

        let history = c.quiz_service().history().await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn back_discards_an_unfinished_quiz() {
        let mut c = on_subjects(3);
        c.take_quiz(subjects::SCIENCE);
        c.select_answer(0).unwrap();
        c.advance().await.unwrap();

        c.back();
        assert_eq!(c.screen(), Screen::Subjects);
        assert!(c.quiz().is_none());
        assert!(c.quiz_service().history().await.unwrap().is_empty());
        assert!(matches!(c.select_answer(0), Err(QuizError::NoActiveQuiz)));
    }

    #[test]
    fn reset_clears_quiz_and_selections() {
        let mut c = on_subjects(7);
        c.take_quiz(subjects::HINDI);
        c.reset();
        assert_eq!(c.screen(), Screen::Welcome);
        assert!(c.quiz().is_none());
        assert_eq!(c.state(), &AppState::default());
    }

    #[test]
    fn retaking_starts_a_fresh_session() {
        let mut c = on_subjects(2);
        c.take_quiz(subjects::ENGLISH);
        c.select_answer(3).unwrap();
        c.back();
        c.take_quiz(subjects::ENGLISH);
        assert_eq!(c.quiz().unwrap().current_answer(), None);
    }

    /// Holds every `set` until released, so tests can act mid-save.
    struct GatedStore {
        inner: InMemoryRepository,
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl KeyValueStore for GatedStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entered.notify_one();
            self.release.notified().await;
            self.inner.set(key, value).await
        }
    }

    fn gated_controller() -> (AppController, Arc<Notify>, Arc<Notify>) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let store = GatedStore {
            inner: InMemoryRepository::new(),
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        };
        let log = QuizResultLog::new(Arc::new(store));
        let mut c = AppController::new(Arc::new(QuizService::new(fixed_clock(), log)));
        c.get_started();
        c.select_role(Role::Student);
        c.select_class(catalog::find_class(ClassLevelId::new(3)).unwrap().clone());
        c.take_quiz(subjects::MATHEMATICS);
        (c, entered, release)
    }

    async fn to_last_question(c: &mut AppController) {
        for answer in [1, 2, 1, 2] {
            c.select_answer(answer).unwrap();
            c.advance().await.unwrap();
        }
        c.select_answer(0).unwrap();
    }

    #[tokio::test]
    async fn reset_during_save_is_not_undone() {
        let (mut c, entered, release) = gated_controller();
        to_last_question(&mut c).await;

        let pending = c.begin_advance().unwrap();
        let (advanced, ()) = tokio::join!(pending.run(), async {
            entered.notified().await;
            c.reset();
            release.notify_one();
        });
        let advanced = advanced.unwrap();
        assert!(advanced.outcome().is_some());

        assert!(!c.apply_advance(advanced));
        assert_eq!(c.screen(), Screen::Welcome);
        assert!(c.quiz().is_none());
        assert_eq!(c.quiz_service().history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn answer_change_during_save_is_not_undone() {
        let (mut c, entered, release) = gated_controller();
        to_last_question(&mut c).await;

        let pending = c.begin_advance().unwrap();
        let (advanced, ()) = tokio::join!(pending.run(), async {
            entered.notified().await;
            c.select_answer(3).unwrap();
            release.notify_one();
        });

        assert!(!c.apply_advance(advanced.unwrap()));
        let session = c.quiz().unwrap();
        assert!(!session.is_complete());
        assert_eq!(session.current_answer(), Some(3));
    }

    #[tokio::test]
    async fn undisturbed_advance_is_applied() {
        let (mut c, entered, release) = gated_controller();
        to_last_question(&mut c).await;

        let pending = c.begin_advance().unwrap();
        let (advanced, ()) = tokio::join!(pending.run(), async {
            entered.notified().await;
            release.notify_one();
        });

        assert!(c.apply_advance(advanced.unwrap()));
        assert!(c.quiz().unwrap().is_complete());
        assert_eq!(c.screen(), Screen::Quiz);
    }
}
