use std::sync::Arc;

use storage::QuizResultLog;
use storage::repository::Storage;

use crate::Clock;
use crate::controller::AppController;
use crate::demo::DemoProgress;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::teacher_service::TeacherDashboardService;

/// Assembles the app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    teacher: Arc<TeacherDashboardService>,
    demo: Arc<DemoProgress>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, DemoProgress::from_os_rng()))
    }

    /// Services over volatile storage. Results are lost on exit.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, DemoProgress::from_os_rng())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, demo: DemoProgress) -> Self {
        let results = QuizResultLog::new(Arc::clone(&storage.kv));
        Self {
            quiz: Arc::new(QuizService::new(clock, results)),
            teacher: Arc::new(TeacherDashboardService::new(Arc::clone(&storage.students))),
            demo: Arc::new(demo),
        }
    }

    /// A controller positioned on the welcome screen.
    #[must_use]
    pub fn controller(&self) -> AppController {
        AppController::new(Arc::clone(&self.quiz))
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn teacher(&self) -> Arc<TeacherDashboardService> {
        Arc::clone(&self.teacher)
    }

    #[must_use]
    pub fn demo(&self) -> Arc<DemoProgress> {
        Arc::clone(&self.demo)
    }
}
