use std::sync::Arc;

use apex_core::Locale;
use services::{AppController, DemoProgress, QuizService, TeacherDashboardService};

pub trait UiApp: Send + Sync {
    fn initial_locale(&self) -> Locale;

    fn quiz_service(&self) -> Arc<QuizService>;
    fn teacher_dashboard(&self) -> Arc<TeacherDashboardService>;
    fn demo_progress(&self) -> Arc<DemoProgress>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_locale: Locale,

    quiz_service: Arc<QuizService>,
    teacher_dashboard: Arc<TeacherDashboardService>,
    demo_progress: Arc<DemoProgress>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_locale: app.initial_locale(),
            quiz_service: app.quiz_service(),
            teacher_dashboard: app.teacher_dashboard(),
            demo_progress: app.demo_progress(),
        }
    }

    #[must_use]
    pub fn initial_locale(&self) -> Locale {
        self.initial_locale
    }

    /// A fresh controller on the welcome screen, sharing this context's quiz service.
    #[must_use]
    pub fn new_controller(&self) -> AppController {
        AppController::new(Arc::clone(&self.quiz_service))
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn teacher_dashboard(&self) -> Arc<TeacherDashboardService> {
        Arc::clone(&self.teacher_dashboard)
    }

    #[must_use]
    pub fn demo_progress(&self) -> Arc<DemoProgress> {
        Arc::clone(&self.demo_progress)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
