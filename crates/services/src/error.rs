//! Shared error types for the services crate.

use thiserror::Error;

use apex_core::quiz::QuizSessionError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `QuizService` and the controller's quiz actions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz is in progress")]
    NoActiveQuiz,
    #[error(transparent)]
    Session(#[from] QuizSessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `TeacherDashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
