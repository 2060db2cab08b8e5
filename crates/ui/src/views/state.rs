use dioxus::prelude::*;
use services::{DashboardError, QuizError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    SaveFailed,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Unknown => "Something went wrong. Please try again.",
            Self::NotFound => "Nothing to show here.",
            Self::SaveFailed => "Your result could not be saved. Please try again.",
        }
    }
}

impl From<&QuizError> for ViewError {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::Storage(_) => Self::SaveFailed,
            _ => Self::Unknown,
        }
    }
}

impl From<&DashboardError> for ViewError {
    fn from(_: &DashboardError) -> Self {
        Self::Unknown
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apex_core::quiz::QuizSessionError;
    use storage::StorageError;

    #[test]
    fn storage_failures_map_to_save_failed() {
        let err = QuizError::Storage(StorageError::Connection("offline".into()));
        assert_eq!(ViewError::from(&err), ViewError::SaveFailed);
    }

    #[test]
    fn session_failures_map_to_unknown() {
        let err = QuizError::Session(QuizSessionError::AlreadyComplete);
        assert_eq!(ViewError::from(&err), ViewError::Unknown);
    }
}
