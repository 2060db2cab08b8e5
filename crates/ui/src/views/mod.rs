mod class_select;
mod header;
mod quiz;
mod role_select;
mod state;
mod stream_select;
mod subjects;
mod teacher;
mod welcome;

pub use class_select::ClassSelectView;
pub use header::{Header, LanguageSelector};
pub use quiz::QuizView;
pub use role_select::RoleSelectView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use stream_select::StreamSelectView;
pub use subjects::SubjectsView;
pub use teacher::TeacherView;
pub use welcome::WelcomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
