#![forbid(unsafe_code)]

pub mod fixtures;
pub mod repository;
pub mod result_log;
pub mod sqlite;

pub use repository::{KeyValueStore, Storage, StorageError, StudentRepository};
pub use result_log::{QUIZ_RESULTS_KEY, QuizResultLog};
