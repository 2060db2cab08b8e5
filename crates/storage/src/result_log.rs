use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{info, warn};

use apex_core::model::QuizResultRecord;

use crate::repository::{KeyValueStore, StorageError};

/// Storage key holding the JSON array of quiz results.
pub const QUIZ_RESULTS_KEY: &str = "apexmind_quiz_results";

/// Append-only log of completed quizzes stored under [`QUIZ_RESULTS_KEY`].
///
/// Each append reads the whole array, pushes one record and writes it back.
/// Earlier entries are copied as raw JSON and never re-encoded.
/// A missing or unparseable value reads as an empty log.
#[derive(Clone)]
pub struct QuizResultLog {
    store: Arc<dyn KeyValueStore>,
    write_lock: Arc<Mutex<()>>,
}

impl QuizResultLog {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// All records, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    pub async fn load(&self) -> Result<Vec<QuizResultRecord>, StorageError> {
        let raw = self.store.get(QUIZ_RESULTS_KEY).await?;
        Ok(decode(raw.as_deref()))
    }

    /// Appends `record` and returns the new log length.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log cannot be read, encoded or written.
    pub async fn append(&self, record: &QuizResultRecord) -> Result<usize, StorageError> {
        let _guard = self.write_lock.lock().await;

        let raw = self.store.get(QUIZ_RESULTS_KEY).await?;
        let mut entries = stored_entries(raw.as_deref());
        let value =
            serde_json::to_value(record).map_err(|e| StorageError::Serialization(e.to_string()))?;
        entries.push(value);
        let encoded = serde_json::to_string(&entries)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.store.set(QUIZ_RESULTS_KEY, &encoded).await?;

        info!(
            subject = %record.subject,
            score = record.score,
            total = record.total_questions,
            entries = entries.len(),
            "quiz result saved"
        );
        Ok(entries.len())
    }
}

/// Earlier entries as stored, so an append copies them through untouched.
fn stored_entries(raw: Option<&str>) -> Vec<Value> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!(key = QUIZ_RESULTS_KEY, "stored quiz results are not an array; replacing");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, key = QUIZ_RESULTS_KEY, "stored quiz results are corrupt; replacing");
            Vec::new()
        }
    }
}

fn decode(raw: Option<&str>) -> Vec<QuizResultRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(err) => {
            warn!(error = %err, key = QUIZ_RESULTS_KEY, "stored quiz results are corrupt; treating as empty");
            Vec::new()
        }
    }
}
