use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::QuizOutcome;

/// One persisted outcome of a completed quiz attempt.
///
/// Serialized with camelCase keys so the stored log reads
/// `{"subject","score","totalQuestions","percentage","date"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRecord {
    pub subject: String,
    pub score: u32,
    pub total_questions: u32,
    pub percentage: u32,
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

impl QuizResultRecord {
    #[must_use]
    pub fn new(subject: impl Into<String>, outcome: &QuizOutcome, date: DateTime<Utc>) -> Self {
        Self {
            subject: subject.into(),
            score: outcome.score,
            total_questions: outcome.total,
            percentage: outcome.percentage,
            date,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.percentage >= crate::quiz::PASS_PERCENTAGE
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let outcome = QuizOutcome::tally(4, 5);
        let record = QuizResultRecord::new("Physics", &outcome, fixed_now());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["subject"], "Physics");
        assert_eq!(json["score"], 4);
        assert_eq!(json["totalQuestions"], 5);
        assert_eq!(json["percentage"], 80);
        assert_eq!(json["date"], "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn reads_dates_without_fraction() {
        let raw = r#"{"subject":"Mathematics","score":3,"totalQuestions":5,"percentage":60,"date":"2024-01-15T08:30:00Z"}"#;
        let record: QuizResultRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.total_questions, 5);
        assert!(record.passed());
        assert_eq!(record.date.to_rfc3339(), "2024-01-15T08:30:00+00:00");
    }
}
