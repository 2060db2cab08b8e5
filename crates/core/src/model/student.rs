use chrono::NaiveDate;

use crate::model::ids::StudentId;
use crate::quiz::rounded_ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl StudentStatus {
    /// Key into the localization table, if the status has one.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "inProgress",
            Self::NotStarted => "notStarted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentQuizResult {
    pub subject: String,
    pub score: u32,
    pub percentage: u32,
    pub date: NaiveDate,
}

/// A student record shown on the teacher dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub class_label: String,
    pub status: StudentStatus,
    pub progress: u32,
    pub quiz_results: Vec<StudentQuizResult>,
}

impl Student {
    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.quiz_results.len()
    }

    /// Rounded mean of quiz percentages; 0 without results.
    #[must_use]
    pub fn average_percentage(&self) -> u32 {
        let sum: u32 = self.quiz_results.iter().map(|r| r.percentage).sum();
        let count = u32::try_from(self.quiz_results.len()).unwrap_or(u32::MAX);
        rounded_ratio(sum, count)
    }
}
