use apex_core::Locale;
use apex_core::i18n::translate;
use apex_core::model::{Student, StudentId, StudentQuizResult, StudentStatus};
use services::StudentSummary;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: StudentId,
    pub name: String,
    pub class_label: String,
    pub progress: u32,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultRowVm {
    pub subject: String,
    pub date_str: String,
    pub score_str: String,
    pub percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentDetailVm {
    pub name: String,
    pub class_label: String,
    pub progress: u32,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub average_percentage: u32,
    pub quiz_count: usize,
    pub results: Vec<QuizResultRowVm>,
}

fn status_class(status: StudentStatus) -> &'static str {
    match status {
        StudentStatus::Completed => "status-completed",
        StudentStatus::InProgress => "status-in-progress",
        StudentStatus::NotStarted => "status-not-started",
    }
}

fn status_label(status: StudentStatus, locale: Locale) -> &'static str {
    translate(locale, status.label_key())
}

impl StudentRowVm {
    #[must_use]
    pub fn from_student(student: &Student, locale: Locale) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            class_label: student.class_label.clone(),
            progress: student.progress,
            status_label: status_label(student.status, locale),
            status_class: status_class(student.status),
        }
    }
}

impl From<&StudentQuizResult> for QuizResultRowVm {
    fn from(result: &StudentQuizResult) -> Self {
        Self {
            subject: result.subject.clone(),
            date_str: format_date(result.date),
            // Fixture scores are out of ten.
            score_str: format!("{}/10", result.score),
            percentage: result.percentage,
        }
    }
}

#[must_use]
pub fn map_student_rows(students: &[Student], locale: Locale) -> Vec<StudentRowVm> {
    students
        .iter()
        .map(|s| StudentRowVm::from_student(s, locale))
        .collect()
}

#[must_use]
pub fn map_student_detail(summary: &StudentSummary, locale: Locale) -> StudentDetailVm {
    let student = &summary.student;
    StudentDetailVm {
        name: student.name.clone(),
        class_label: student.class_label.clone(),
        progress: student.progress,
        status_label: status_label(student.status, locale),
        status_class: status_class(student.status),
        average_percentage: summary.average_percentage,
        quiz_count: summary.quiz_count,
        results: student.quiz_results.iter().map(QuizResultRowVm::from).collect(),
    }
}
