//! Mock classroom shown on the teacher dashboard.

use async_trait::async_trait;
use chrono::NaiveDate;

use apex_core::model::{Student, StudentId, StudentQuizResult, StudentStatus};

use crate::repository::{StorageError, StudentRepository};

/// Serves a fixed set of students. Nothing is ever written back.
#[derive(Debug, Clone)]
pub struct FixtureStudentRepository {
    students: Vec<Student>,
}

impl FixtureStudentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_students(demo_students())
    }

    #[must_use]
    pub fn with_students(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl Default for FixtureStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for FixtureStudentRepository {
    async fn list_students(&self) -> Result<Vec<Student>, StorageError> {
        Ok(self.students.clone())
    }

    async fn get_student(&self, id: StudentId) -> Result<Student, StorageError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}

fn result(subject: &str, score: u32, percentage: u32, day: u32) -> StudentQuizResult {
    StudentQuizResult {
        subject: subject.to_owned(),
        score,
        percentage,
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
    }
}

fn student(
    id: u64,
    name: &str,
    class_label: &str,
    status: StudentStatus,
    progress: u32,
    quiz_results: Vec<StudentQuizResult>,
) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.to_owned(),
        class_label: class_label.to_owned(),
        status,
        progress,
        quiz_results,
    }
}

fn demo_students() -> Vec<Student> {
    vec![
        student(
            1,
            "Arjun Singh",
            "Class 12 - Science (PCM)",
            StudentStatus::InProgress,
            75,
            vec![
                result("Physics", 8, 80, 15),
                result("Chemistry", 7, 70, 14),
                result("Mathematics", 9, 90, 13),
            ],
        ),
        student(
            2,
            "Priya Sharma",
            "Class 11 - Commerce",
            StudentStatus::Completed,
            100,
            vec![
                result("Economics", 9, 90, 15),
                result("Business Studies", 8, 80, 14),
                result("Accountancy", 7, 70, 13),
            ],
        ),
        student(
            3,
            "Rajveer Kaur",
            "Class 10 - Science",
            StudentStatus::InProgress,
            45,
            vec![result("Physics", 6, 60, 15), result("Chemistry", 7, 70, 14)],
        ),
        student(
            4,
            "Manpreet Singh",
            "Class 9 - Commerce",
            StudentStatus::NotStarted,
            0,
            Vec::new(),
        ),
        student(
            5,
            "Simran Kaur",
            "Class 12 - Humanities",
            StudentStatus::InProgress,
            85,
            vec![
                result("History", 9, 90, 15),
                result("Geography", 8, 80, 14),
                result("Political Science", 7, 70, 13),
            ],
        ),
        student(
            6,
            "Harpreet Singh",
            "Class 11 - Science (PCB)",
            StudentStatus::InProgress,
            60,
            vec![result("Biology", 8, 80, 15), result("Chemistry", 6, 60, 14)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_six_students_in_order() {
        let repo = FixtureStudentRepository::new();
        let names: Vec<String> = repo
            .list_students()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            [
                "Arjun Singh",
                "Priya Sharma",
                "Rajveer Kaur",
                "Manpreet Singh",
                "Simran Kaur",
                "Harpreet Singh"
            ]
        );
    }

    #[tokio::test]
    async fn looks_up_by_id() {
        let repo = FixtureStudentRepository::new();
        let student = repo.get_student(StudentId::new(4)).await.unwrap();
        assert_eq!(student.status, StudentStatus::NotStarted);
        assert!(student.quiz_results.is_empty());

        let missing = repo.get_student(StudentId::new(99)).await;
        assert!(matches!(missing, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn result_dates_are_january_2024() {
        let repo = FixtureStudentRepository::new();
        let arjun = repo.get_student(StudentId::new(1)).await.unwrap();
        assert_eq!(
            arjun.quiz_results[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }
}
