use std::sync::Arc;

use apex_core::model::{Student, StudentId, StudentStatus};
use apex_core::quiz::rounded_ratio;
use storage::repository::{StorageError, StudentRepository};

use crate::error::DashboardError;

/// Headline numbers across the whole class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOverview {
    pub total_students: usize,
    pub completed: usize,
    pub average_progress: u32,
}

/// One student's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub student: Student,
    pub average_percentage: u32,
    pub quiz_count: usize,
}

/// Read-only views over the student fixture.
#[derive(Clone)]
pub struct TeacherDashboardService {
    students: Arc<dyn StudentRepository>,
}

impl TeacherDashboardService {
    #[must_use]
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    /// # Errors
    ///
    /// Returns `DashboardError` if the student source cannot be read.
    pub async fn students(&self) -> Result<Vec<Student>, DashboardError> {
        Ok(self.students.list_students().await?)
    }

    /// Totals and the rounded mean progress; 0 when there are no students.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` if the student source cannot be read.
    pub async fn overview(&self) -> Result<DashboardOverview, DashboardError> {
        let students = self.students.list_students().await?;
        Ok(overview_of(&students))
    }

    /// `None` when no student has `id`.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` for backend failures other than a missing id.
    pub async fn student_summary(
        &self,
        id: StudentId,
    ) -> Result<Option<StudentSummary>, DashboardError> {
        let student = match self.students.get_student(id).await {
            Ok(student) => student,
            Err(StorageError::NotFound) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(StudentSummary {
            average_percentage: student.average_percentage(),
            quiz_count: student.quiz_count(),
            student,
        }))
    }
}

#[must_use]
pub fn overview_of(students: &[Student]) -> DashboardOverview {
    let completed = students
        .iter()
        .filter(|s| s.status == StudentStatus::Completed)
        .count();
    let progress_sum: u32 = students.iter().map(|s| s.progress).sum();
    let count = u32::try_from(students.len()).unwrap_or(u32::MAX);
    DashboardOverview {
        total_students: students.len(),
        completed,
        average_progress: rounded_ratio(progress_sum, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::fixtures::FixtureStudentRepository;

    fn service() -> TeacherDashboardService {
        TeacherDashboardService::new(Arc::new(FixtureStudentRepository::new()))
    }

    #[tokio::test]
    async fn fixture_overview() {
        let overview = service().overview().await.unwrap();
        assert_eq!(
            overview,
            DashboardOverview {
                total_students: 6,
                completed: 1,
                average_progress: 61,
            }
        );
    }

    #[tokio::test]
    async fn empty_class_averages_zero() {
        let service =
            TeacherDashboardService::new(Arc::new(FixtureStudentRepository::with_students(Vec::new())));
        let overview = service.overview().await.unwrap();
        assert_eq!(overview.total_students, 0);
        assert_eq!(overview.average_progress, 0);
    }

    #[tokio::test]
    async fn student_summary_averages_quiz_results() {
        let summary = service()
            .student_summary(StudentId::new(1))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.student.name, "Arjun Singh");
        assert_eq!(summary.average_percentage, 80);
        assert_eq!(summary.quiz_count, 3);

        let harpreet = service()
            .student_summary(StudentId::new(6))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(harpreet.average_percentage, 70);
    }

    #[tokio::test]
    async fn student_without_results_averages_zero() {
        let summary = service()
            .student_summary(StudentId::new(4))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(summary.average_percentage, 0);
        assert_eq!(summary.quiz_count, 0);
    }

    #[tokio::test]
    async fn unknown_student_is_none() {
        assert!(service()
            .student_summary(StudentId::new(42))
            .await
            .unwrap()
            .is_none());
    }
}
