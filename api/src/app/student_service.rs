//! Student service
//!
//! Handles student registration and refreshing their LeetCode stats.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::app::PlatformStatsService;
use crate::domain::entities::{NewStudent, PlatformStats, Student, StudentId};
use crate::domain::ports::{LeetCodeClient, PlatformStatsRepository, StudentRepository};
use crate::error::{AppError, DomainError};

/// A student together with their stats, if any were fetched yet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithStats {
    #[serde(flatten)]
    pub student: Student,
    pub platform_stats: Option<PlatformStats>,
}

/// Outcome of a registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub student: Student,
    pub stats: Option<PlatformStats>,
    /// Why the initial fetch failed; the student is registered regardless
    pub stats_error: Option<String>,
}

/// Service for managing students
pub struct StudentService<SR, PR, LC>
where
    SR: StudentRepository,
    PR: PlatformStatsRepository,
    LC: LeetCodeClient,
{
    students: Arc<SR>,
    stats: Arc<PlatformStatsService<SR, PR, LC>>,
}

impl<SR, PR, LC> StudentService<SR, PR, LC>
where
    SR: StudentRepository,
    PR: PlatformStatsRepository,
    LC: LeetCodeClient,
{
    pub fn new(students: Arc<SR>, stats: Arc<PlatformStatsService<SR, PR, LC>>) -> Self {
        Self { students, stats }
    }

    /// Register a student and pull their initial stats.
    ///
    /// Everything that can be rejected up front (validation, unsupported
    /// platforms, duplicate email) is checked before the student is created.
    pub async fn register(&self, new_student: NewStudent) -> Result<Registration, AppError> {
        new_student.validate().map_err(AppError::BadRequest)?;

        if let Some(platform) = new_student.platforms.iter().find(|p| !p.is_leetcode()) {
            return Err(AppError::InvalidArgument(format!(
                "Currently only LeetCode is supported! Got '{}'",
                platform.name
            )));
        }

        if self
            .students
            .find_by_email(&new_student.email)
            .await?
            .is_some()
        {
            return Err(AppError::Domain(DomainError::AlreadyExists(format!(
                "Student with email '{}' already exists",
                new_student.email
            ))));
        }

        let student = self.students.create(&new_student).await?;
        tracing::info!(student_id = %student.id, roll_number = %student.roll_number, "Registered student");

        let mut stats = None;
        let mut stats_error = None;
        for platform in &student.platforms {
            match self.stats.fetch_and_persist(platform, &student.id).await {
                Ok(saved) => stats = Some(saved),
                Err(e) => {
                    tracing::warn!(student_id = %student.id, error = %e, "Initial stats fetch failed");
                    stats_error = Some(e.to_string());
                    break;
                }
            }
        }

        Ok(Registration {
            student,
            stats,
            stats_error,
        })
    }

    /// Fetch the student's LeetCode stats again and add them to their totals.
    ///
    /// Cumulative like every fetch: refreshing twice counts the upstream
    /// numbers twice.
    pub async fn refresh(&self, id: &StudentId) -> Result<PlatformStats, AppError> {
        let student = self.require(id).await?;

        let mut latest = None;
        for platform in student.leetcode_platforms() {
            latest = Some(self.stats.fetch_and_persist(platform, &student.id).await?);
        }

        latest.ok_or_else(|| {
            AppError::BadRequest(format!("Student {} has no LeetCode profile", student.id))
        })
    }

    /// Every student with their stats, unranked
    pub async fn list(&self) -> Result<Vec<StudentWithStats>, AppError> {
        let students = self.students.find_all().await?;
        let mut by_student: HashMap<StudentId, PlatformStats> = self
            .stats
            .list_all()
            .await?
            .into_iter()
            .map(|s| (s.student_id, s))
            .collect();

        Ok(students
            .into_iter()
            .map(|student| StudentWithStats {
                platform_stats: by_student.remove(&student.id),
                student,
            })
            .collect())
    }

    /// One student with their stats
    pub async fn get(&self, id: &StudentId) -> Result<StudentWithStats, AppError> {
        let student = self.require(id).await?;
        let platform_stats = self.stats.get_by_student(&student.id).await?;
        Ok(StudentWithStats {
            student,
            platform_stats,
        })
    }

    async fn require(&self, id: &StudentId) -> Result<Student, AppError> {
        self.students.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!("Student {} not found", id)))
        })
    }
}
