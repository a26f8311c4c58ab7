//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    NewPlatformStats, NewStudent, PlatformStats, PlatformStatsId, Student, StudentId,
};
use crate::error::DomainError;

/// Repository for Student entities
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by ID
    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, DomainError>;

    /// Find a student by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, DomainError>;

    /// List all students
    async fn find_all(&self) -> Result<Vec<Student>, DomainError>;

    /// Create a new student
    async fn create(&self, student: &NewStudent) -> Result<Student, DomainError>;
}

/// Repository for PlatformStats entities
#[async_trait]
pub trait PlatformStatsRepository: Send + Sync {
    /// List every stats record
    async fn find_all(&self) -> Result<Vec<PlatformStats>, DomainError>;

    /// Find a stats record by ID
    async fn find_by_id(&self, id: &PlatformStatsId) -> Result<Option<PlatformStats>, DomainError>;

    /// Find the stats record belonging to a student
    async fn find_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<PlatformStats>, DomainError>;

    /// Insert a first record for a student
    async fn create(&self, stats: &NewPlatformStats) -> Result<PlatformStats, DomainError>;

    /// Overwrite counts and score of an existing record
    async fn update(&self, stats: &PlatformStats) -> Result<PlatformStats, DomainError>;
}
