//! Platform stats service
//!
//! Fetches solved-problem counts from LeetCode and merges them into a
//! student's cumulative stats record.
//!
//! Merging is additive: every successful fetch adds the fetched counts onto
//! the stored totals, so fetching twice with unchanged upstream numbers
//! doubles the record. Callers that want a fresh snapshot must not call
//! `fetch_and_persist` again.

use std::sync::Arc;

use crate::app::student_locks::StudentLocks;
use crate::domain::entities::{
    DifficultyCounts, NewPlatformStats, Platform, PlatformStats, PlatformStatsId, Student,
    StudentId,
};
use crate::domain::ports::{LeetCodeClient, PlatformStatsRepository, StudentRepository};
use crate::domain::ScoreRule;
use crate::error::{AppError, DomainError};

/// Service that owns the merge-or-create of stats records
pub struct PlatformStatsService<SR, PR, LC>
where
    SR: StudentRepository,
    PR: PlatformStatsRepository,
    LC: LeetCodeClient,
{
    students: Arc<SR>,
    stats: Arc<PR>,
    leetcode: Arc<LC>,
    rule: Arc<dyn ScoreRule>,
    locks: StudentLocks,
}

impl<SR, PR, LC> PlatformStatsService<SR, PR, LC>
where
    SR: StudentRepository,
    PR: PlatformStatsRepository,
    LC: LeetCodeClient,
{
    pub fn new(
        students: Arc<SR>,
        stats: Arc<PR>,
        leetcode: Arc<LC>,
        rule: Arc<dyn ScoreRule>,
    ) -> Self {
        Self {
            students,
            stats,
            leetcode,
            rule,
            locks: StudentLocks::new(),
        }
    }

    /// Add `counts` onto the student's stats, creating the record on first use.
    ///
    /// Performs exactly one write. Fails with NotFound before touching
    /// anything when the student doesn't exist.
    pub async fn merge_or_create(
        &self,
        counts: DifficultyCounts,
        student_id: &StudentId,
    ) -> Result<PlatformStats, AppError> {
        let student = self.require_student(student_id).await?;
        let _guard = self.locks.lock(student.id).await;

        let saved = match self.stats.find_by_student(&student.id).await? {
            Some(mut existing) => {
                existing.accumulate(&counts, self.rule.as_ref())?;
                self.stats.update(&existing).await?
            }
            None => {
                let new_stats = NewPlatformStats::new(student.id, counts, self.rule.as_ref());
                self.stats.create(&new_stats).await?
            }
        };

        tracing::info!(
            student_id = %student.id,
            easy = saved.counts.easy,
            medium = saved.counts.medium,
            hard = saved.counts.hard,
            total_score = saved.total_score,
            "Merged platform stats"
        );

        Ok(saved)
    }

    /// Fetch the student's LeetCode counts and merge them into their stats.
    ///
    /// Only LeetCode profiles are accepted; anything else fails with
    /// InvalidArgument without a network call. Upstream failures abort
    /// before any write.
    pub async fn fetch_and_persist(
        &self,
        platform: &Platform,
        student_id: &StudentId,
    ) -> Result<PlatformStats, AppError> {
        if !platform.is_leetcode() {
            tracing::warn!(platform = %platform.name, "Rejected unsupported platform");
            return Err(AppError::InvalidArgument(format!(
                "Currently only LeetCode is supported! Got '{}'",
                platform.name
            )));
        }

        let student = self.require_student(student_id).await?;
        let username = platform.username();

        tracing::debug!(student_id = %student.id, username, "Fetching LeetCode stats");

        let entries = self
            .leetcode
            .accepted_submissions(username)
            .await
            .inspect_err(|e| {
                tracing::warn!(student_id = %student.id, username, error = %e, "LeetCode fetch failed");
            })?;

        let counts = DifficultyCounts::from_submissions(&entries);
        self.merge_or_create(counts, &student.id).await
    }

    /// All stats records
    pub async fn list_all(&self) -> Result<Vec<PlatformStats>, AppError> {
        Ok(self.stats.find_all().await?)
    }

    /// A stats record by ID
    pub async fn get_by_id(&self, id: &PlatformStatsId) -> Result<PlatformStats, AppError> {
        self.stats.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!(
                "PlatformStats with id {} not found",
                id
            )))
        })
    }

    /// The stats record of a student, if one was ever created
    pub async fn get_by_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<PlatformStats>, AppError> {
        Ok(self.stats.find_by_student(student_id).await?)
    }

    async fn require_student(&self, id: &StudentId) -> Result<Student, AppError> {
        self.students.find_by_id(id).await?.ok_or_else(|| {
            AppError::Domain(DomainError::NotFound(format!("Student {} not found", id)))
        })
    }
}
