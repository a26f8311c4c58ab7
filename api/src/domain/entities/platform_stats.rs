//! Platform stats domain entity
//!
//! The cumulative record of a student's solved problems by difficulty and the
//! score derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::student::StudentId;
use crate::domain::scoring::ScoreRule;
use crate::error::DomainError;

/// Unique identifier for a stats record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformStatsId(pub i64);

impl From<i64> for PlatformStatsId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlatformStatsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Problem difficulty as labelled by LeetCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Exact, case-sensitive label match. "All" and anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One `{difficulty, count}` entry of LeetCode's `acSubmissionNum`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCount {
    pub difficulty: String,
    pub count: u32,
}

impl SubmissionCount {
    pub fn new(difficulty: impl Into<String>, count: u32) -> Self {
        Self {
            difficulty: difficulty.into(),
            count,
        }
    }
}

/// Solved problem counts by difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCounts {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl DifficultyCounts {
    pub fn new(easy: u32, medium: u32, hard: u32) -> Self {
        Self { easy, medium, hard }
    }

    /// Fold submission entries into counts.
    ///
    /// Unknown labels are ignored and absent labels stay at zero. A repeated
    /// label overwrites the earlier value.
    pub fn from_submissions(entries: &[SubmissionCount]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match Difficulty::from_label(&entry.difficulty) {
                Some(Difficulty::Easy) => counts.easy = entry.count,
                Some(Difficulty::Medium) => counts.medium = entry.count,
                Some(Difficulty::Hard) => counts.hard = entry.count,
                None => {}
            }
        }
        counts
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        Some(Self {
            easy: self.easy.checked_add(other.easy)?,
            medium: self.medium.checked_add(other.medium)?,
            hard: self.hard.checked_add(other.hard)?,
        })
    }

    pub fn total(&self) -> u64 {
        u64::from(self.easy) + u64::from(self.medium) + u64::from(self.hard)
    }
}

/// Stored stats for one student
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub id: PlatformStatsId,
    pub student_id: StudentId,
    #[serde(flatten)]
    pub counts: DifficultyCounts,
    /// Always `rule.score(counts)` for the rule that last touched the record
    pub total_score: u64,
    pub updated_at: DateTime<Utc>,
}

impl PlatformStats {
    /// Add `delta` onto the stored counts and recompute the score.
    ///
    /// Cumulative: applying the same delta twice counts it twice.
    pub fn accumulate(
        &mut self,
        delta: &DifficultyCounts,
        rule: &dyn ScoreRule,
    ) -> Result<(), DomainError> {
        let counts = self.counts.checked_add(delta).ok_or_else(|| {
            DomainError::Validation(format!(
                "Solved counts overflow for student {}",
                self.student_id
            ))
        })?;

        self.counts = counts;
        self.total_score = rule.score(&self.counts);
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Data needed to insert a first stats record
#[derive(Debug, Clone)]
pub struct NewPlatformStats {
    pub student_id: StudentId,
    pub counts: DifficultyCounts,
    pub total_score: u64,
}

impl NewPlatformStats {
    /// Baseline record with its score already derived
    pub fn new(student_id: StudentId, counts: DifficultyCounts, rule: &dyn ScoreRule) -> Self {
        Self {
            student_id,
            counts,
            total_score: rule.score(&counts),
        }
    }
}
