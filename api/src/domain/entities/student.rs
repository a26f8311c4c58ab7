//! Student domain entity
//!
//! A student whose coding-platform progress appears on the leaderboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// Unique identifier for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub i64);

impl From<i64> for StudentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered student
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub full_name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: Option<i32>,
    pub profile_pic: Option<String>,
    /// Linked platform profiles
    pub platforms: Vec<Platform>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Platforms this service knows how to fetch stats for
    pub fn leetcode_platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter(|p| p.is_leetcode())
    }
}

/// Data needed to register a new student
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub full_name: String,
    pub roll_number: String,
    pub email: String,
    pub department: String,
    pub year: Option<i32>,
    pub profile_pic: Option<String>,
    pub platforms: Vec<Platform>,
}

impl NewStudent {
    /// Check required fields, returning a human readable reason on failure
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if self.roll_number.trim().is_empty() {
            return Err("Roll number is required".to_string());
        }
        if !self.email.contains('@') {
            return Err(format!("Invalid email: {}", self.email));
        }
        if let Some(year) = self.year {
            if !(1..=4).contains(&year) {
                return Err(format!("Year must be between 1 and 4, got {}", year));
            }
        }
        Ok(())
    }
}
