//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    DifficultyCounts, NewStudent, Platform, PlatformStats, PlatformStatsId, Student, StudentId,
    SubmissionCount,
};
use crate::domain::{ScoreRule, WeightedScore};

/// Score rule used across tests
pub fn test_rule() -> WeightedScore {
    WeightedScore {
        easy: 1,
        medium: 3,
        hard: 5,
    }
}

/// LeetCode profile for a username
pub fn leetcode_platform(username: &str) -> Platform {
    Platform::new("LeetCode", format!("https://leetcode.com/u/{}/", username))
}

/// Create a test student with default values
pub fn test_student() -> Student {
    test_student_with_id(1)
}

/// Create a test student with a specific ID
pub fn test_student_with_id(id: i64) -> Student {
    Student {
        id: StudentId(id),
        full_name: format!("Student {}", id),
        roll_number: format!("21CS{:03}", id),
        email: format!("student{}@college.edu", id),
        department: "Computer Science Engineering".to_string(),
        year: Some(2),
        profile_pic: None,
        platforms: vec![leetcode_platform(&format!("student{}", id))],
        created_at: Utc::now(),
    }
}

/// Registration payload for a student with a LeetCode profile
pub fn test_new_student(email: &str) -> NewStudent {
    NewStudent {
        full_name: "Alice Doe".to_string(),
        roll_number: "21CS042".to_string(),
        email: email.to_string(),
        department: "CSE-DS".to_string(),
        year: Some(3),
        profile_pic: None,
        platforms: vec![leetcode_platform("alice")],
    }
}

/// Existing stats for a student, scored with `test_rule`
pub fn test_stats(student_id: StudentId, counts: DifficultyCounts) -> PlatformStats {
    PlatformStats {
        id: PlatformStatsId(100 + student_id.0),
        student_id,
        counts,
        total_score: test_rule().score(&counts),
        updated_at: Utc::now(),
    }
}

/// The usual LeetCode payload: an "All" row followed by per-difficulty rows
pub fn test_submissions(easy: u32, medium: u32, hard: u32) -> Vec<SubmissionCount> {
    vec![
        SubmissionCount::new("All", easy + medium + hard),
        SubmissionCount::new("Easy", easy),
        SubmissionCount::new("Medium", medium),
        SubmissionCount::new("Hard", hard),
    ]
}
