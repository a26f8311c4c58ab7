//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod platform;
pub mod platform_stats;
pub mod student;

pub use platform::{extract_username, Platform, SUPPORTED_PLATFORM};
pub use platform_stats::{
    Difficulty, DifficultyCounts, NewPlatformStats, PlatformStats, PlatformStatsId,
    SubmissionCount,
};
pub use student::{NewStudent, Student, StudentId};
