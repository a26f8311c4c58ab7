//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod platform_stats;
pub mod students;

pub use platform_stats::{get_platform_stats, list_platform_stats};
pub use students::{
    get_student, get_student_stats, list_students, merge_student_stats, refresh_student, submit,
};
