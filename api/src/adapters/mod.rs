//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod leetcode;
pub mod postgres;

pub use leetcode::LeetCodeGraphqlClient;
pub use postgres::{PostgresPlatformStatsRepository, PostgresStudentRepository};
