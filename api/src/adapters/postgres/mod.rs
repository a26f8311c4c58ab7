//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod platform_stats_repo;
pub mod student_repo;


pub use platform_stats_repo::PostgresPlatformStatsRepository;
pub use student_repo::PostgresStudentRepository;
