//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod platform_stats_service;
pub mod score_config;
pub mod student_locks;
pub mod student_service;

pub use platform_stats_service::PlatformStatsService;
pub use score_config::*;
pub use student_service::{Registration, StudentService, StudentWithStats};
