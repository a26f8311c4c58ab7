//! SeaORM entities
//!
//! Table mappings used by the PostgreSQL adapters. Schema lives in
//! `api/migrations/`.

pub mod platform_stats;
pub mod students;
