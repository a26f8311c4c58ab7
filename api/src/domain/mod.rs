//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `scoring`: The injectable rule that derives a score from solved counts

pub mod entities;
pub mod ports;
pub mod scoring;

pub use scoring::{ScoreRule, WeightedScore};
