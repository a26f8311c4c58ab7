//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod leetcode;
pub mod repositories;

pub use leetcode::LeetCodeClient;
pub use repositories::{PlatformStatsRepository, StudentRepository};
