//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories count writes and the mock LeetCode client
//! counts calls, so tests can assert how often the persistence and network
//! collaborators were touched.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
