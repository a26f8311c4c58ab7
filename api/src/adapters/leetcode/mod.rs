//! LeetCode adapter
//!
//! GraphQL client for LeetCode's public profile API.

pub mod client;

pub use client::LeetCodeGraphqlClient;
