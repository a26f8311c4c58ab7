//! LeetCode client port trait
//!
//! Defines the interface for reading a user's solved-problem counts.

use async_trait::async_trait;

use crate::domain::entities::SubmissionCount;
use crate::error::LeetCodeError;

/// Client for LeetCode's public GraphQL API
#[async_trait]
pub trait LeetCodeClient: Send + Sync {
    /// Accepted submission counts grouped by difficulty.
    ///
    /// Issues exactly one request. A user or payload that doesn't match the
    /// expected shape is an error, never an empty result.
    async fn accepted_submissions(
        &self,
        username: &str,
    ) -> Result<Vec<SubmissionCount>, LeetCodeError>;
}
