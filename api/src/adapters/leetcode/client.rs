//! LeetCode GraphQL client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::SubmissionCount;
use crate::domain::ports::LeetCodeClient;
use crate::error::LeetCodeError;

/// Accepted submissions per difficulty for one user
const USER_PROFILE_QUERY: &str = "query getUserProfile($username: String!) { \
    matchedUser(username: $username) { \
    submitStatsGlobal { acSubmissionNum { difficulty count } } } }";

/// Implementation of the LeetCode client over reqwest
pub struct LeetCodeGraphqlClient {
    http: Client,
    endpoint: String,
}

impl LeetCodeGraphqlClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, LeetCodeError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("leaderboard-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoint })
    }

    async fn handle_response(
        &self,
        username: &str,
        response: reqwest::Response,
    ) -> Result<Vec<SubmissionCount>, LeetCodeError> {
        let status = response.status();

        if status.as_u16() == 429 {
            return Err(LeetCodeError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LeetCodeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_user_profile(username, &body)
    }
}

/// Request types for the GraphQL API
#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: UserVariables<'a>,
}

#[derive(Serialize)]
struct UserVariables<'a> {
    username: &'a str,
}

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Response types from the GraphQL API. Every level is optional so a
/// missing field becomes a typed error instead of a failed parse.
#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<UserProfileData>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserProfileData {
    matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: Option<SubmitStats>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitStats {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    ac_submission_num: Vec<SubmissionCount>,
}

/// Validate a raw response body down to the submission entries
fn parse_user_profile(username: &str, body: &str) -> Result<Vec<SubmissionCount>, LeetCodeError> {
    if body.trim().is_empty() {
        return Err(LeetCodeError::MissingData {
            username: username.to_string(),
        });
    }

    let response: GraphqlResponse =
        serde_json::from_str(body).map_err(|e| LeetCodeError::Deserialization {
            username: username.to_string(),
            message: e.to_string(),
        })?;

    for error in &response.errors {
        tracing::debug!(username, message = %error.message, "LeetCode GraphQL error");
    }

    let data = response.data.ok_or_else(|| LeetCodeError::MissingData {
        username: username.to_string(),
    })?;

    data.matched_user
        .and_then(|user| user.submit_stats_global)
        .map(|stats| stats.ac_submission_num)
        .ok_or_else(|| LeetCodeError::UserStatsMissing {
            username: username.to_string(),
        })
}

#[async_trait]
impl LeetCodeClient for LeetCodeGraphqlClient {
    async fn accepted_submissions(
        &self,
        username: &str,
    ) -> Result<Vec<SubmissionCount>, LeetCodeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest {
                query: USER_PROFILE_QUERY,
                variables: UserVariables { username },
            })
            .send()
            .await?;

        self.handle_response(username, response).await
    }
}
