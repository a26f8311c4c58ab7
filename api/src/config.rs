use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::{DEFAULT_EASY_WEIGHT, DEFAULT_HARD_WEIGHT, DEFAULT_MEDIUM_WEIGHT};
use crate::domain::WeightedScore;

pub const DEFAULT_LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// LeetCode GraphQL endpoint
    pub leetcode_graphql_url: String,
    /// Timeout applied to every LeetCode request
    pub leetcode_timeout: Duration,
    /// Weights used to derive a total score from solved counts
    pub score_weights: WeightedScore,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            leetcode_graphql_url: env::var("LEETCODE_GRAPHQL_URL")
                .unwrap_or_else(|_| DEFAULT_LEETCODE_GRAPHQL_URL.to_string()),
            leetcode_timeout: Duration::from_secs(parse_var("LEETCODE_TIMEOUT_SECS", 10)?),
            score_weights: WeightedScore {
                easy: parse_var("SCORE_WEIGHT_EASY", DEFAULT_EASY_WEIGHT)?,
                medium: parse_var("SCORE_WEIGHT_MEDIUM", DEFAULT_MEDIUM_WEIGHT)?,
                hard: parse_var("SCORE_WEIGHT_HARD", DEFAULT_HARD_WEIGHT)?,
            },
            port: parse_var("PORT", 8080)?,
        })
    }
}

/// Read an optional numeric variable, failing on values that don't parse
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_uses_default_when_unset() {
        let value: u64 = parse_var("LEADERBOARD_TEST_UNSET_VAR", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn parse_var_rejects_garbage() {
        env::set_var("LEADERBOARD_TEST_BAD_WEIGHT", "three");
        let result: Result<u64> = parse_var("LEADERBOARD_TEST_BAD_WEIGHT", 1);
        env::remove_var("LEADERBOARD_TEST_BAD_WEIGHT");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("LEADERBOARD_TEST_BAD_WEIGHT"));
    }

    #[test]
    fn parse_var_trims_whitespace() {
        env::set_var("LEADERBOARD_TEST_PADDED_PORT", " 9090 ");
        let result: Result<u16> = parse_var("LEADERBOARD_TEST_PADDED_PORT", 8080);
        env::remove_var("LEADERBOARD_TEST_PADDED_PORT");

        assert_eq!(result.unwrap(), 9090);
    }
}
