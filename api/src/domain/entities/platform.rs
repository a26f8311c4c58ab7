//! Platform value object
//!
//! A link from a student to their profile on an external coding judge.

use serde::{Deserialize, Serialize};

/// The only provider stats can currently be fetched from
pub const SUPPORTED_PLATFORM: &str = "LeetCode";

/// External coding platform profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub name: String,
    pub profile_url: String,
}

impl Platform {
    pub fn new(name: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profile_url: profile_url.into(),
        }
    }

    /// Loose name guard: an exact case-insensitive "LeetCode" or any name
    /// containing "leetcode" is accepted.
    pub fn is_leetcode(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(SUPPORTED_PLATFORM)
            || self.name.to_lowercase().contains("leetcode")
    }

    /// Username taken from the profile URL
    pub fn username(&self) -> &str {
        extract_username(&self.profile_url)
    }
}

/// Last path segment of a profile URL, ignoring a single trailing slash.
///
/// Best effort: malformed input yields whatever follows the last `/`.
pub fn extract_username(profile_url: &str) -> &str {
    let trimmed = profile_url.strip_suffix('/').unwrap_or(profile_url);
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
