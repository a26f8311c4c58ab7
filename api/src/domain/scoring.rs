//! Score derivation
//!
//! A score is a pure function of the solved counts. The rule is injected into
//! the stats service so the weighting can change without touching merge logic.

use serde::{Deserialize, Serialize};

use super::entities::DifficultyCounts;

/// Deterministic score for a set of solved counts
pub trait ScoreRule: Send + Sync {
    fn score(&self, counts: &DifficultyCounts) -> u64;
}

/// Weighted sum of solved problems per difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedScore {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
}

impl ScoreRule for WeightedScore {
    fn score(&self, counts: &DifficultyCounts) -> u64 {
        u64::from(counts.easy)
            .saturating_mul(self.easy)
            .saturating_add(u64::from(counts.medium).saturating_mul(self.medium))
            .saturating_add(u64::from(counts.hard).saturating_mul(self.hard))
    }
}
