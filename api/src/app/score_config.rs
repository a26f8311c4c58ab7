//! Score configuration constants
//!
//! Default weights for deriving a leaderboard score from solved counts.
//! Each can be overridden through the environment (see `Config`).

/// Points per solved Easy problem
pub const DEFAULT_EASY_WEIGHT: u64 = 1;

/// Points per solved Medium problem
pub const DEFAULT_MEDIUM_WEIGHT: u64 = 3;

/// Points per solved Hard problem
pub const DEFAULT_HARD_WEIGHT: u64 = 5;
