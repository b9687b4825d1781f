//! Frequency accumulation and rank normalization

/// Rank policies applied to pattern groups
pub mod ranking;
/// Cumulative per-symbol counts
pub mod tally;

pub use ranking::{Candidate, RankPolicy, RankedSymbol, rank_group};
pub use tally::FrequencyTally;
