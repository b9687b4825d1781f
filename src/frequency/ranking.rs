//! Conversion of observed symbol frequencies into per-pattern ranks

use crate::io::configuration::{MAX_CONSONANT_VOWEL_SEED, MIN_CONSONANT_SEED, PERCENTAGE_SCALE};
use crate::table::symbol::{PatternGroup, SymbolType};
use clap::ValueEnum;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Strategy for turning frequencies into weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RankPolicy {
    /// Share of the group total, scaled to 100
    #[default]
    Percentage,
    /// Raw frequency, with consonant-vowel forms compressed below plain consonants
    TypeAware,
}

impl fmt::Display for RankPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage => write!(f, "percentage"),
            Self::TypeAware => write!(f, "type-aware"),
        }
    }
}

/// A symbol competing for a pattern together with its observed frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Target script symbol
    pub symbol: &'a str,
    /// Symbol category
    pub symbol_type: SymbolType,
    /// Occurrences observed in the corpus
    pub frequency: u64,
}

/// Rank assigned to one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSymbol {
    /// Target script symbol
    pub symbol: String,
    /// Occurrences observed in the corpus
    pub frequency: u64,
    /// Computed weight
    pub rank: u64,
}

/// Pair every row of `group` with its frequency; symbols absent from `frequencies` count zero
pub fn candidates<'a>(
    group: &'a PatternGroup,
    frequencies: &HashMap<String, u64>,
) -> Vec<Candidate<'a>> {
    group
        .rows
        .iter()
        .map(|row| Candidate {
            symbol: &row.symbol,
            symbol_type: row.symbol_type,
            frequency: frequencies.get(&row.symbol).copied().unwrap_or(0),
        })
        .collect()
}

/// Rank the candidates of one pattern group
///
/// The result holds one entry per distinct symbol, sorted by descending rank,
/// ties keeping candidate order. A symbol listed on several rows still counts
/// once per row towards the group totals but is ranked once, at its first row.
/// Returns `None` when the group carries no frequency information the policy
/// can use, in which case the stored weights should be left alone.
pub fn rank_group(policy: RankPolicy, candidates: &[Candidate<'_>]) -> Option<Vec<RankedSymbol>> {
    let mut ranked = match policy {
        RankPolicy::Percentage => percentage_ranks(candidates)?,
        RankPolicy::TypeAware => type_aware_ranks(candidates),
    };
    let mut seen = HashSet::new();
    ranked.retain(|entry| seen.insert(entry.symbol.clone()));
    ranked.sort_by(|a, b| b.rank.cmp(&a.rank));
    Some(ranked)
}

fn percentage_ranks(candidates: &[Candidate<'_>]) -> Option<Vec<RankedSymbol>> {
    let total: u128 = candidates.iter().map(|c| u128::from(c.frequency)).sum();
    if total == 0 {
        return None;
    }

    Some(
        candidates
            .iter()
            .map(|c| {
                let share = u128::from(c.frequency) * u128::from(PERCENTAGE_SCALE) / total;
                ranked(c, saturate(share))
            })
            .collect(),
    )
}

fn type_aware_ranks(candidates: &[Candidate<'_>]) -> Vec<RankedSymbol> {
    let min_consonant = candidates
        .iter()
        .filter(|c| c.symbol_type == SymbolType::Consonant)
        .map(|c| c.frequency)
        .fold(MIN_CONSONANT_SEED, u64::min);
    let max_consonant_vowel = candidates
        .iter()
        .filter(|c| c.symbol_type == SymbolType::ConsonantVowel)
        .map(|c| c.frequency)
        .fold(MAX_CONSONANT_VOWEL_SEED, u64::max);

    candidates
        .iter()
        .map(|c| {
            if c.symbol_type == SymbolType::ConsonantVowel {
                // freq / max_cv * min_consonant / 2, kept exact in integers
                let scaled = u128::from(c.frequency) * u128::from(min_consonant)
                    / (2 * u128::from(max_consonant_vowel));
                ranked(c, saturate(scaled))
            } else {
                ranked(c, c.frequency)
            }
        })
        .collect()
}

fn ranked(candidate: &Candidate<'_>, rank: u64) -> RankedSymbol {
    RankedSymbol {
        symbol: candidate.symbol.to_string(),
        frequency: candidate.frequency,
        rank,
    }
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
