//! Corpus-driven ranking of transliteration symbols
//!
//! A symbol table maps source-script patterns to competing target-script
//! symbols. The jobs in this crate segment real text into known symbols, count
//! how often each one occurs, and rewrite the table weights so that the
//! transliteration engine prefers the symbols people actually write.

#![forbid(unsafe_code)]

/// Frequency accumulation and per-pattern rank policies
pub mod frequency;
/// Input/output operations, configuration and error handling
pub mod io;
/// Batch jobs behind each subcommand
pub mod jobs;
/// Symbol table model and `SQLite` storage
pub mod table;
/// Greedy longest-match segmentation into known symbols
pub mod tokenize;

pub use io::error::{RankError, Result};
