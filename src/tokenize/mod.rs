//! Segmentation of words and corpus text into known symbols

/// Greedy longest-match tokenizer over words and free text
pub mod munch;
/// Target script code point ranges and script run splitting
pub mod script;
/// Known symbol set with prefix lookups
pub mod symbols;

pub use munch::{MaximalMunch, TextTokens, Tokenizer};
pub use script::Script;
pub use symbols::SymbolSet;
