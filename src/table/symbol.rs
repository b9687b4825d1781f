//! Symbol table rows, type codes and pattern groups

use clap::ValueEnum;
use std::fmt;

/// Category of a symbol as stored in the `type` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    /// Independent vowel
    Vowel,
    /// Consonant, possibly a conjunct
    Consonant,
    /// Consonant carrying a virama
    DeadConsonant,
    /// Consonant combined with a vowel sign
    ConsonantVowel,
    /// Digit
    Number,
    /// Punctuation or other symbol
    Symbol,
    /// Anusvara sign
    Anusvara,
    /// Visarga sign
    Visarga,
    /// Virama sign
    Virama,
    /// Anything else the engine knows about
    Other,
    /// Zero width non-joiner
    NonJoiner,
    /// Zero width joiner
    Joiner,
    /// Full stop
    Period,
    /// Code the tools do not recognize, kept verbatim
    Unknown(i64),
}

impl SymbolType {
    /// Decode the integer stored in the table
    pub const fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Vowel,
            2 => Self::Consonant,
            3 => Self::DeadConsonant,
            4 => Self::ConsonantVowel,
            5 => Self::Number,
            6 => Self::Symbol,
            7 => Self::Anusvara,
            8 => Self::Visarga,
            9 => Self::Virama,
            10 => Self::Other,
            11 => Self::NonJoiner,
            12 => Self::Joiner,
            13 => Self::Period,
            other => Self::Unknown(other),
        }
    }

    /// Integer stored in the table for this type
    pub const fn code(self) -> i64 {
        match self {
            Self::Vowel => 1,
            Self::Consonant => 2,
            Self::DeadConsonant => 3,
            Self::ConsonantVowel => 4,
            Self::Number => 5,
            Self::Symbol => 6,
            Self::Anusvara => 7,
            Self::Visarga => 8,
            Self::Virama => 9,
            Self::Other => 10,
            Self::NonJoiner => 11,
            Self::Joiner => 12,
            Self::Period => 13,
            Self::Unknown(code) => code,
        }
    }
}

/// How a row's pattern is matched by the transliteration engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum MatchType {
    /// Pattern always produces this symbol
    Exact,
    /// Pattern may produce this symbol as one of several candidates
    Possibility,
}

impl MatchType {
    /// Integer stored in the `match_type` column
    pub const fn code(self) -> i64 {
        match self {
            Self::Exact => 1,
            Self::Possibility => 2,
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Possibility => write!(f, "possibility"),
        }
    }
}

/// One candidate symbol for a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRow {
    /// Source script sequence
    pub pattern: String,
    /// Target script output, the value-identity column
    pub symbol: String,
    /// Symbol category
    pub symbol_type: SymbolType,
}

/// All rows sharing one pattern, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternGroup {
    /// Pattern shared by every row
    pub pattern: String,
    /// Competing candidates
    pub rows: Vec<SymbolRow>,
}

impl PatternGroup {
    /// Number of candidates in the group
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the group has no candidates
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
