//! Known symbol set with constant time prefix queries

use std::collections::HashSet;

/// Reference set of symbols the tokenizer recognizes
///
/// Alongside the symbols themselves the set keeps every proper prefix of every
/// symbol, so asking whether a buffer could still grow into a match is a single
/// lookup instead of a scan.
#[derive(Debug, Clone, Default)]
pub struct SymbolSet {
    symbols: HashSet<String>,
    prefixes: HashSet<String>,
    longest: usize,
}

impl SymbolSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol; empty strings are ignored
    pub fn insert(&mut self, symbol: &str) {
        if symbol.is_empty() || self.symbols.contains(symbol) {
            return;
        }

        for (index, _) in symbol.char_indices().skip(1) {
            if let Some(prefix) = symbol.get(..index) {
                self.prefixes.insert(prefix.to_string());
            }
        }
        self.longest = self.longest.max(symbol.chars().count());
        self.symbols.insert(symbol.to_string());
    }

    /// Whether `candidate` is a known symbol
    pub fn contains(&self, candidate: &str) -> bool {
        self.symbols.contains(candidate)
    }

    /// Whether `candidate` is a known symbol or the start of a longer one
    pub fn could_match(&self, candidate: &str) -> bool {
        self.symbols.contains(candidate) || self.prefixes.contains(candidate)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the set holds no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Length in characters of the longest symbol
    pub const fn longest(&self) -> usize {
        self.longest
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for symbol in iter {
            set.insert(symbol.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SymbolSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for symbol in iter {
            self.insert(symbol.as_ref());
        }
    }
}
