//! Greedy longest-match segmentation of words into known symbols
//!
//! The tokenizer grows a buffer one character at a time for as long as the
//! buffer is still a known symbol or the start of one. When the next character
//! breaks the match, the longest known symbol seen in the buffer is emitted and
//! recognition restarts right after it. A buffer that never matched anything is
//! dropped up to the breaking character and counted in [`MaximalMunch::dropped`].

use crate::tokenize::script::{Script, Segments};
use crate::tokenize::symbols::SymbolSet;

/// Lazy symbol sequence for a single word
#[derive(Debug, Clone)]
pub struct MaximalMunch<'a> {
    symbols: &'a SymbolSet,
    rest: &'a str,
    dropped: usize,
}

impl<'a> MaximalMunch<'a> {
    /// Start tokenizing `word` against `symbols`
    pub const fn new(word: &'a str, symbols: &'a SymbolSet) -> Self {
        Self {
            symbols,
            rest: word,
            dropped: 0,
        }
    }

    /// Characters discarded so far because no known symbol covered them
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Scan the front of the remaining input
    ///
    /// Returns the byte length of the longest known symbol at the front, and
    /// the byte offset of the first character that broke the match, if any.
    fn scan_front(&self) -> (Option<usize>, Option<usize>) {
        let mut longest = None;

        for (offset, ch) in self.rest.char_indices() {
            let end = offset + ch.len_utf8();
            let Some(buffer) = self.rest.get(..end) else {
                break;
            };

            if !self.symbols.could_match(buffer) {
                return (longest, Some(offset));
            }
            if self.symbols.contains(buffer) {
                longest = Some(end);
            }
        }

        (longest, None)
    }

    fn discard(&mut self, bytes: usize) {
        let (lost, remainder) = self.rest.split_at(bytes.min(self.rest.len()));
        self.dropped += lost.chars().count();
        self.rest = remainder;
    }
}

impl<'a> Iterator for MaximalMunch<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            match self.scan_front() {
                (Some(end), _) => {
                    let (symbol, remainder) = self.rest.split_at(end);
                    self.rest = remainder;
                    return Some(symbol);
                }
                // The first character cannot begin any symbol
                (None, Some(0)) => {
                    let width = self.rest.chars().next().map_or(1, char::len_utf8);
                    self.discard(width);
                }
                (None, Some(offset)) => self.discard(offset),
                (None, None) => self.discard(self.rest.len()),
            }
        }

        None
    }
}

/// Lazy symbol sequence for free text, restarting at every script boundary
#[derive(Debug, Clone)]
pub struct TextTokens<'a> {
    symbols: &'a SymbolSet,
    runs: Segments<'a>,
    current: Option<MaximalMunch<'a>>,
    dropped: usize,
}

impl<'a> TextTokens<'a> {
    /// Tokenize every run of `script` characters in `text`
    pub const fn new(text: &'a str, script: &'a Script, symbols: &'a SymbolSet) -> Self {
        Self {
            symbols,
            runs: script.segments(text),
            current: None,
            dropped: 0,
        }
    }

    /// Script characters discarded so far because no known symbol covered them
    pub fn dropped(&self) -> usize {
        self.dropped + self.current.as_ref().map_or(0, MaximalMunch::dropped)
    }
}

impl<'a> Iterator for TextTokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(munch) = self.current.as_mut() {
                if let Some(symbol) = munch.next() {
                    return Some(symbol);
                }
                self.dropped += munch.dropped();
                self.current = None;
            }

            let run = self.runs.next()?;
            self.current = Some(MaximalMunch::new(run, self.symbols));
        }
    }
}

/// Symbol set paired with the script its symbols are written in
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    symbols: SymbolSet,
    script: Script,
}

impl Tokenizer {
    /// Create a tokenizer over `symbols` for text written in `script`
    pub const fn new(symbols: SymbolSet, script: Script) -> Self {
        Self { symbols, script }
    }

    /// Known symbols
    pub const fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    /// Segment a single word that is already known to be in the script
    pub const fn word<'a>(&'a self, word: &'a str) -> MaximalMunch<'a> {
        MaximalMunch::new(word, &self.symbols)
    }

    /// Segment arbitrary text, skipping characters outside the script
    pub const fn text<'a>(&'a self, text: &'a str) -> TextTokens<'a> {
        TextTokens::new(text, &self.script, &self.symbols)
    }
}
