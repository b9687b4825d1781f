//! Target script membership and splitting of raw text into script runs

use crate::io::configuration::{
    MALAYALAM_END, MALAYALAM_START, ZERO_WIDTH_JOINER, ZERO_WIDTH_NON_JOINER,
};
use std::ops::RangeInclusive;

/// Code points that belong to the script symbols are written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    ranges: Vec<RangeInclusive<char>>,
    extra: Vec<char>,
}

impl Default for Script {
    fn default() -> Self {
        Self::malayalam()
    }
}

impl Script {
    /// Build a script from inclusive code point ranges and standalone characters
    pub const fn new(ranges: Vec<RangeInclusive<char>>, extra: Vec<char>) -> Self {
        Self { ranges, extra }
    }

    /// The Malayalam block plus the two zero width joiners
    pub fn malayalam() -> Self {
        Self::new(
            vec![MALAYALAM_START..=MALAYALAM_END],
            vec![ZERO_WIDTH_NON_JOINER, ZERO_WIDTH_JOINER],
        )
    }

    /// Whether `ch` is part of this script
    pub fn contains(&self, ch: char) -> bool {
        self.ranges.iter().any(|range| range.contains(&ch)) || self.extra.contains(&ch)
    }

    /// Split `text` into maximal runs of script characters
    ///
    /// Everything outside the script acts as a boundary and is discarded.
    pub const fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments {
            script: self,
            rest: text,
        }
    }
}

/// Iterator over the script runs of a text, see [`Script::segments`]
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    script: &'a Script,
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.find(|ch: char| self.script.contains(ch))?;
        let tail = self.rest.get(start..)?;
        let end = tail
            .find(|ch: char| !self.script.contains(ch))
            .unwrap_or(tail.len());
        let (run, remainder) = tail.split_at(end);
        self.rest = remainder;
        Some(run)
    }
}
