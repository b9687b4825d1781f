//! Cumulative symbol counts with a first-seen ordering for stable reports

use std::collections::HashMap;

/// Running count per symbol
///
/// Entries remember the order in which symbols were first seen so that the
/// sorted view breaks ties deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl FrequencyTally {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` occurrences of `token`
    pub fn add(&mut self, token: &str, weight: u64) {
        if let Some(&position) = self.index.get(token) {
            if let Some((_, count)) = self.entries.get_mut(position) {
                *count = count.saturating_add(weight);
            }
            return;
        }

        self.index.insert(token.to_string(), self.entries.len());
        self.entries.push((token.to_string(), weight));
    }

    /// Count of `token`, zero when never seen
    pub fn get(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, (_, count)| sum.saturating_add(*count))
    }

    /// Tokens by descending count, ties in first-seen order
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut view: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        view.sort_by(|a, b| b.1.cmp(&a.1));
        view
    }

    /// Consume the tally into owned pairs by descending count
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<S: AsRef<str>> Extend<(S, u64)> for FrequencyTally {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        for (token, weight) in iter {
            self.add(token.as_ref(), weight);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyTally {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        tally.extend(iter);
        tally
    }
}
