//! Name ranking - orders the recorded text variants of one wrestler.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// How often one text variant was recorded, and when it was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTally {
    pub text: String,
    pub count: usize,
    /// Occurrence index of the earliest sighting.
    pub first_seen: usize,
}

/// Tallies text variants and ranks them.
///
/// Variants are ordered by count (descending), then by first occurrence
/// (ascending). The hash map only locates tallies; ordering never depends on
/// its iteration order.
#[derive(Debug, Clone, Default)]
pub struct NameRanker {
    tallies: Vec<NameTally>,
    positions: HashMap<String, usize>,
}

impl NameRanker {
    /// Create a new empty ranker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ranker from `(text, occurrence_index)` pairs.
    pub fn from_occurrences<S: AsRef<str>>(pairs: impl IntoIterator<Item = (S, usize)>) -> Self {
        let mut ranker = Self::new();
        for (text, index) in pairs {
            ranker.record(text.as_ref(), index);
        }
        ranker
    }

    /// Record one sighting of `text` at `occurrence_index`.
    pub fn record(&mut self, text: &str, occurrence_index: usize) {
        match self.positions.get(text) {
            Some(&pos) => {
                let tally = &mut self.tallies[pos];
                tally.count += 1;
                tally.first_seen = tally.first_seen.min(occurrence_index);
            }
            None => {
                self.positions.insert(text.to_string(), self.tallies.len());
                self.tallies.push(NameTally {
                    text: text.to_string(),
                    count: 1,
                    first_seen: occurrence_index,
                });
            }
        }
    }

    /// Tallies in rank order.
    pub fn ranked_with_counts(&self) -> Vec<NameTally> {
        let mut tallies = self.tallies.clone();
        tallies.sort_by_key(|t| (Reverse(t.count), t.first_seen));
        tallies
    }

    /// Distinct texts in rank order, best display name first.
    pub fn ranked(&self) -> Vec<String> {
        self.ranked_with_counts()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    /// The best display name, if anything was recorded.
    pub fn top(&self) -> Option<&str> {
        self.tallies
            .iter()
            .min_by_key(|t| (Reverse(t.count), t.first_seen))
            .map(|t| t.text.as_str())
    }

    /// Get the number of distinct texts.
    pub fn distinct_count(&self) -> usize {
        self.tallies.len()
    }

    /// Get the total number of sightings.
    pub fn total_count(&self) -> usize {
        self.tallies.iter().map(|t| t.count).sum()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}

/// Rank `(text, occurrence_index)` pairs into distinct texts, best first.
pub fn rank_names<S: AsRef<str>>(pairs: impl IntoIterator<Item = (S, usize)>) -> Vec<String> {
    NameRanker::from_occurrences(pairs).ranked()
}
