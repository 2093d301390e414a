use std::collections::BTreeMap;

use crate::tokens::{clean_item, split_items};

/// Minimum width of the item column before the gap is added.
pub const MIN_ITEM_COLUMN: usize = 12;
/// Spacing between the item column and the value column.
pub const COLUMN_GAP: usize = 2;

/// Item name to occurrence count, ordered by item.
///
/// Every present item has a count of at least 1. Iteration is lexicographic
/// by item, which keeps listings and backups identical across runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyStore {
    counts: BTreeMap<String, u64>,
}

impl FrequencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Counts one token. Returns `false` when the token is empty after trimming.
    pub fn record(&mut self, token: &str) -> bool {
        let item = clean_item(token);
        if item.is_empty() {
            return false;
        }
        match self.counts.get_mut(item) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(item.to_owned(), 1);
            }
        }
        true
    }

    /// Tokenizes `text` and counts every item in it. Returns the number counted.
    pub fn record_text(&mut self, text: &str) -> usize {
        split_items(text).filter(|token| self.record(token)).count()
    }

    /// Exact-match lookup; 0 when the item was never seen.
    pub fn frequency_of(&self, item: &str) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in lexicographic item order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(item, count)| (item.as_str(), *count))
    }

    /// Width of the padded item column: `max(12, longest item) + 2`, in chars.
    pub fn column_width(&self) -> usize {
        let longest = self
            .counts
            .keys()
            .map(|item| item.chars().count())
            .max()
            .unwrap_or(0);
        longest.max(MIN_ITEM_COLUMN) + COLUMN_GAP
    }

    pub(crate) fn contains(&self, item: &str) -> bool {
        self.counts.contains_key(item)
    }

    pub(crate) fn insert_count(&mut self, item: String, count: u64) {
        self.counts.insert(item, count);
    }
}
