//! Insertion-ordered frequency counter.
//!
//! [`StableCounter`] counts keys and ranks them by count, breaking ties by
//! the order in which each key was first seen.
//!
//! ```
//! use chatstats::core::counter::StableCounter;
//!
//! let mut counter = StableCounter::new();
//! counter.extend(["b", "a", "b", "c", "a"]);
//!
//! assert_eq!(counter.most_common(2), vec![("b", 2), ("a", 2)]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct StableCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K> Default for StableCounter<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> StableCounter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Adds `n` occurrences of `key`. A key first seen with `n == 0` is
    /// still registered at its first-seen position.
    pub fn add_n(&mut self, key: K, n: usize) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += n,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, n));
            }
        }
    }

    pub fn get(&self, key: &K) -> usize {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Up to `n` entries, highest count first, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for StableCounter<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for StableCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}
