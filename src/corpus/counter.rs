//! String frequency counter.

use ahash::AHashMap;
use serde::{Serialize, Serializer};

/// A mapping from string keys to non-negative counts.
///
/// Counts only grow. Iteration order is unspecified; use [`Counter::sorted`]
/// or [`Counter::most_common`] for stable output. Serializes as a list of
/// `[key, count]` pairs sorted by key.
///
/// # Examples
///
/// ```
/// use jsontok::corpus::counter::Counter;
///
/// let counter: Counter = ["title:cat", "title:dog", "title:cat"].into_iter().collect();
/// assert_eq!(counter.get("title:cat"), 2);
/// assert_eq!(counter.get("title:bird"), 0);
/// assert_eq!(counter.most_common(Some(1)), vec![("title:cat".to_string(), 2)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counter {
    counts: AHashMap<String, u64>,
}

impl Counter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Counter {
            counts: AHashMap::new(),
        }
    }

    /// Add one to the count for `key`.
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    /// Add `n` to the count for `key`.
    pub fn add(&mut self, key: &str, n: u64) {
        match self.counts.get_mut(key) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(key.to_string(), n);
            }
        }
    }

    /// The count for `key`, zero when never seen.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
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

    /// Iterate over `(key, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Add every count of `other` into this counter.
    pub fn merge(&mut self, other: &Counter) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }

    /// All pairs sorted by key.
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut pairs: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        pairs
    }

    /// Pairs sorted by descending count, ties broken by key.
    ///
    /// With `Some(n)` only the first `n` pairs are returned.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(String, u64)> {
        let mut pairs = self.sorted();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(n) = limit {
            pairs.truncate(n);
        }
        pairs
    }
}

impl<S: AsRef<str>> Extend<S> for Counter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.increment(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Counter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Counter::new();
        counter.extend(iter);
        counter
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut counter = Counter::new();
        assert!(counter.is_empty());

        counter.increment("a");
        counter.increment("a");
        counter.add("b", 5);

        assert_eq!(counter.get("a"), 2);
        assert_eq!(counter.get("b"), 5);
        assert_eq!(counter.get("c"), 0);
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.total(), 7);
    }

    #[test]
    fn test_sorted_by_key() {
        let counter: Counter = ["pear", "apple", "fig", "apple"].into_iter().collect();
        assert_eq!(
            counter.sorted(),
            vec![
                ("apple".to_string(), 2),
                ("fig".to_string(), 1),
                ("pear".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_most_common_breaks_ties_by_key() {
        let counter: Counter = ["b", "a", "c", "c", "b", "c"].into_iter().collect();
        assert_eq!(
            counter.most_common(None),
            vec![
                ("c".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 1)
            ]
        );

        let counter: Counter = ["z", "y", "x"].into_iter().collect();
        let top: Vec<String> = counter
            .most_common(Some(2))
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(top, vec!["x", "y"]);
    }

    #[test]
    fn test_merge() {
        let mut left: Counter = ["a", "b"].into_iter().collect();
        let right: Counter = ["b", "c"].into_iter().collect();
        left.merge(&right);

        assert_eq!(left.get("a"), 1);
        assert_eq!(left.get("b"), 2);
        assert_eq!(left.get("c"), 1);
    }

    #[test]
    fn test_serialize_as_sorted_pairs() {
        let counter: Counter = ["title:dog", "title:cat", "title:cat"].into_iter().collect();
        let json = serde_json::to_string(&counter).unwrap();
        assert_eq!(json, r#"[["title:cat",2],["title:dog",1]]"#);
    }
}
