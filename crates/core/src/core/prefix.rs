//! Two-character prefix index over vocabulary strings.
//!
//! The greedy segmenter only ever asks for subwords starting with the next
//! two characters of its input, so bucketing the vocabulary by that prefix
//! keeps each step down to a handful of candidates.

use ahash::AHashMap;
use compact_str::CompactString;

/// Length of a prefix key, in characters.
pub const PREFIX_CHARS: usize = 2;

/// Return the prefix key of `token`: its first two characters, or the whole
/// string when it is shorter.
#[inline]
pub fn prefix_key(token: &str) -> &str {
    match token.char_indices().nth(PREFIX_CHARS) {
        Some((end, _)) => &token[..end],
        None => token,
    }
}

/// Mapping from prefix key to the vocabulary strings sharing it.
///
/// Each bucket keeps its strings in insertion order, which is vocabulary
/// order when built by [`crate::Vocabulary`].
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    buckets: AHashMap<CompactString, Vec<CompactString>>,
}

impl PrefixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: AHashMap::with_capacity(capacity),
        }
    }

    /// Insert a token under its prefix key.
    ///
    /// Inserting the same token twice is a no-op.
    pub fn insert(&mut self, token: &str) {
        let bucket = self
            .buckets
            .entry(CompactString::new(prefix_key(token)))
            .or_default();
        if !bucket.iter().any(|t| t == token) {
            bucket.push(CompactString::new(token));
        }
    }

    /// Vocabulary strings starting with exactly `key`.
    ///
    /// Returns an empty slice when no string has that prefix.
    #[inline]
    pub fn candidates(&self, key: &str) -> &[CompactString] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct prefix keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if the index holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate over the prefix keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(|k| k.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        for token in iter {
            index.insert(token.as_ref());
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_key() {
        assert_eq!(prefix_key("abc"), "ab");
        assert_eq!(prefix_key("ab"), "ab");
        assert_eq!(prefix_key("a"), "a");
        assert_eq!(prefix_key(""), "");
        // Keys are counted in characters, not bytes
        assert_eq!(prefix_key("äöü"), "äö");
    }

    #[test]
    fn test_candidates_grouped_by_prefix() {
        let index: PrefixIndex = ["ab", "a", "b", "c", "ab#"].into_iter().collect();

        assert_eq!(index.candidates("ab"), &["ab", "ab#"]);
        assert_eq!(index.candidates("a"), &["a"]);
        assert_eq!(index.candidates("c"), &["c"]);
        assert!(index.candidates("zz").is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut index = PrefixIndex::new();
        index.insert("self");
        index.insert("self");
        index.insert("se#");

        assert_eq!(index.candidates("se"), &["self", "se#"]);
        assert_eq!(index.len(), 1);
    }
}
