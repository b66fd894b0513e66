//! Vocabulary storage and lookup.
//!
//! Ids follow the order of the source subwords, starting at 1. Id 0 is held
//! by a padding sentinel that doubles as the id of every unknown string.

use crate::core::prefix::PrefixIndex;
use ahash::AHashMap;
use compact_str::CompactString;
use tracing::{debug, warn};

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Reverse mapping: ID -> token string, indexed by ID
pub type VocabR = Vec<CompactString>;

/// ID reserved for the padding sentinel and unknown strings.
pub const PAD_ID: u32 = 0;

/// Default spelling of the padding sentinel.
pub const DEFAULT_PAD_TOKEN: &str = "<PAD>";

/// Immutable subword vocabulary with its prefix index.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Forward mapping: token string -> ID
    vocab: Vocab,
    /// Reverse mapping, `vocab_r[0]` is the sentinel
    vocab_r: VocabR,
    /// Candidate lookup for greedy segmentation
    prefixes: PrefixIndex,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered sequence of subwords, using
    /// [`DEFAULT_PAD_TOKEN`] as the sentinel.
    pub fn from_subwords<I, S>(subwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_pad_token(DEFAULT_PAD_TOKEN, subwords)
    }

    /// Build a vocabulary with a custom sentinel spelling.
    ///
    /// The i-th subword (0-indexed) gets ID `i + 1`. A repeated subword
    /// consumes an ID at every occurrence and string lookups resolve to the
    /// last one. The sentinel keeps ID 0 even if the source lists it, and is
    /// indexed as a segmentation candidate like any other string.
    pub fn with_pad_token<I, S>(pad_token: &str, subwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let subwords = subwords.into_iter();
        let (lower, _) = subwords.size_hint();

        let mut vocab = Vocab::with_capacity(lower + 1);
        let mut vocab_r = VocabR::with_capacity(lower + 1);
        let mut prefixes = PrefixIndex::with_capacity(lower / 4);

        let pad = CompactString::new(pad_token);
        vocab.insert(pad.clone(), PAD_ID);
        prefixes.insert(pad_token);
        vocab_r.push(pad);

        for subword in subwords {
            let subword = subword.as_ref();
            let id = vocab_r.len() as u32;
            vocab_r.push(CompactString::new(subword));

            if subword == pad_token {
                warn!(token = subword, id, "sentinel listed in vocabulary, keeping id 0");
                continue;
            }

            if let Some(previous) = vocab.insert(CompactString::new(subword), id) {
                warn!(
                    token = subword,
                    id,
                    previous,
                    "duplicate vocabulary entry, keeping later id"
                );
            }
            prefixes.insert(subword);
        }

        debug!(
            subwords = vocab_r.len() - 1,
            prefix_keys = prefixes.len(),
            "built vocabulary"
        );

        Self {
            vocab,
            vocab_r,
            prefixes,
        }
    }

    /// Get the ID for a token string, if present.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the ID for a token string, falling back to [`PAD_ID`].
    ///
    /// Never fails: strings never seen in the vocabulary map to the sentinel.
    #[inline]
    pub fn lookup(&self, token: &str) -> u32 {
        self.get_id(token).unwrap_or(PAD_ID)
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.vocab_r.get(id as usize).map(|s| s.as_str())
    }

    /// The sentinel string stored under [`PAD_ID`].
    #[inline]
    pub fn pad_token(&self) -> &str {
        &self.vocab_r[PAD_ID as usize]
    }

    /// Number of IDs, including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab_r.len()
    }

    /// Check if the vocabulary holds nothing but the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab_r.len() <= 1
    }

    /// Prefix index over the subwords.
    #[inline]
    pub fn prefixes(&self) -> &PrefixIndex {
        &self.prefixes
    }

    /// Iterate over `(id, subword)` pairs, sentinel excluded.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.vocab_r
            .iter()
            .enumerate()
            .skip(1)
            .map(|(id, s)| (id as u32, s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary {
        Vocabulary::from_subwords(["ab", "a", "b", "c", "ab#"])
    }

    #[test]
    fn test_ids_start_at_one() {
        let vocab = sample();

        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.get_id("ab"), Some(1));
        assert_eq!(vocab.get_id("ab#"), Some(5));
        assert_eq!(vocab.get_token(1), Some("ab"));
        assert_eq!(vocab.get_token(5), Some("ab#"));
        assert_eq!(vocab.get_token(6), None);
    }

    #[test]
    fn test_sentinel() {
        let vocab = sample();

        assert_eq!(vocab.get_token(PAD_ID), Some("<PAD>"));
        assert_eq!(vocab.pad_token(), "<PAD>");
        assert_eq!(vocab.lookup("<PAD>"), PAD_ID);
    }

    #[test]
    fn test_unknown_maps_to_sentinel() {
        let vocab = sample();

        assert_eq!(vocab.get_id("zzz"), None);
        assert_eq!(vocab.lookup("zzz"), PAD_ID);
        assert_eq!(vocab.lookup(""), PAD_ID);
    }

    #[test]
    fn test_bijection() {
        let vocab = Vocabulary::from_subwords(["self", "se", "lf#", "x", "ünï", "_"]);

        for id in 1..vocab.len() as u32 {
            let token = vocab.get_token(id).unwrap();
            assert_eq!(vocab.lookup(token), id);
        }
    }

    #[test]
    fn test_duplicates_keep_last_id() {
        let vocab = Vocabulary::from_subwords(["a", "b", "a", "c"]);

        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.lookup("a"), 3);
        assert_eq!(vocab.lookup("c"), 4);
        assert_eq!(vocab.get_token(1), Some("a"));
        assert_eq!(vocab.get_token(3), Some("a"));
        assert_eq!(vocab.prefixes().candidates("a"), &["a"]);
    }

    #[test]
    fn test_pad_token_in_source_keeps_sentinel_id() {
        let vocab = Vocabulary::from_subwords(["a", "<PAD>"]);

        assert_eq!(vocab.lookup("<PAD>"), PAD_ID);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_custom_pad_token() {
        let vocab = Vocabulary::with_pad_token("<unk>", ["a"]);

        assert_eq!(vocab.pad_token(), "<unk>");
        assert_eq!(vocab.lookup("<unk>"), PAD_ID);
        assert!(!vocab.is_empty());
        assert!(Vocabulary::from_subwords(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_prefix_index_built() {
        let vocab = sample();

        assert_eq!(vocab.prefixes().candidates("ab"), &["ab", "ab#"]);
        assert_eq!(vocab.prefixes().candidates("<P"), &["<PAD>"]);
    }

    #[test]
    fn test_iter_skips_sentinel() {
        let vocab = sample();
        let items: Vec<(u32, &str)> = vocab.iter().collect();

        assert_eq!(items.len(), 5);
        assert_eq!(items[0], (1, "ab"));
        assert_eq!(items[4], (5, "ab#"));
    }
}
