//! Greedy longest-match BPE segmentation.
//!
//! Each input gets a terminal marker appended, then is covered left to
//! right by the longest vocabulary subword matching at the cursor. Subwords
//! are pre-filtered through the vocabulary's two-character prefix index, so
//! one step inspects only the few subwords sharing the next two characters.

use crate::core::{prefix_key, Vocabulary};
use crate::encoding::cache::{CacheStats, SegmentCache};
use compact_str::CompactString;
use std::sync::Arc;

/// Default end-of-word marker.
pub const DEFAULT_TERMINAL_MARKER: char = '#';

/// Greedy BPE segmenter with a per-instance memo of past inputs.
#[derive(Debug)]
pub struct GreedySegmenter {
    /// Vocabulary providing candidates
    vocab: Arc<Vocabulary>,
    /// End-of-word marker appended to every input
    marker: char,
    /// Marked input -> subwords
    cache: SegmentCache,
}

impl GreedySegmenter {
    /// Create a segmenter using [`DEFAULT_TERMINAL_MARKER`].
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self::with_marker(vocab, DEFAULT_TERMINAL_MARKER)
    }

    /// Create a segmenter with a custom end-of-word marker.
    ///
    /// The marker must not occur inside the inputs that will be segmented.
    pub fn with_marker(vocab: Arc<Vocabulary>, marker: char) -> Self {
        Self {
            vocab,
            marker,
            cache: SegmentCache::new(),
        }
    }

    /// The end-of-word marker.
    #[inline]
    pub fn marker(&self) -> char {
        self.marker
    }

    /// The vocabulary candidates come from.
    #[inline]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The segmentation memo.
    #[inline]
    pub fn cache(&self) -> &SegmentCache {
        &self.cache
    }

    /// Cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Segment `token` into subwords.
    ///
    /// The last subword always carries the marker, and for any non-empty
    /// token the marker never stands alone. Concatenating the result and
    /// dropping the trailing marker gives back `token`.
    pub fn segment(&self, token: &str) -> Vec<CompactString> {
        let mut marked = String::with_capacity(token.len() + self.marker.len_utf8());
        marked.push_str(token);
        marked.push(self.marker);

        self.cache
            .get_or_insert_with(&marked, |marked| self.segment_marked(marked))
    }

    /// Segment an already marker-terminated string, bypassing the cache.
    fn segment_marked(&self, marked: &str) -> Vec<CompactString> {
        let prefixes = self.vocab.prefixes();

        let mut pieces = Vec::new();
        // `pos` is a byte offset; `remaining` counts characters.
        let mut pos = 0;
        let mut remaining = marked.chars().count();

        while pos < marked.len() {
            let rest = &marked[pos..];

            // Two characters left: the last one is the marker, keep it
            // glued to its neighbour.
            if remaining <= 2 {
                pieces.push(CompactString::new(rest));
                break;
            }

            let mut best: Option<(&str, usize)> = None;
            for candidate in prefixes.candidates(prefix_key(rest)) {
                if !rest.starts_with(candidate.as_str()) {
                    continue;
                }
                let len = candidate.chars().count();
                // Would strand the marker on its own.
                if remaining - len == 1 {
                    continue;
                }
                // Strictly longer only, so the earlier vocabulary entry wins.
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((candidate.as_str(), len));
                }
            }

            let (piece, len) = match best {
                Some(found) => found,
                None => match rest.chars().next() {
                    Some(ch) => (&rest[..ch.len_utf8()], 1),
                    None => break,
                },
            };

            pieces.push(CompactString::new(piece));
            pos += piece.len();
            remaining -= len;
        }

        pieces
    }
}
