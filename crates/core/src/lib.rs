//! subtok-core - Subword vocabulary and greedy BPE segmentation
//!
//! This crate provides the data structures behind code-token subword
//! translation, independent of how the vocabulary is loaded or which
//! representation mode is active.
//!
//! # Features
//!
//! - Dense id assignment with a reserved padding/unknown id 0
//! - Two-character prefix index for pruning segmentation candidates
//! - Greedy longest-match segmentation with an end-of-word marker
//! - Thread-safe memoization of segmentation results
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use subtok_core::{GreedySegmenter, Vocabulary};
//!
//! let vocab = Arc::new(Vocabulary::from_subwords(["ab", "a", "b", "c", "ab#"]));
//! let segmenter = GreedySegmenter::new(vocab.clone());
//!
//! let pieces = segmenter.segment("abc");
//! assert_eq!(pieces, ["ab", "c#"]);
//! assert_eq!(vocab.lookup("ab"), 1);
//! assert_eq!(vocab.lookup("c#"), 0);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Vocabulary index
pub mod core;
pub use crate::core::{prefix_key, PrefixIndex, Vocabulary, DEFAULT_PAD_TOKEN, PAD_ID};

// Segmentation
pub mod encoding;
pub use encoding::{CacheStats, GreedySegmenter, SegmentCache, DEFAULT_TERMINAL_MARKER};
