//! Vocabulary index.
//!
//! This module holds the id/string bijection and the prefix index used to
//! prune segmentation candidates.

pub mod prefix;
pub mod vocab;

pub use prefix::{prefix_key, PrefixIndex};
pub use vocab::{Vocab, VocabR, Vocabulary, DEFAULT_PAD_TOKEN, PAD_ID};
