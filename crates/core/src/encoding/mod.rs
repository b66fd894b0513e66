//! Greedy segmentation.
//!
//! This module provides the longest-match BPE segmenter and the memo
//! that replays its results for inputs seen before.

pub mod cache;
pub mod greedy;

pub use cache::{CacheStats, SegmentCache};
pub use greedy::{GreedySegmenter, DEFAULT_TERMINAL_MARKER};
