//! One translation strategy per code representation mode.

use crate::pre_tokenizer::Splitter;
use crate::ulm::UlmSegmenter;
use compact_str::CompactString;
use std::sync::Arc;
use subtok_core::{CacheStats, GreedySegmenter, Result, Vocabulary};

/// Whole-word lookup after cleanup and splitting.
#[derive(Debug)]
pub struct SingleStrategy {
    vocab: Arc<Vocabulary>,
    splitter: Splitter,
}

impl SingleStrategy {
    pub fn new(vocab: Arc<Vocabulary>) -> Self {
        Self {
            vocab,
            splitter: Splitter::default(),
        }
    }

    pub fn translate(&self, token: &str) -> Vec<u32> {
        self.splitter
            .split(token)
            .iter()
            .map(|piece| self.vocab.lookup(piece))
            .collect()
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }
}

/// Greedy subword segmentation followed by lookup.
#[derive(Debug)]
pub struct BpeStrategy {
    segmenter: GreedySegmenter,
}

impl BpeStrategy {
    pub fn new(vocab: Arc<Vocabulary>, marker: char) -> Self {
        Self {
            segmenter: GreedySegmenter::with_marker(vocab, marker),
        }
    }

    /// Translate a token. A token already known to be one subword is
    /// looked up as-is.
    pub fn translate(&self, token: &str, is_subtokenized: bool) -> Vec<u32> {
        let vocab = self.segmenter.vocab();
        if is_subtokenized {
            return vec![vocab.lookup(token)];
        }

        self.segmenter
            .segment(token)
            .iter()
            .map(|piece| vocab.lookup(piece))
            .collect()
    }

    pub fn segment(&self, token: &str) -> Vec<CompactString> {
        self.segmenter.segment(token)
    }

    pub fn vocab(&self) -> &Vocabulary {
        self.segmenter.vocab()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.segmenter.cache_stats()
    }
}

/// Delegation to an external unigram model.
#[derive(Debug)]
pub struct UlmStrategy {
    model: UlmSegmenter,
}

impl UlmStrategy {
    pub fn new(model: UlmSegmenter) -> Self {
        Self { model }
    }

    pub fn translate(&self, token: &str) -> Result<Vec<u32>> {
        self.model.encode(token)
    }

    pub fn pieces(&self, token: &str) -> Result<Vec<String>> {
        self.model.pieces(token)
    }
}

/// Strategy selected once, at construction.
#[derive(Debug)]
pub enum Strategy {
    Single(SingleStrategy),
    Bpe(BpeStrategy),
    Ulm(UlmStrategy),
}

impl Strategy {
    pub fn translate(&self, token: &str, is_subtokenized: bool) -> Result<Vec<u32>> {
        match self {
            Strategy::Single(single) => Ok(single.translate(token)),
            Strategy::Bpe(bpe) => Ok(bpe.translate(token, is_subtokenized)),
            Strategy::Ulm(ulm) => ulm.translate(token),
        }
    }

    /// The in-process vocabulary, absent for the ULM strategy.
    pub fn vocab(&self) -> Option<&Vocabulary> {
        match self {
            Strategy::Single(single) => Some(single.vocab()),
            Strategy::Bpe(bpe) => Some(bpe.vocab()),
            Strategy::Ulm(_) => None,
        }
    }
}
