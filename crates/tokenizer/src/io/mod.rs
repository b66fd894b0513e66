//! Reading vocabularies from disk.

pub mod load;

pub use load::VocabularyLoader;
