//! Pre-tokenization for the `single` code representation.

pub mod split;

pub use split::Splitter;
