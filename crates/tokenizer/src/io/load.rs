//! Vocabulary file loading.
//!
//! A vocabulary file is UTF-8 text with one subword per line. Line order
//! defines the ids; trailing whitespace on each line is not part of the
//! subword.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use subtok_core::{Result, TokenizerError, Vocabulary};
use tracing::debug;

/// Vocabulary loader - reads subword lists from disk.
pub struct VocabularyLoader;

impl VocabularyLoader {
    fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path).map_err(|e| TokenizerError::io(path, e))?;
        Ok(BufReader::new(file))
    }

    /// Read the subwords of a vocabulary file, in file order.
    pub fn read_subwords(path: &Path) -> Result<Vec<String>> {
        let mut subwords = Vec::new();
        for line in Self::open(path)?.lines() {
            let line = line.map_err(|e| TokenizerError::io(path, e))?;
            subwords.push(line.trim_end().to_string());
        }

        debug!(path = %path.display(), subwords = subwords.len(), "read vocabulary file");
        Ok(subwords)
    }

    /// Load a vocabulary file and build its index.
    ///
    /// # Arguments
    /// * `path` - Vocabulary file
    /// * `pad_token` - Spelling of the sentinel at id 0
    pub fn load(path: &Path, pad_token: &str) -> Result<Vocabulary> {
        let subwords = Self::read_subwords(path)?;
        Ok(Vocabulary::with_pad_token(pad_token, subwords))
    }

    /// Count the entries of a vocabulary file without indexing it.
    pub fn count_lines(path: &Path) -> Result<usize> {
        let mut count = 0;
        for line in Self::open(path)?.split(b'\n') {
            line.map_err(|e| TokenizerError::io(path, e))?;
            count += 1;
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtok_core::PAD_ID;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("subtok_test_load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_vocabulary() {
        let path = write_temp("vocab_basic.txt", "ab\na\nb  \r\nc\nab#\n");

        let vocab = VocabularyLoader::load(&path, "<PAD>").unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.lookup("ab"), 1);
        assert_eq!(vocab.lookup("b"), 3);
        assert_eq!(vocab.lookup("ab#"), 5);
        assert_eq!(vocab.get_token(PAD_ID), Some("<PAD>"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_count_lines() {
        let path = write_temp("vocab_count.txt", "x\ny\nz\n");
        assert_eq!(VocabularyLoader::count_lines(&path).unwrap(), 3);

        let path_no_newline = write_temp("vocab_count_nl.txt", "x\ny");
        assert_eq!(VocabularyLoader::count_lines(&path_no_newline).unwrap(), 2);

        std::fs::remove_file(path).ok();
        std::fs::remove_file(path_no_newline).ok();
    }

    #[test]
    fn test_missing_file() {
        let err = VocabularyLoader::load(Path::new("/nonexistent/vocab.txt"), "<PAD>").unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, TokenizerError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = std::env::temp_dir().join("subtok_test_load");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("vocab_bad.txt");
        std::fs::write(&path, [b'a', b'\n', 0xff, 0xfe, b'\n']).unwrap();

        assert!(VocabularyLoader::read_subwords(&path).is_err());

        std::fs::remove_file(path).ok();
    }
}
