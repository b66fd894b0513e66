//! Whole-word splitting for the `single` code representation.
//!
//! A raw code token is cleaned of quoting and line-break characters, its
//! underscores are turned into word breaks, and the result is split on
//! whitespace. Each piece is then looked up whole, without subword
//! segmentation.

/// Characters removed before splitting.
pub const STRIPPED_CHARS: &[char] = &['\n', '\r', '`', '\''];

/// Character treated as a word break inside identifiers.
pub const WORD_BREAK: char = '_';

/// Text splitter for the `single` mode.
#[derive(Debug, Clone)]
pub struct Splitter {
    /// Characters dropped from the token
    stripped: &'static [char],
    /// Character replaced by a space
    word_break: Option<char>,
}

impl Splitter {
    /// Create a splitter with custom stripped characters and word break.
    pub fn new(stripped: &'static [char], word_break: Option<char>) -> Self {
        Self {
            stripped,
            word_break,
        }
    }

    /// Create a splitter that only splits on whitespace.
    pub fn whitespace() -> Self {
        Self::new(&[], None)
    }

    /// Split a token into pieces.
    pub fn split(&self, token: &str) -> Vec<String> {
        let cleaned: String = token
            .chars()
            .filter(|c| !self.stripped.contains(c))
            .map(|c| match self.word_break {
                Some(br) if c == br => ' ',
                _ => c,
            })
            .collect();

        cleaned.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(STRIPPED_CHARS, Some(WORD_BREAK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_split() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("get_user_name"), vec!["get", "user", "name"]);
    }

    #[test]
    fn test_strips_quotes_and_newlines() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("'it''s'"), vec!["its"]);
        assert_eq!(splitter.split("`cmd`\r\n"), vec!["cmd"]);
        assert_eq!(splitter.split("\"str\""), vec!["\"str\""]);
    }

    #[test]
    fn test_whitespace_split() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("a  b\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_separators() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split("__"), Vec::<String>::new());
        assert_eq!(splitter.split(""), Vec::<String>::new());
    }

    #[test]
    fn test_plain_whitespace_splitter() {
        let splitter = Splitter::whitespace();
        assert_eq!(splitter.split("get_name 'x'"), vec!["get_name", "'x'"]);
    }
}
