//! Single-pass line index construction.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::index::config::IndexConfig;
use crate::index::inverted::LineIndex;
use crate::store::LineStore;

/// Builder for [`LineIndex`].
///
/// The build is one sequential pass: each line read from the source is
/// tokenized, appended to the line store, and posted under every one of its
/// tokens. No line is revisited, and a read error abandons the whole
/// construction.
///
/// # Examples
///
/// ```
/// use linequery::index::LineIndexBuilder;
///
/// let text = "the fox\nthe dog\n";
/// let index = LineIndexBuilder::new().build(text.as_bytes()).unwrap();
/// assert_eq!(index.line_count(), 2);
/// ```
pub struct LineIndexBuilder {
    tokenizer: Box<dyn Tokenizer>,
    initial_capacity: usize,
}

impl LineIndexBuilder {
    /// Create a builder with default settings (whitespace tokenization, no
    /// pre-allocation).
    pub fn new() -> Self {
        LineIndexBuilder {
            tokenizer: Box::new(WhitespaceTokenizer::new()),
            initial_capacity: 0,
        }
    }

    /// Create a builder from a configuration.
    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        Ok(LineIndexBuilder {
            tokenizer: config.tokenizer()?,
            initial_capacity: config.initial_capacity,
        })
    }

    /// Replace the tokenizer.
    pub fn tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Pre-allocate room for `capacity` lines in the store.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Build a line index by consuming `reader` to exhaustion.
    pub fn build<R: BufRead>(self, reader: R) -> Result<LineIndex> {
        let mut store = LineStore::with_capacity(self.initial_capacity);
        let mut words: BTreeMap<String, BTreeSet<u64>> = BTreeMap::new();

        for line in reader.lines() {
            let line = line?;
            let tokens: Vec<Token> = self.tokenizer.tokenize(&line)?.collect();
            let number = store.append(line);
            for token in tokens {
                words.entry(token.text).or_default().insert(number);
            }
        }

        let words = words
            .into_iter()
            .map(|(word, lines)| (word, Arc::new(lines)))
            .collect();

        Ok(LineIndex::new(Arc::new(store), words))
    }

    /// Build a line index from the file at `path`.
    ///
    /// Open and read failures surface as I/O errors before any query can be
    /// issued.
    pub fn build_from_path<P: AsRef<Path>>(self, path: P) -> Result<LineIndex> {
        let file = File::open(path)?;
        self.build(BufReader::new(file))
    }
}

impl Default for LineIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::RegexTokenizer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_assigns_sequential_line_numbers() {
        let index = LineIndexBuilder::new()
            .build("a\nb\nc\n".as_bytes())
            .unwrap();

        assert_eq!(index.line_count(), 3);
        assert_eq!(index.store().get(0).unwrap(), "a");
        assert_eq!(index.store().get(2).unwrap(), "c");
    }

    #[test]
    fn test_build_posts_every_token() {
        let index = LineIndexBuilder::new()
            .build("the fox\nthe dog\n".as_bytes())
            .unwrap();

        let result = index.query("the");
        assert_eq!(result.count(), 2);
        let result = index.query("dog");
        assert_eq!(result.count(), 1);
    }

    #[test]
    fn test_build_with_custom_tokenizer() {
        let index = LineIndexBuilder::new()
            .tokenizer(Box::new(RegexTokenizer::with_pattern(r"\w+").unwrap()))
            .build("fox. fox!\n".as_bytes())
            .unwrap();

        // Punctuation is shed by the regex tokenizer, so both tokens collapse
        assert_eq!(index.query("fox").count(), 1);
        assert!(!index.contains("fox."));
    }

    #[test]
    fn test_build_with_initial_capacity() {
        let index = LineIndexBuilder::new()
            .initial_capacity(8)
            .build("a\nb\n".as_bytes())
            .unwrap();

        assert_eq!(index.store().capacity(), 8);
    }

    #[test]
    fn test_build_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "the fox").unwrap();
        writeln!(file, "a fox runs").unwrap();
        file.flush().unwrap();

        let index = LineIndexBuilder::new().build_from_path(file.path()).unwrap();
        assert_eq!(index.line_count(), 2);
        assert_eq!(index.query("fox").count(), 2);
    }

    #[test]
    fn test_build_from_missing_path() {
        let result = LineIndexBuilder::new().build_from_path("/no/such/file.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_empty_input() {
        let index = LineIndexBuilder::new().build("".as_bytes()).unwrap();
        assert_eq!(index.line_count(), 0);
        assert!(index.is_empty());
    }
}
