//! Configuration for line index construction.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Configuration for building a [`LineIndex`](crate::index::LineIndex).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Number of lines to pre-allocate in the line store.
    #[serde(default)]
    pub initial_capacity: usize,

    /// Regex pattern for token extraction.
    ///
    /// `None` selects whitespace splitting, which keeps punctuation attached
    /// to words and preserves case.
    #[serde(default)]
    pub token_pattern: Option<String>,
}

impl IndexConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        IndexConfig::default()
    }

    /// Set the number of lines to pre-allocate in the line store.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set a regex pattern for token extraction.
    pub fn token_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.token_pattern = Some(pattern.into());
        self
    }

    /// Build the tokenizer this configuration selects.
    ///
    /// Fails when `token_pattern` is present but not a valid regex.
    pub fn tokenizer(&self) -> Result<Box<dyn Tokenizer>> {
        match &self.token_pattern {
            Some(pattern) => Ok(Box::new(RegexTokenizer::with_pattern(pattern)?)),
            None => Ok(Box::new(WhitespaceTokenizer::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_selects_whitespace() {
        let config = IndexConfig::new();
        assert_eq!(config.initial_capacity, 0);
        assert_eq!(config.tokenizer().unwrap().name(), "whitespace");
    }

    #[test]
    fn test_token_pattern_selects_regex() {
        let config = IndexConfig::new().token_pattern(r"\w+");
        assert_eq!(config.tokenizer().unwrap().name(), "regex");
    }

    #[test]
    fn test_invalid_token_pattern() {
        let config = IndexConfig::new().token_pattern("(unclosed");
        assert!(config.tokenizer().is_err());
    }

    #[test]
    fn test_config_round_trips_as_json() {
        let config = IndexConfig::new().initial_capacity(64).token_pattern(r"\w+");
        let json = serde_json::to_string(&config).unwrap();
        let restored: IndexConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.initial_capacity, 64);
        assert_eq!(restored.token_pattern.as_deref(), Some(r"\w+"));
    }
}
