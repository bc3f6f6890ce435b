//! Regex-based tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{LineQueryError, Result};
use regex::Regex;
use std::sync::Arc;

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// Unlike [`WhitespaceTokenizer`](super::WhitespaceTokenizer), this is an
/// opt-in tokenizer: callers choose it when they want token boundaries other
/// than whitespace (for example `\w+` to shed punctuation).
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LineQueryError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LineQueryError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens = if self.gaps {
            // Extract gaps between matches
            let mut tokens = Vec::new();
            let mut last_end = 0;
            let mut position = 0;

            for mat in self.pattern.find_iter(text) {
                if mat.start() > last_end {
                    let gap_text = &text[last_end..mat.start()];
                    tokens.push(Token::with_offsets(
                        gap_text,
                        position,
                        last_end,
                        mat.start(),
                    ));
                    position += 1;
                }
                last_end = mat.end();
            }

            // Add final gap if any
            if last_end < text.len() {
                tokens.push(Token::with_offsets(
                    &text[last_end..],
                    position,
                    last_end,
                    text.len(),
                ));
            }

            tokens
        } else {
            // Extract matches
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
