//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// This is the default tokenizer. It performs no normalization: punctuation
/// stays attached to its word and case is preserved, so `"fox."` and `"fox"`
/// are distinct tokens.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start = None;

        for (offset, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(begin) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[begin..offset],
                        position,
                        begin,
                        offset,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }

        // Trailing word, if the line does not end in whitespace
        if let Some(begin) = start {
            tokens.push(Token::with_offsets(
                &text[begin..],
                position,
                begin,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
