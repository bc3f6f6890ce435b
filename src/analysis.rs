//! Text analysis: tokens and tokenizers.
//!
//! Analysis is the seam between raw line text and the index: a
//! [`Tokenizer`](tokenizer::Tokenizer) turns one line into a stream of
//! [`Token`](token::Token)s, and the index records one posting per token.

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer, WhitespaceTokenizer};
