//! Error types for the linequery library.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is the [`LineQueryError`] enum.
//!
//! # Examples
//!
//! ```
//! use linequery::error::{LineQueryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LineQueryError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for linequery operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the string-payload
/// variants.
#[derive(Error, Debug)]
pub enum LineQueryError {
    /// I/O errors (reading the input source, writing reports, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Line store access outside the valid index range
    #[error("line index {index} out of bounds (store holds {size} lines)")]
    OutOfBounds { index: u64, size: u64 },

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Analysis-related errors (tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Query-related errors
    #[error("Query error: {0}")]
    Query(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LineQueryError.
pub type Result<T> = std::result::Result<T, LineQueryError>;

impl LineQueryError {
    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        LineQueryError::Index(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LineQueryError::Analysis(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LineQueryError::Query(msg.into())
    }

    /// Create a new out-of-bounds error for a line store access.
    pub fn out_of_bounds(index: u64, size: u64) -> Self {
        LineQueryError::OutOfBounds { index, size }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LineQueryError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LineQueryError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
