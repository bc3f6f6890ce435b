//! Line index construction and lookup.
//!
//! This module provides the reverse index at the heart of the crate:
//! - [`LineIndexBuilder`] runs the single build pass over a line source
//! - [`LineIndex`] answers word lookups against the built mapping
//! - [`IndexConfig`] carries tokenizer and pre-allocation settings

pub mod builder;
pub mod config;
pub mod inverted;

pub use builder::LineIndexBuilder;
pub use config::IndexConfig;
pub use inverted::{IndexStats, LineIndex};
