//! Query results and their presentation.

pub mod result;

pub use result::QueryResult;
