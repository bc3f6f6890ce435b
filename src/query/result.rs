//! Read-only view over one word lookup.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::Result;
use crate::store::LineStore;

/// The outcome of one word lookup against a
/// [`LineIndex`](crate::index::LineIndex).
///
/// A result binds the sought word, the shared set of matching line numbers,
/// and the shared [`LineStore`], so the caller can reconstruct every matched
/// line by index. It is a read-only view: creating, reading, and dropping a
/// result never touches the index or the store.
///
/// # Examples
///
/// ```
/// use linequery::index::LineIndex;
///
/// let index = LineIndex::from_reader("the fox\nthe dog\n".as_bytes()).unwrap();
/// let result = index.query("dog");
///
/// assert_eq!(result.count(), 1);
/// assert_eq!(result.line(1).unwrap(), "the dog");
/// ```
#[derive(Clone, Debug)]
pub struct QueryResult {
    /// The word that was looked up.
    word: String,
    /// Matching line numbers, ascending and unique. Shared with the index
    /// (or with every other miss, for absent words).
    lines: Arc<BTreeSet<u64>>,
    /// The text the index was built from.
    store: Arc<LineStore>,
}

impl QueryResult {
    /// Create a result view. Only the index constructs these.
    pub(crate) fn new<S: Into<String>>(
        word: S,
        lines: Arc<BTreeSet<u64>>,
        store: Arc<LineStore>,
    ) -> Self {
        QueryResult {
            word: word.into(),
            lines,
            store,
        }
    }

    /// The word this result answers for.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of lines the word occurs on.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Check whether the word never occurred in the input.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the matching line numbers in ascending order.
    pub fn line_numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.lines.iter().copied()
    }

    /// Fetch the original text of line `number` from the bound store.
    pub fn line(&self, number: u64) -> Result<&str> {
        self.store.get(number)
    }

    /// Collect the matches as `(line number, line text)` pairs, ascending.
    pub fn matches(&self) -> Result<Vec<(u64, &str)>> {
        self.lines
            .iter()
            .map(|&number| Ok((number, self.store.get(number)?)))
            .collect()
    }

    /// The shared match set handle.
    pub fn line_set(&self) -> &Arc<BTreeSet<u64>> {
        &self.lines
    }

    /// The shared line store handle.
    pub fn store(&self) -> &Arc<LineStore> {
        &self.store
    }

    /// Render a human-readable report: the word, the match count, then one
    /// row per matching line with its 1-based number and full text.
    pub fn format(&self) -> Result<String> {
        let mut out = format!("{} occurs {} times.\n", self.word, self.lines.len());
        for &number in self.lines.iter() {
            let text = self.store.get(number)?;
            out.push_str(&format!("\t(line {}) {}\n", number + 1, text));
        }
        Ok(out)
    }
}
