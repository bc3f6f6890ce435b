//! Inverted line index: word -> ascending set of line numbers.

use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{LineQueryError, Result};
use crate::index::builder::LineIndexBuilder;
use crate::query::QueryResult;
use crate::store::LineStore;

lazy_static! {
    /// Match set handed to every miss. Immutable, so one instance is shared
    /// by all of them and a miss allocates nothing.
    static ref NO_MATCHES: Arc<BTreeSet<u64>> = Arc::new(BTreeSet::new());
}

/// The reverse index from word to the set of line numbers where it occurs.
///
/// A `LineIndex` is built once by [`LineIndexBuilder`] and immutable
/// afterwards. It holds the [`LineStore`] it was built from behind an `Arc`
/// and shares it with every [`QueryResult`] it hands out, so results can
/// reconstruct matched lines after the index itself is gone.
///
/// # Examples
///
/// ```
/// use linequery::index::LineIndex;
///
/// let text = "the fox\nthe dog\na fox runs\n";
/// let index = LineIndex::from_reader(text.as_bytes()).unwrap();
///
/// let result = index.query("fox");
/// assert_eq!(result.count(), 2);
/// ```
#[derive(Debug)]
pub struct LineIndex {
    /// The text this index was built from, shared with every result.
    store: Arc<LineStore>,
    /// Word postings; ordered so lookup is O(log W) in the distinct words.
    words: BTreeMap<String, Arc<BTreeSet<u64>>>,
}

/// Summary counters for a built index.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexStats {
    /// Lines held by the store.
    pub lines: usize,
    /// Distinct words in the index.
    pub distinct_words: usize,
    /// Total word -> line postings.
    pub postings: usize,
}

impl LineIndex {
    /// Create an index over a built store and word map.
    pub(crate) fn new(store: Arc<LineStore>, words: BTreeMap<String, Arc<BTreeSet<u64>>>) -> Self {
        LineIndex { store, words }
    }

    /// Build an index from a line source with default settings.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        LineIndexBuilder::new().build(reader)
    }

    /// Build an index from the file at `path` with default settings.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        LineIndexBuilder::new().build_from_path(path)
    }

    /// Look up `word` and return a result over its matching lines.
    ///
    /// A hit shares the word's posting set; a miss shares the process-wide
    /// empty set. Lookup never mutates the index.
    pub fn query(&self, word: &str) -> QueryResult {
        let lines = match self.words.get(word) {
            Some(lines) => Arc::clone(lines),
            None => Arc::clone(&NO_MATCHES),
        };
        QueryResult::new(word, lines, Arc::clone(&self.store))
    }

    /// Check whether `word` occurred anywhere in the input.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// The line store this index was built from.
    pub fn store(&self) -> &Arc<LineStore> {
        &self.store
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of lines in the bound store.
    pub fn line_count(&self) -> usize {
        self.store.len()
    }

    /// Iterate the indexed words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(|word| word.as_str())
    }

    /// Summary counters for this index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.store.len(),
            distinct_words: self.words.len(),
            postings: self.words.values().map(|lines| lines.len()).sum(),
        }
    }

    /// Check index integrity: every posted line number must be a valid index
    /// into the bound store, and no posting set may be empty.
    pub fn verify(&self) -> Result<()> {
        let size = self.store.len() as u64;
        for (word, lines) in &self.words {
            if lines.is_empty() {
                return Err(LineQueryError::index(format!(
                    "word {word:?} has an empty posting set"
                )));
            }
            for &number in lines.iter() {
                if number >= size {
                    return Err(LineQueryError::index(format!(
                        "word {word:?} posts line {number}, but the store holds {size} lines"
                    )));
                }
            }
        }
        Ok(())
    }
}
