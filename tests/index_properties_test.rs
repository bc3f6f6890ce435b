//! Invariant checks over built indices.

use std::sync::Arc;

use linequery::error::Result;
use linequery::index::LineIndex;

const CORPUS: &str = "\
the quick brown fox jumps over the lazy dog
pack my box with five dozen liquor jugs
how vexingly quick daft zebras jump
the five boxing wizards jump quickly
sphinx of black quartz judge my vow
";

#[test]
fn test_every_posting_is_a_valid_store_index() -> Result<()> {
    let index = LineIndex::from_reader(CORPUS.as_bytes())?;

    let words: Vec<String> = index.words().map(str::to_string).collect();
    for word in words {
        for number in index.query(&word).line_numbers() {
            assert!(
                (number as usize) < index.store().len(),
                "{word:?} posts line {number} past the store"
            );
            // And the store really resolves it
            index.store().get(number)?;
        }
    }

    Ok(())
}

#[test]
fn test_match_sets_are_strictly_ascending() -> Result<()> {
    let index = LineIndex::from_reader(CORPUS.as_bytes())?;

    let words: Vec<String> = index.words().map(str::to_string).collect();
    for word in words {
        let numbers: Vec<u64> = index.query(&word).line_numbers().collect();
        for pair in numbers.windows(2) {
            assert!(pair[0] < pair[1], "{word:?} postings not ascending");
        }
    }

    Ok(())
}

#[test]
fn test_repeated_occurrences_on_one_line_post_once() -> Result<()> {
    let index = LineIndex::from_reader("dog dog dog\ndog\n".as_bytes())?;

    let numbers: Vec<u64> = index.query("dog").line_numbers().collect();
    assert_eq!(numbers, vec![0, 1]);

    Ok(())
}

#[test]
fn test_queries_are_idempotent() -> Result<()> {
    let index = LineIndex::from_reader(CORPUS.as_bytes())?;

    let first: Vec<u64> = index.query("quick").line_numbers().collect();
    let second: Vec<u64> = index.query("quick").line_numbers().collect();
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_all_misses_share_one_set_across_results() -> Result<()> {
    let index = LineIndex::from_reader(CORPUS.as_bytes())?;

    let results: Vec<_> = ["missing", "absent", "nowhere"]
        .iter()
        .map(|word| index.query(word))
        .collect();

    for result in &results {
        assert!(result.is_empty());
        assert!(Arc::ptr_eq(result.line_set(), results[0].line_set()));
    }

    Ok(())
}

#[test]
fn test_hits_share_the_posting_set_with_the_index() -> Result<()> {
    let index = LineIndex::from_reader(CORPUS.as_bytes())?;

    let first = index.query("jump");
    let second = index.query("jump");
    assert!(Arc::ptr_eq(first.line_set(), second.line_set()));

    Ok(())
}

#[test]
fn test_verify_accepts_every_built_index() -> Result<()> {
    for input in ["", "one\n", CORPUS] {
        let index = LineIndex::from_reader(input.as_bytes())?;
        index.verify()?;
    }

    Ok(())
}

#[test]
fn test_store_growth_during_build_keeps_order() -> Result<()> {
    // Enough lines to force several buffer growths from a cold store
    let input: String = (0..100).map(|i| format!("line number {i}\n")).collect();
    let index = LineIndex::from_reader(input.as_bytes())?;

    assert_eq!(index.line_count(), 100);
    for i in 0..100u64 {
        assert_eq!(index.store().get(i)?, format!("line number {i}"));
    }

    // Each line number token occurs exactly once, on its own line
    let numbers: Vec<u64> = index.query("42").line_numbers().collect();
    assert_eq!(numbers, vec![42]);

    Ok(())
}

#[test]
fn test_stats_add_up() -> Result<()> {
    let index = LineIndex::from_reader("a b\nb c\n".as_bytes())?;
    let stats = index.stats();

    assert_eq!(stats.lines, 2);
    assert_eq!(stats.distinct_words, 3);
    assert_eq!(stats.postings, 4);

    Ok(())
}
