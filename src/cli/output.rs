//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LineQueryArgs, OutputFormat};
use crate::error::Result;
use crate::query::QueryResult;

/// One matched line in a query report (1-based line number).
#[derive(Debug, Serialize, Deserialize)]
pub struct LineMatch {
    pub line: u64,
    pub text: String,
}

/// Result structure for query operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryReport {
    pub word: String,
    pub count: usize,
    pub matches: Vec<LineMatch>,
}

impl QueryReport {
    /// Build a report from a query result, resolving line text through the
    /// bound store.
    pub fn from_result(result: &QueryResult) -> Result<Self> {
        let matches = result
            .matches()?
            .into_iter()
            .map(|(number, text)| LineMatch {
                line: number + 1,
                text: text.to_string(),
            })
            .collect();

        Ok(QueryReport {
            word: result.word().to_string(),
            count: result.count(),
            matches,
        })
    }
}

/// Result structure for index validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationReport {
    pub lines: usize,
    pub distinct_words: usize,
    pub valid: bool,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LineQueryArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LineQueryArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("QueryReport") => {
            output_query_report_human(&value)
        }
        _ if std::any::type_name::<T>().contains("IndexStats") => output_index_stats_human(&value),
        _ => output_generic_human(&value),
    }
}

/// Output a query report in human format: the word, the occurrence count,
/// then one row per matching line with its 1-based number and full text.
fn output_query_report_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        let word = obj.get("word").and_then(|w| w.as_str()).unwrap_or("");
        let count = obj.get("count").and_then(|c| c.as_u64()).unwrap_or(0);
        println!("{word} occurs {count} times.");

        if let Some(matches) = obj.get("matches").and_then(|m| m.as_array()) {
            for entry in matches {
                let line = entry.get("line").and_then(|l| l.as_u64()).unwrap_or(0);
                let text = entry.get("text").and_then(|t| t.as_str()).unwrap_or("");
                println!("\t(line {line}) {text}");
            }
        }
    }
    Ok(())
}

/// Output index statistics in human format.
fn output_index_stats_human(value: &serde_json::Value) -> Result<()> {
    if let Some(obj) = value.as_object() {
        println!("Index Statistics:");
        println!("════════════════");

        if let Some(lines) = obj.get("lines").and_then(|l| l.as_u64()) {
            println!("Lines: {lines}");
        }

        if let Some(words) = obj.get("distinct_words").and_then(|w| w.as_u64()) {
            println!("Distinct words: {words}");
        }

        if let Some(postings) = obj.get("postings").and_then(|p| p.as_u64()) {
            println!("Postings: {postings}");
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LineQueryArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::LineIndex;

    #[test]
    fn test_query_report_from_result() {
        let index = LineIndex::from_reader("the fox\nthe dog\na fox runs\n".as_bytes()).unwrap();
        let report = QueryReport::from_result(&index.query("fox")).unwrap();

        assert_eq!(report.word, "fox");
        assert_eq!(report.count, 2);
        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].line, 1);
        assert_eq!(report.matches[0].text, "the fox");
        assert_eq!(report.matches[1].line, 3);
        assert_eq!(report.matches[1].text, "a fox runs");
    }

    #[test]
    fn test_query_report_for_miss() {
        let index = LineIndex::from_reader("the fox\n".as_bytes()).unwrap();
        let report = QueryReport::from_result(&index.query("cat")).unwrap();

        assert_eq!(report.count, 0);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_query_report_serializes() {
        let index = LineIndex::from_reader("the fox\n".as_bytes()).unwrap();
        let report = QueryReport::from_result(&index.query("fox")).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["word"], "fox");
        assert_eq!(json["count"], 1);
        assert_eq!(json["matches"][0]["line"], 1);
    }
}
