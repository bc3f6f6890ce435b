//! Command implementations for the linequery CLI.

use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::{IndexConfig, LineIndex, LineIndexBuilder};

/// Execute a CLI command.
pub fn execute_command(args: LineQueryArgs) -> Result<()> {
    match &args.command {
        Command::Query(query_args) => run_query(query_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
        Command::Validate(validate_args) => validate_index(validate_args.clone(), &args),
    }
}

/// Build the index every command starts from.
///
/// Open/read failures surface here, before any query is issued.
fn build_index(
    file: &Path,
    token_pattern: Option<&str>,
    initial_capacity: usize,
    cli_args: &LineQueryArgs,
) -> Result<LineIndex> {
    if cli_args.verbosity() > 1 {
        println!("Indexing: {}", file.display());
    }

    let mut config = IndexConfig::new().initial_capacity(initial_capacity);
    if let Some(pattern) = token_pattern {
        config = config.token_pattern(pattern);
    }

    let start_time = Instant::now();
    let index = LineIndexBuilder::from_config(&config)?.build_from_path(file)?;

    if cli_args.verbosity() > 1 {
        let stats = index.stats();
        println!(
            "Indexed {} lines, {} distinct words in {}ms",
            stats.lines,
            stats.distinct_words,
            start_time.elapsed().as_millis()
        );
    }

    Ok(index)
}

/// Answer one-shot word lookups.
fn run_query(args: QueryArgs, cli_args: &LineQueryArgs) -> Result<()> {
    let index = build_index(
        &args.file,
        args.token_pattern.as_deref(),
        args.initial_capacity,
        cli_args,
    )?;

    for word in &args.words {
        let report = QueryReport::from_result(&index.query(word))?;
        output_result("Query result", &report, cli_args)?;
    }

    Ok(())
}

/// Interactive lookup loop over stdin.
fn run_repl(args: ReplArgs, cli_args: &LineQueryArgs) -> Result<()> {
    let index = build_index(&args.file, args.token_pattern.as_deref(), 0, cli_args)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Welcome! Enter a word to look up, {} to quit.",
            args.sentinel
        );
    }

    let stdin = io::stdin();
    'outer: for line in stdin.lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            if word == args.sentinel {
                break 'outer;
            }
            let report = QueryReport::from_result(&index.query(word))?;
            output_result("Query result", &report, cli_args)?;
        }
    }

    Ok(())
}

/// Show index statistics.
fn show_stats(args: StatsArgs, cli_args: &LineQueryArgs) -> Result<()> {
    let index = build_index(&args.file, args.token_pattern.as_deref(), 0, cli_args)?;

    output_result("Index statistics", &index.stats(), cli_args)
}

/// Validate index integrity.
fn validate_index(args: ValidateArgs, cli_args: &LineQueryArgs) -> Result<()> {
    let index = build_index(&args.file, args.token_pattern.as_deref(), 0, cli_args)?;
    let stats = index.stats();

    match index.verify() {
        Ok(()) => {
            let report = ValidationReport {
                lines: stats.lines,
                distinct_words: stats.distinct_words,
                valid: true,
            };
            output_result("Index is valid", &report, cli_args)
        }
        Err(e) => {
            let report = ValidationReport {
                lines: stats.lines,
                distinct_words: stats.distinct_words,
                valid: false,
            };
            output_result("Index is invalid", &report, cli_args)?;
            Err(e)
        }
    }
}
