//! The extraction run: console progress plus pipeline dispatch.

use anyhow::Result;
use odix_core::pipeline::{self, Progress, RunOptions};
use std::io::{self, Write};
use std::path::Path;

/// Renders pipeline progress as the console lines users watch during a run.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn files_found(&self, count: usize) {
        println!("Found {count} files to process");
    }

    fn file_started(&self, index: usize, total: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Processing file {index}/{total}: {name}");
    }

    fn urls_extracted(&self, count: usize) {
        println!("  - Extracted {count} URLs from file");
    }

    fn urls_processed(&self, done: usize, total: usize) {
        println!("  - Processed {done}/{total} URLs");
    }
}

/// Runs one extraction over the resolved options, narrating start and
/// completion on stdout. Fatal pipeline errors propagate to the caller.
pub fn run_extract(opts: &RunOptions) -> Result<()> {
    println!("Starting extraction...");
    println!("Using folder path: {}", opts.folder.display());
    println!("Output will be saved to: {}", opts.output.display());
    println!("Searching for files matching pattern: {}", opts.pattern);

    let summary = pipeline::run(opts, &ConsoleProgress)?;

    println!(
        "Processing complete. Found {} unique index combinations",
        summary.unique_keys
    );
    println!("Results written to {}", opts.output.display());
    println!("Operation completed successfully");
    tracing::info!(
        "processed {} URLs across {} files, {} unique keys",
        summary.urls_processed,
        summary.files_processed,
        summary.unique_keys
    );
    Ok(())
}

/// Asks for the search pattern on standard input. A blank answer is a usage
/// error, reported before any file I/O happens.
pub fn prompt_pattern() -> Result<String> {
    print!("Search pattern (e.g. query*.csv): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let pattern = line.trim();
    if pattern.is_empty() {
        anyhow::bail!("search pattern must not be blank");
    }
    Ok(pattern.to_string())
}
