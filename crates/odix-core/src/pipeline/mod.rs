//! File pipeline: enumerate input CSVs, extract OData fields from every URL,
//! accumulate unique index keys, write the report.
//!
//! Files are processed strictly sequentially by default. With `jobs > 1`
//! files are fanned out across rayon workers, each building a private
//! `IndexSet` that is merged into the run set afterwards; per-URL extraction
//! has no cross-URL dependency, so final set membership is unchanged.

mod discover;
mod progress;
mod report;
mod source;

pub use discover::find_input_files;
pub use progress::{NoProgress, Progress};
pub use report::write_indexes;
pub use source::read_urls;

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;
use crate::extract;
use crate::index::{build_key, IndexSet};

/// One extraction run, fully resolved (no defaults left).
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// File-name glob for input files, e.g. `query*.csv`.
    pub pattern: String,
    /// Folder scanned for input files (non-recursive).
    pub folder: PathBuf,
    /// Output CSV path.
    pub output: PathBuf,
    /// Process up to this many files concurrently (1 = sequential).
    pub jobs: usize,
    /// Emit a progress tick after this many URLs within one file.
    pub progress_interval: usize,
}

/// Counters reported after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub files_processed: usize,
    pub urls_processed: usize,
    pub unique_keys: usize,
}

/// Runs the whole pipeline: discover files, extract and accumulate keys,
/// write the sorted unique set to `opts.output`.
pub fn run(opts: &RunOptions, progress: &dyn Progress) -> Result<RunSummary, PipelineError> {
    let files = discover::find_input_files(&opts.folder, &opts.pattern)?;
    progress.files_found(files.len());

    let total = files.len();
    let interval = opts.progress_interval.max(1);

    let mut indexes = IndexSet::new();
    let mut urls_processed = 0usize;

    let per_file: Vec<(IndexSet, usize)> = if opts.jobs > 1 {
        files
            .par_iter()
            .enumerate()
            .map(|(i, file)| process_file(i + 1, total, file, interval, progress))
            .collect()
    } else {
        files
            .iter()
            .enumerate()
            .map(|(i, file)| process_file(i + 1, total, file, interval, progress))
            .collect()
    };
    for (set, count) in per_file {
        indexes.merge(set);
        urls_processed += count;
    }

    let unique_keys = indexes.len();
    report::write_indexes(&opts.output, &indexes.into_sorted())?;

    Ok(RunSummary {
        files_processed: total,
        urls_processed,
        unique_keys,
    })
}

/// Extracts index keys from one input file. Unreadable files and unparsable
/// URLs contribute nothing; neither aborts the run.
fn process_file(
    index: usize,
    total: usize,
    path: &Path,
    interval: usize,
    progress: &dyn Progress,
) -> (IndexSet, usize) {
    progress.file_started(index, total, path);

    let urls = match source::read_urls(path) {
        Ok(urls) => urls,
        Err(err) => {
            tracing::warn!("cannot read {}: {err}", path.display());
            return (IndexSet::new(), 0);
        }
    };
    progress.urls_extracted(urls.len());

    let mut keys = IndexSet::new();
    for (i, url) in urls.iter().enumerate() {
        match extract::extract_fields(url) {
            Ok(fields) => {
                keys.insert(build_key(&fields));
            }
            Err(err) => tracing::debug!("skipping unparsable URL '{url}': {err}"),
        }
        let done = i + 1;
        if done % interval == 0 {
            progress.urls_processed(done, urls.len());
        }
    }
    (keys, urls.len())
}
