//! Error types for the extraction pipeline.
//!
//! Only configuration and I/O-boundary failures are fatal; per-row and
//! per-URL failures are logged and skipped by the pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors: bad configuration, unusable input folder, or an
/// unwritable output path. Anything per-row/per-URL is handled in place.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Blank search pattern (e.g. empty interactive input).
    #[error("search pattern must not be blank")]
    EmptyPattern,

    /// The search pattern is not a valid glob.
    #[error("invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// The input folder does not exist.
    #[error("input directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The input folder exists but cannot be read.
    #[error("cannot read input directory '{}': {}", .path.display(), .source)]
    InputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No regular file in the folder matched the pattern.
    #[error("no files matched pattern '{}' in '{}'", .pattern, .folder.display())]
    NoFilesMatched { pattern: String, folder: PathBuf },

    /// The output file (or its parent directory) could not be written.
    #[error("cannot write output '{}': {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A URL string that could not be parsed. The offending URL contributes no
/// fields; the run continues.
#[derive(Debug, Error)]
#[error("invalid URL: {0}")]
pub struct UrlParseError(#[from] url::ParseError);
