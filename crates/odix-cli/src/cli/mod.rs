//! CLI for the odix OData index extractor.

mod commands;

use anyhow::Result;
use clap::Parser;
use odix_core::config::{self, OdixConfig};
use odix_core::pipeline::RunOptions;
use std::path::PathBuf;

use commands::{prompt_pattern, run_extract};

/// Extract OData query-field indexes from CSV url dumps.
#[derive(Debug, Parser)]
#[command(name = "odix")]
#[command(about = "odix: extract OData query-field indexes from CSV url dumps", long_about = None)]
pub struct Cli {
    /// Filename glob for input CSVs (defaults to the configured pattern,
    /// normally `query*.csv`).
    pub pattern: Option<String>,

    /// Folder containing the input files (defaults to `files` under the
    /// working directory).
    pub folder: Option<PathBuf>,

    /// Output CSV path (defaults to `<folder>/indexes.csv`).
    pub output: Option<PathBuf>,

    /// Prompt for the search pattern on standard input instead of taking it
    /// from the arguments.
    #[arg(long)]
    pub interactive: bool,

    /// Process up to N input files concurrently.
    #[arg(long, default_value = "1", value_name = "N")]
    pub jobs: usize,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.run(&cfg)
    }

    fn run(self, cfg: &OdixConfig) -> Result<()> {
        let pattern = if self.interactive {
            prompt_pattern()?
        } else {
            self.pattern.unwrap_or_else(|| cfg.default_pattern.clone())
        };
        let folder = self.folder.unwrap_or_else(|| cfg.default_folder.clone());
        let output = self
            .output
            .unwrap_or_else(|| folder.join(&cfg.output_name));

        if self.jobs > 1 {
            // Best effort: the global pool may already be initialized.
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(self.jobs)
                .build_global();
        }

        let opts = RunOptions {
            pattern,
            folder,
            output,
            jobs: self.jobs,
            progress_interval: cfg.progress_interval,
        };
        run_extract(&opts)
    }
}
