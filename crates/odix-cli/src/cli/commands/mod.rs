//! CLI command handlers.

mod extract;

pub use extract::{prompt_pattern, run_extract};
