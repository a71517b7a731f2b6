//! Output report: the unique index keys as a single-column CSV.

use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

use crate::error::PipelineError;

/// Header of the single output column.
const OUTPUT_HEADER: &str = "Indexes";

/// Writes `keys` to `path` under the `Indexes` header, creating the parent
/// directory if needed.
///
/// Keys are built from `\w+` names joined with `_`, so they never need
/// quoting; quoting is disabled so the empty key is written as an empty line.
pub fn write_indexes(path: &Path, keys: &[String]) -> Result<(), PipelineError> {
    let write_err = |source: Box<dyn std::error::Error + Send + Sync>| PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.into()))?;
        }
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .map_err(|e| write_err(e.into()))?;
    writer
        .write_record([OUTPUT_HEADER])
        .map_err(|e| write_err(e.into()))?;
    for key in keys {
        writer
            .write_record([key.as_str()])
            .map_err(|e| write_err(e.into()))?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;
    Ok(())
}
