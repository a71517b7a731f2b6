//! CSV source: stream the `url` column out of one input file.

use csv::ReaderBuilder;
use std::path::Path;

/// Header of the column containing request URLs. Compared case-sensitively.
const URL_COLUMN: &str = "url";

/// Reads every non-empty value of the `url` column, in row order.
///
/// A file without a `url` header yields zero URLs (the file is skipped, not
/// an error). Rows that are short, malformed, or missing the column are
/// tolerated and skipped.
pub fn read_urls(path: &Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?;
    let Some(url_index) = headers.iter().position(|h| h == URL_COLUMN) else {
        tracing::warn!("no 'url' column in {}, skipping file", path.display());
        return Ok(Vec::new());
    };

    let mut urls = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("skipping row {} of {}: {err}", row + 1, path.display());
                continue;
            }
        };
        match record.get(url_index) {
            Some(value) if !value.is_empty() => urls.push(value.to_string()),
            _ => {}
        }
    }
    Ok(urls)
}
