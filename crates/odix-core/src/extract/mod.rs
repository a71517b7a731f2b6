//! OData field extraction from request URLs.
//!
//! Pulls the `$filter` and `$orderby` query parameters out of a URL and
//! scans their decoded values with two independent matchers: direct
//! comparisons (`Name eq 'x'`) and function-wrapped references
//! (`tolower(Name)`). Field names are collected in first-occurrence order,
//! deduplicated across both matchers and across both parameters.

mod direct;
mod function;

use url::Url;

use crate::error::UrlParseError;

/// Query parameter keys whose values are scanned for field references.
const SCANNED_PARAMS: [&str; 2] = ["$filter", "$orderby"];

/// Extracts the ordered, deduplicated list of field names referenced by the
/// URL's `$filter`/`$orderby` parameters.
///
/// Returns an empty list when the URL has no such parameters or their values
/// match neither pattern. Fails only when the URL itself cannot be parsed;
/// the caller is expected to skip that URL and continue.
pub fn extract_fields(url: &str) -> Result<Vec<String>, UrlParseError> {
    let parsed = Url::parse(url)?;

    let mut fields = Vec::new();
    for (key, value) in query_params(&parsed) {
        if !key.starts_with('$') {
            continue;
        }
        if !SCANNED_PARAMS.contains(&key.as_str()) {
            continue;
        }
        // Direct matches first, then function matches, sharing one list:
        // first occurrence wins position.
        direct::scan(&value, &mut fields);
        function::scan(&value, &mut fields);
    }
    Ok(fields)
}

/// Decoded query parameters in first-appearance key order. A repeated key
/// keeps only its last value, mirroring conventional query-string parsing.
/// Decoding follows form-urlencoded semantics (`+` as space, lossy
/// percent-decoding).
fn query_params(url: &Url) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    for (key, value) in url.query_pairs() {
        if let Some(pos) = params.iter().position(|(k, _)| k.as_str() == key.as_ref()) {
            params[pos].1 = value.into_owned();
        } else {
            params.push((key.into_owned(), value.into_owned()));
        }
    }
    params
}

/// Appends `name` unless an identical (case-sensitive) entry already exists.
fn push_unique(fields: &mut Vec<String>, name: &str) {
    if !fields.iter().any(|f| f == name) {
        fields.push(name.to_string());
    }
}
