//! Input file enumeration: regular files in one folder whose name matches
//! the search pattern. Non-recursive.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;

/// Enumerates regular files in `folder` whose file name matches `pattern`,
/// sorted by path for a deterministic processing order.
///
/// Matching is case-sensitive and applies to the file name only, so the
/// folder path itself never needs glob escaping.
pub fn find_input_files(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>, PipelineError> {
    if pattern.trim().is_empty() {
        return Err(PipelineError::EmptyPattern);
    }
    let matcher = glob::Pattern::new(pattern).map_err(|source| PipelineError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    if !folder.is_dir() {
        return Err(PipelineError::DirectoryNotFound(folder.to_path_buf()));
    }

    let read_err = |source| PipelineError::InputDir {
        path: folder.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if matcher.matches(name) {
                files.push(path);
            }
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(PipelineError::NoFilesMatched {
            pattern: pattern.to_string(),
            folder: folder.to_path_buf(),
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "url\n").unwrap();
    }

    #[test]
    fn matches_pattern_in_sorted_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "query2.csv");
        touch(dir.path(), "query1.csv");
        touch(dir.path(), "other.csv");

        let files = find_input_files(dir.path(), "query*.csv").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["query1.csv", "query2.csv"]);
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "query1.csv");
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested"), "query2.csv");

        let files = find_input_files(dir.path(), "query*.csv").unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Query1.csv");
        assert!(matches!(
            find_input_files(dir.path(), "query*.csv"),
            Err(PipelineError::NoFilesMatched { .. })
        ));
    }

    #[test]
    fn blank_pattern_is_a_configuration_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            find_input_files(dir.path(), "  "),
            Err(PipelineError::EmptyPattern)
        ));
    }

    #[test]
    fn missing_folder_is_reported() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            find_input_files(&missing, "query*.csv"),
            Err(PipelineError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn no_matches_is_reported() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "data.csv");
        assert!(matches!(
            find_input_files(dir.path(), "query*.csv"),
            Err(PipelineError::NoFilesMatched { .. })
        ));
    }
}
