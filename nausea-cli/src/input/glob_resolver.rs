//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// Literal paths are passed through even when they do not exist, so the
/// engine can report the read failure for that document.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            let path = PathBuf::from(pattern);
            if !path.is_dir() {
                files.push(path);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles {
            patterns: patterns.join(", "),
        }
        .into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).to_string_lossy().into_owned()
    }

    #[test]
    fn test_resolve_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["0002.txt", "0001.txt", "notes.md"] {
            fs::write(dir.path().join(name), "текст").unwrap();
        }

        let files = resolve_patterns(&[
            pattern(&dir, "*.txt"),
            pattern(&dir, "0001.txt"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["0001.txt", "0002.txt"]);
    }

    #[test]
    fn test_unmatched_glob_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&dir, "*.txt")]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInputFiles { .. })
        ));
    }

    #[test]
    fn test_invalid_glob() {
        let err = resolve_patterns(&["texts/[0-9.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_missing_literal_path_is_kept() {
        let files = resolve_patterns(&["does/not/exist/0042.txt".to_string()]).unwrap();
        assert_eq!(files, vec![PathBuf::from("does/not/exist/0042.txt")]);
    }
}
