use super::error::BatchServiceError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What one invocation operates on: a single document or a directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    File(PathBuf),
    Directory(PathBuf),
}

impl InputTarget {
    /// Classify a path by its filesystem metadata
    pub fn resolve(path: &Path) -> Result<Self, BatchServiceError> {
        let metadata = std::fs::metadata(path).map_err(|_| BatchServiceError::TargetNotFound {
            path: path.to_path_buf(),
        })?;

        if metadata.is_dir() {
            Ok(InputTarget::Directory(path.to_path_buf()))
        } else if metadata.is_file() {
            Ok(InputTarget::File(path.to_path_buf()))
        } else {
            Err(BatchServiceError::NotARegularFile {
                path: path.to_path_buf(),
            })
        }
    }
}

/// Aggregate outcome of one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    /// Files that produced an output artifact (possibly with chunk failures)
    pub files_processed: usize,
    /// Subset of processed files that logged at least one chunk failure
    pub files_with_chunk_failures: usize,
    /// Files that produced nothing: extraction failed or output I/O failed
    pub files_failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_path() {
        let err = InputTarget::resolve(Path::new("/nonexistent/path")).unwrap_err();
        assert!(matches!(err, BatchServiceError::TargetNotFound { .. }));
    }

    #[test]
    fn test_resolve_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert_eq!(
            InputTarget::resolve(dir.path()).unwrap(),
            InputTarget::Directory(dir.path().to_path_buf())
        );
        assert_eq!(
            InputTarget::resolve(&file).unwrap(),
            InputTarget::File(file.clone())
        );
    }
}
