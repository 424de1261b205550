use crate::error::AppError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BatchServiceError {
    #[error("input target not found: {}", .path.display())]
    TargetNotFound { path: PathBuf },

    #[error("input target is not a regular file or directory: {}", .path.display())]
    NotARegularFile { path: PathBuf },

    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputSetup {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<BatchServiceError> for AppError {
    fn from(err: BatchServiceError) -> Self {
        match err {
            BatchServiceError::TargetNotFound { .. }
            | BatchServiceError::NotARegularFile { .. } => AppError::Config(err.to_string()),
            BatchServiceError::OutputSetup { source, .. } => AppError::Io(source),
            BatchServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
