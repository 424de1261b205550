use std::path::{Path, PathBuf};

/// Errors raised while turning a document into raw text.
///
/// The batch runner treats any of these as "this file could not be processed":
/// the file is logged, counted as failed, and the batch moves on.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported document format: {0}")]
    Unsupported(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse document: {0}")]
    Parse(String),
}

/// Boundary to the document text-extraction library.
///
/// Converts a file path into raw extracted text or fails; the core never looks
/// inside a document itself.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
