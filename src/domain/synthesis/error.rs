use crate::error::AppError;

/// Failures that end one file's synthesis run
///
/// Chunk-level synthesis errors never show up here; they are recorded and
/// recovered inside the pipeline. What remains is I/O on the output artifacts,
/// which makes the run pointless for that file.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisRunError {
    #[error("failed to write audio output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write failure log: {0}")]
    FailureLog(String),
}

impl From<SynthesisRunError> for AppError {
    fn from(err: SynthesisRunError) -> Self {
        match err {
            SynthesisRunError::Io(e) => AppError::Io(e),
            SynthesisRunError::FailureLog(msg) => AppError::Internal(msg),
        }
    }
}
