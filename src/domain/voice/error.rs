use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceServiceError {
    #[error("voice catalog unavailable: {0}")]
    Unavailable(String),
    #[error("unknown voice: {0}")]
    UnknownVoice(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<VoiceServiceError> for AppError {
    fn from(err: VoiceServiceError) -> Self {
        match err {
            VoiceServiceError::UnknownVoice(name) => {
                AppError::Config(format!("voice '{}' is not offered by the service", name))
            }
            VoiceServiceError::Unavailable(msg) => AppError::ExternalService(msg),
            VoiceServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
