use super::error::VoiceServiceError;
use super::model::VoiceSelection;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct VoiceCatalogService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl VoiceCatalogService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }
}

#[async_trait]
pub trait VoiceCatalogApi: Send + Sync {
    /// List the names of all voices the remote service currently offers
    async fn list_voices(&self) -> Result<Vec<String>, VoiceServiceError>;

    /// Validate a requested voice name against the live catalog
    ///
    /// Validation is a precondition for the whole run: an unknown voice, an
    /// empty catalog, or a failed catalog call all mean nothing gets processed.
    async fn validate(&self, name: &str) -> Result<VoiceSelection, VoiceServiceError>;
}

#[async_trait]
impl VoiceCatalogApi for VoiceCatalogService {
    async fn list_voices(&self) -> Result<Vec<String>, VoiceServiceError> {
        let voices = self
            .tts_repo
            .list_voices()
            .await
            .map_err(|e| VoiceServiceError::Unavailable(e.to_string()))?;

        tracing::info!(voice_count = voices.len(), "Voice catalog fetched");
        Ok(voices)
    }

    async fn validate(&self, name: &str) -> Result<VoiceSelection, VoiceServiceError> {
        let voices = self.list_voices().await?;

        if voices.is_empty() {
            return Err(VoiceServiceError::Unavailable(
                "voice catalog returned no voices".to_string(),
            ));
        }

        if !voices.iter().any(|v| v == name) {
            return Err(VoiceServiceError::UnknownVoice(name.to_string()));
        }

        Ok(VoiceSelection::from_name(name))
    }
}
