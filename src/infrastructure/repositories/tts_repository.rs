use crate::domain::synthesis::AudioEncoding;
use crate::domain::voice::VoiceSelection;
use async_trait::async_trait;

/// Errors surfaced by a TTS provider.
///
/// The pipeline treats every variant the same way (record the chunk failure and
/// move on); the split exists so logs say what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum TtsRepositoryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("service error: {0}")]
    Service(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying TTS provider (Google Cloud TTS, or a fake in tests)
///
/// Implementations are responsible for:
/// - One outbound request per call, no batching or retries
/// - Returning raw audio bytes in the requested encoding
/// - Provider-specific request shaping and credential handling
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize one text chunk with the given voice
    ///
    /// Returns the audio bytes for that chunk alone; callers are in charge of
    /// concatenating chunks in order.
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<Vec<u8>, TtsRepositoryError>;

    /// List the names of all voices the provider currently exposes
    async fn list_voices(&self) -> Result<Vec<String>, TtsRepositoryError>;
}
