use super::tts_repository::{TtsRepository, TtsRepositoryError};
use crate::domain::synthesis::AudioEncoding;
use crate::domain::voice::VoiceSelection;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google Cloud TTS client configuration
#[derive(Debug, Clone)]
pub struct GoogleTtsConfig {
    /// REST API base URL; overridable so tests can point at a local stub
    pub base_url: String,
    /// API key, passed as the `key` query parameter
    pub api_key: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl GoogleTtsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://texttospeech.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 120,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfig<'a>,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig<'a> {
    audio_encoding: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    audio_content: String,
}

#[derive(Debug, Deserialize)]
struct ListVoicesResponse {
    #[serde(default)]
    voices: Vec<VoiceDescription>,
}

#[derive(Debug, Deserialize)]
struct VoiceDescription {
    name: String,
}

/// Google Cloud Text-to-Speech implementation of the TTS repository
///
/// Talks to the v1 REST API with an API key. Audio comes back base64-encoded
/// inside a JSON envelope and is decoded here, so callers only ever see bytes.
pub struct GoogleTtsRepository {
    client: Client,
    config: GoogleTtsConfig,
}

impl GoogleTtsRepository {
    pub fn new(config: GoogleTtsConfig) -> Result<Self, TtsRepositoryError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsRepositoryError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn synthesize_url(&self) -> String {
        format!(
            "{}/v1/text:synthesize?key={}",
            self.config.base_url, self.config.api_key
        )
    }

    fn voices_url(&self) -> String {
        format!("{}/v1/voices?key={}", self.config.base_url, self.config.api_key)
    }

    fn map_transport_error(e: reqwest::Error) -> TtsRepositoryError {
        if e.is_timeout() {
            TtsRepositoryError::Timeout
        } else if e.is_connect() {
            TtsRepositoryError::Network(format!("cannot connect to TTS service: {}", e))
        } else {
            TtsRepositoryError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<Vec<u8>, TtsRepositoryError> {
        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelectionParams {
                language_code: &voice.language_code,
                name: &voice.name,
            },
            audio_config: AudioConfig {
                audio_encoding: encoding.as_str(),
            },
        };

        tracing::debug!(
            voice = %voice.name,
            text_len = text.len(),
            "Sending synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsRepositoryError::Service(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| TtsRepositoryError::InvalidResponse(e.to_string()))?;

        let audio_data = general_purpose::STANDARD
            .decode(&body.audio_content)
            .map_err(|e| {
                TtsRepositoryError::InvalidResponse(format!("undecodable audio content: {}", e))
            })?;

        tracing::debug!(audio_size = audio_data.len(), "Synthesize request completed");

        Ok(audio_data)
    }

    async fn list_voices(&self) -> Result<Vec<String>, TtsRepositoryError> {
        let response = self
            .client
            .get(self.voices_url())
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsRepositoryError::Service(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: ListVoicesResponse = response
            .json()
            .await
            .map_err(|e| TtsRepositoryError::InvalidResponse(e.to_string()))?;

        Ok(body.voices.into_iter().map(|v| v.name).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config = GoogleTtsConfig::new("k");
        assert_eq!(config.base_url, "https://texttospeech.googleapis.com");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = GoogleTtsConfig::new("k")
            .with_base_url("http://localhost:9090")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_synthesize_request_shape() {
        let voice = VoiceSelection::from_name("en-US-Wavenet-F");
        let request = SynthesizeRequest {
            input: SynthesisInput { text: "Hello" },
            voice: VoiceSelectionParams {
                language_code: &voice.language_code,
                name: &voice.name,
            },
            audio_config: AudioConfig {
                audio_encoding: AudioEncoding::Mp3.as_str(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "input": { "text": "Hello" },
                "voice": { "languageCode": "en-US", "name": "en-US-Wavenet-F" },
                "audioConfig": { "audioEncoding": "MP3" }
            })
        );
    }

    #[test]
    fn test_voices_response_parses() {
        let body = r#"{"voices":[{"name":"en-US-Wavenet-F","languageCodes":["en-US"],"ssmlGender":"FEMALE"},{"name":"de-DE-Wavenet-A"}]}"#;
        let parsed: ListVoicesResponse = serde_json::from_str(body).unwrap();
        let names: Vec<String> = parsed.voices.into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["en-US-Wavenet-F", "de-DE-Wavenet-A"]);
    }
}
