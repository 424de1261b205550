use crate::error::AppError;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub google_tts_api_key: String,
    pub tts_base_url: String,
    pub tts_timeout_secs: u64,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Config {
            google_tts_api_key: env::var("GOOGLE_TTS_API_KEY")
                .map_err(|_| AppError::Config("GOOGLE_TTS_API_KEY is not set".to_string()))?,
            tts_base_url: env::var("TTS_BASE_URL")
                .unwrap_or_else(|_| "https://texttospeech.googleapis.com".to_string()),
            tts_timeout_secs: env::var("TTS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()
                .map_err(|e| AppError::Config(format!("invalid TTS_TIMEOUT_SECS: {}", e)))?,
            input_dir: env::var("INPUT_DIR")
                .unwrap_or_else(|_| "/data/input".to_string())
                .into(),
            output_dir: env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "/data/output".to_string())
                .into(),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state, so each one uses its own variable set
    // and restores nothing; they only assert on defaults that need no variables.

    #[test]
    fn missing_api_key_is_a_config_error() {
        env::remove_var("GOOGLE_TTS_API_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
