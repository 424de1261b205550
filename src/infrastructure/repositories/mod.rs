pub mod document_extractor;
pub mod google_tts_repository;
pub mod text_extractor;
pub mod tts_repository;

pub use document_extractor::DocumentTextExtractor;
pub use google_tts_repository::{GoogleTtsConfig, GoogleTtsRepository};
pub use text_extractor::{ExtractionError, TextExtractor};
pub use tts_repository::{TtsRepository, TtsRepositoryError};
