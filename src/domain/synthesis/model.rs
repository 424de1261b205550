use super::chunker::TextChunk;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output audio encoding, pinned for a whole run
///
/// Only MP3 is offered: plain MP3 frame streams can be concatenated byte-wise
/// and still play, which is what the pipeline relies on. Container formats
/// with per-segment headers would not survive that treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEncoding {
    Mp3,
}

impl AudioEncoding {
    /// Wire name used in the synthesize request body
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "MP3",
        }
    }

    /// Output file extension for this encoding
    pub fn extension(&self) -> &'static str {
        match self {
            AudioEncoding::Mp3 => "mp3",
        }
    }
}

/// One failed chunk, captured at the moment the synthesis call failed
///
/// Records are immutable once created and end up in the per-file failure log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkFailureRecord {
    pub chunk_index: usize,
    pub chunk_length: usize,
    pub chunk_text: String,
    pub error_detail: String,
    pub failed_at: DateTime<Utc>,
}

impl ChunkFailureRecord {
    pub fn new(chunk: &TextChunk, error_detail: String) -> Self {
        Self {
            chunk_index: chunk.index,
            chunk_length: chunk.content.len(),
            chunk_text: chunk.content.clone(),
            error_detail,
            failed_at: Utc::now(),
        }
    }
}

/// Per-file chunk outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub chunks_attempted: usize,
    pub chunks_succeeded: usize,
    pub chunks_failed: usize,
}

impl FileReport {
    pub fn has_failures(&self) -> bool {
        self.chunks_failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failure_record_captures_chunk_fields() {
        let chunk = TextChunk {
            index: 2,
            content: "World".to_string(),
        };
        let record = ChunkFailureRecord::new(&chunk, "rate limited".to_string());
        assert_eq!(record.chunk_index, 2);
        assert_eq!(record.chunk_length, 5);
        assert_eq!(record.chunk_text, "World");
        assert_eq!(record.error_detail, "rate limited");
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(AudioEncoding::Mp3.as_str(), "MP3");
        assert_eq!(AudioEncoding::Mp3.extension(), "mp3");
    }
}
