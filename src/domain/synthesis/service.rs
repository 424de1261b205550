use super::chunker::TextChunk;
use super::error::SynthesisRunError;
use super::model::{AudioEncoding, ChunkFailureRecord, FileReport};
use crate::domain::voice::VoiceSelection;
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;

pub struct SynthesisPipeline {
    tts_repo: Arc<dyn TtsRepository>,
}

impl SynthesisPipeline {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }
}

#[async_trait]
pub trait SynthesisPipelineApi: Send + Sync {
    /// Synthesize a file's chunks in order, appending audio bytes to `sink`
    ///
    /// Each chunk gets exactly one synthesis call, no retries. Successful audio
    /// is appended to `sink` as returned, with no re-encoding or re-framing;
    /// a failed chunk becomes a ChunkFailureRecord in `failures` and the
    /// pipeline moves on, so one bad chunk never takes out the rest of the
    /// file. The only errors that escape are sink I/O errors, which end the
    /// file's run.
    async fn run(
        &self,
        chunks: &[TextChunk],
        voice: &VoiceSelection,
        encoding: AudioEncoding,
        sink: &mut (dyn Write + Send),
        failures: &mut Vec<ChunkFailureRecord>,
    ) -> Result<FileReport, SynthesisRunError>;
}

#[async_trait]
impl SynthesisPipelineApi for SynthesisPipeline {
    async fn run(
        &self,
        chunks: &[TextChunk],
        voice: &VoiceSelection,
        encoding: AudioEncoding,
        sink: &mut (dyn Write + Send),
        failures: &mut Vec<ChunkFailureRecord>,
    ) -> Result<FileReport, SynthesisRunError> {
        let mut report = FileReport::default();

        for chunk in chunks {
            report.chunks_attempted += 1;

            tracing::info!(
                chunk_index = chunk.index,
                chunk_size = chunk.content.len(),
                "Synthesizing chunk"
            );

            match self
                .tts_repo
                .synthesize(&chunk.content, voice, encoding)
                .await
            {
                Ok(audio_data) => {
                    // MP3 frames concatenate naively, so raw append is enough
                    sink.write_all(&audio_data)?;
                    report.chunks_succeeded += 1;

                    tracing::debug!(
                        chunk_index = chunk.index,
                        audio_size = audio_data.len(),
                        "Audio appended to output"
                    );
                }
                Err(e) => {
                    report.chunks_failed += 1;

                    tracing::warn!(
                        chunk_index = chunk.index,
                        chunk_size = chunk.content.len(),
                        error = %e,
                        "Chunk synthesis failed, skipping"
                    );

                    failures.push(ChunkFailureRecord::new(chunk, e.to_string()));
                }
            }
        }

        sink.flush()?;

        Ok(report)
    }
}
