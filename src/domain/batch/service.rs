use super::error::BatchServiceError;
use super::model::{BatchResult, InputTarget};
use crate::domain::synthesis::{
    split_into_chunks, AudioEncoding, ChunkFailureRecord, FileReport, SynthesisPipelineApi,
    SynthesisRunError, TextChunk,
};
use crate::domain::voice::VoiceSelection;
use crate::infrastructure::repositories::TextExtractor;
use async_trait::async_trait;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

pub struct BatchService {
    extractor: Arc<dyn TextExtractor>,
    pipeline: Arc<dyn SynthesisPipelineApi>,
}

impl BatchService {
    pub fn new(extractor: Arc<dyn TextExtractor>, pipeline: Arc<dyn SynthesisPipelineApi>) -> Self {
        Self {
            extractor,
            pipeline,
        }
    }

    /// Expand the target into the list of candidate input files
    ///
    /// Directories are walked recursively; only regular files qualify. Entries
    /// are sorted by name so batch runs are deterministic.
    fn resolve_input_files(target: &InputTarget) -> Vec<PathBuf> {
        match target {
            InputTarget::File(path) => vec![path.clone()],
            InputTarget::Directory(root) => WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping unreadable directory entry");
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .collect(),
        }
    }

    fn output_stem(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string())
    }

    /// Run the synthesis pipeline for one file and persist its artifacts
    ///
    /// Creates `<output_root>/<stem>.mp3` and, when any chunk failed, the
    /// complete failure-record array at `<output_root>/<stem>_log.json`.
    async fn process_file(
        &self,
        input_path: &Path,
        output_root: &Path,
        chunks: &[TextChunk],
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<FileReport, SynthesisRunError> {
        let stem = Self::output_stem(input_path);
        let output_path = output_root.join(format!("{}.{}", stem, encoding.extension()));

        let mut sink = BufWriter::new(File::create(&output_path)?);
        let mut failures: Vec<ChunkFailureRecord> = Vec::new();

        let report = self
            .pipeline
            .run(chunks, voice, encoding, &mut sink, &mut failures)
            .await?;

        tracing::info!(
            output = %output_path.display(),
            chunks_succeeded = report.chunks_succeeded,
            chunks_failed = report.chunks_failed,
            "Audio written"
        );

        // the log artifact only exists when something actually failed
        if !failures.is_empty() {
            let log_path = output_root.join(format!("{}_log.json", stem));
            let log_file = File::create(&log_path)?;
            serde_json::to_writer_pretty(log_file, &failures)
                .map_err(|e| SynthesisRunError::FailureLog(e.to_string()))?;

            tracing::warn!(
                log = %log_path.display(),
                failure_count = failures.len(),
                "Chunk failures recorded"
            );
        }

        Ok(report)
    }
}

#[async_trait]
pub trait BatchServiceApi: Send + Sync {
    /// Process every file resolved from the target, one at a time
    ///
    /// A file whose extraction or output I/O fails is counted and skipped; the
    /// batch always continues to the next file. Only output-root setup failure
    /// aborts the whole batch.
    async fn run_batch(
        &self,
        target: &InputTarget,
        output_root: &Path,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<BatchResult, BatchServiceError>;
}

#[async_trait]
impl BatchServiceApi for BatchService {
    async fn run_batch(
        &self,
        target: &InputTarget,
        output_root: &Path,
        voice: &VoiceSelection,
        encoding: AudioEncoding,
    ) -> Result<BatchResult, BatchServiceError> {
        std::fs::create_dir_all(output_root).map_err(|source| BatchServiceError::OutputSetup {
            path: output_root.to_path_buf(),
            source,
        })?;

        let files = Self::resolve_input_files(target);
        tracing::info!(file_count = files.len(), "Batch resolved");

        let mut result = BatchResult::default();

        for path in &files {
            tracing::info!(file = %path.display(), "Processing file");

            // extraction failure is a whole-file failure, never a batch failure
            let text = match self.extractor.extract(path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(
                        file = %path.display(),
                        error = %e,
                        "Extraction failed, skipping file"
                    );
                    result.files_failed += 1;
                    continue;
                }
            };

            let chunks = split_into_chunks(&text);
            tracing::info!(
                file = %path.display(),
                chunk_count = chunks.len(),
                "Text extracted"
            );

            match self
                .process_file(path, output_root, &chunks, voice, encoding)
                .await
            {
                Ok(report) => {
                    result.files_processed += 1;
                    if report.has_failures() {
                        result.files_with_chunk_failures += 1;
                    }
                }
                Err(e) => {
                    tracing::error!(
                        file = %path.display(),
                        error = %e,
                        "File run failed, skipping file"
                    );
                    result.files_failed += 1;
                }
            }
        }

        Ok(result)
    }
}
