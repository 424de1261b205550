pub mod chunker;
pub mod error;
pub mod model;
pub mod service;

pub use chunker::{split_into_chunks, TextChunk};
pub use error::SynthesisRunError;
pub use model::{AudioEncoding, ChunkFailureRecord, FileReport};
pub use service::{SynthesisPipeline, SynthesisPipelineApi};
