//! doc2audiobook - converts document files into spoken-word MP3 audio
//!
//! Layers:
//! - Domain: voice/ (catalog + selection), synthesis/ (chunker + pipeline),
//!   batch/ (input resolution + per-file orchestration)
//! - Infrastructure: config, repositories (Google Cloud TTS client, document
//!   text extractor)

pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
