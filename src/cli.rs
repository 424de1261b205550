use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "doc2audiobook")]
#[command(about = "Convert document files into spoken-word MP3 audiobooks")]
#[command(
    long_about = "Extracts text from documents under the configured input root, \
synthesizes it line by line through Google Cloud Text-to-Speech, and writes one \
MP3 per document to the output root"
)]
pub struct Cli {
    /// Print the available voice names and exit without synthesizing
    #[arg(long)]
    pub list_voices: bool,

    /// Voice to synthesize with, e.g. "en-US-Wavenet-F"
    #[arg(long)]
    pub voice: Option<String>,

    /// Input file or directory, relative to the configured input root.
    /// When omitted the whole input root is processed.
    #[arg(long)]
    pub input: Option<PathBuf>,
}
