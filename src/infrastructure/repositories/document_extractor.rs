use super::text_extractor::{ExtractionError, TextExtractor};
use html2text::from_read;
use std::fs;
use std::path::Path;

/// Extension-dispatched document text extractor
///
/// Handles the formats the pipeline is expected to meet:
/// - plain text / Markdown, read as UTF-8 (lossy)
/// - HTML, flattened with html2text
/// - PDF, via pdf-extract
///
/// Anything else is rejected as unsupported rather than guessed at.
pub struct DocumentTextExtractor;

impl DocumentTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractionError> {
        fs::read(path).map_err(|source| ExtractionError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" | "text" | "md" | "markdown" => {
                let bytes = Self::read_bytes(path)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            "html" | "htm" | "xhtml" => {
                let bytes = Self::read_bytes(path)?;
                // usize::MAX disables wrapping so lines stay as authored
                Ok(from_read(bytes.as_slice(), usize::MAX))
            }
            "pdf" => pdf_extract::extract_text(path)
                .map_err(|e| ExtractionError::Parse(e.to_string())),
            other => Err(ExtractionError::Unsupported(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_extracts_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "Hello\n\nWorld").unwrap();

        let extractor = DocumentTextExtractor::new();
        assert_eq!(extractor.extract(&path).unwrap(), "Hello\n\nWorld");
    }

    #[test]
    fn test_extracts_html_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.html");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "<html><body><p>Hello world</p></body></html>").unwrap();

        let extractor = DocumentTextExtractor::new();
        let text = extractor.extract(&path).unwrap();
        assert!(text.contains("Hello world"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let extractor = DocumentTextExtractor::new();
        let err = extractor.extract(Path::new("/tmp/doc.xyz")).unwrap_err();
        assert!(matches!(err, ExtractionError::Unsupported(ref e) if e == "xyz"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let extractor = DocumentTextExtractor::new();
        let err = extractor
            .extract(Path::new("/nonexistent/doc.txt"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io { .. }));
    }
}
