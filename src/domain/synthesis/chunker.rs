/// One non-empty line of extracted text, the unit of synthesis
///
/// `index` is the zero-based position in the full line sequence, counting the
/// blank lines that were skipped, so indices in the failure log line up with
/// the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub content: String,
}

/// Split raw extracted text into synthesizable chunks, one per non-empty line
///
/// Only strictly empty lines are dropped; a line of spaces still counts.
/// Lines are never merged or re-split on size, so a very long line goes to the
/// service unmodified and may hit its per-request limit.
pub fn split_into_chunks(text: &str) -> Vec<TextChunk> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| TextChunk {
            index,
            content: line.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skips_blank_lines_and_keeps_source_indices() {
        let chunks = split_into_chunks("Hello\n\nWorld");
        assert_eq!(
            chunks,
            vec![
                TextChunk {
                    index: 0,
                    content: "Hello".to_string()
                },
                TextChunk {
                    index: 2,
                    content: "World".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_preserves_line_order() {
        let chunks = split_into_chunks("a\nb\nc");
        let contents: Vec<&str> = chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_whitespace_only_line_is_still_a_chunk() {
        let chunks = split_into_chunks("a\n   \nb");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1].content, "   ");
        assert_eq!(chunks[1].index, 1);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_into_chunks("").is_empty());
        assert!(split_into_chunks("\n\n\n").is_empty());
    }

    #[test]
    fn test_trailing_newline_adds_no_chunk() {
        let chunks = split_into_chunks("last line\n");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "last line");
    }

    #[test]
    fn test_resplitting_is_identical() {
        let text = "one\n\ntwo\nthree\n\n";
        assert_eq!(split_into_chunks(text), split_into_chunks(text));
    }
}
