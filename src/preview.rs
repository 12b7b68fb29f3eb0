//! Diagnostic previews.
//!
//! Quick-look renderings for logs and consoles: the head of the
//! document's combined text, and the first few chunks. These carry no
//! stability guarantee and are not part of the persisted output — use
//! [`crate::export`]'s writers for anything downstream consumes.

use std::fmt::Write as _;

use crate::{Chunk, Page};

/// Default character budget for [`document_preview`].
pub const DEFAULT_PREVIEW_CHARS: usize = 2000;

/// Default number of chunks shown by [`chunk_preview`].
pub const DEFAULT_CHUNK_PREVIEW: usize = 3;

/// The first `limit` characters of all page texts joined with blank lines.
///
/// Truncation counts characters, never landing inside a multi-byte
/// sequence.
///
/// ```rust
/// use folio::{document_preview, Page};
///
/// let pages = vec![Page::new(1, "Hello."), Page::new(2, "World.")];
/// assert_eq!(document_preview(&pages, 2000), "Hello.\n\nWorld.");
/// assert_eq!(document_preview(&pages, 7), "Hello.\n");
/// ```
#[must_use]
pub fn document_preview(pages: &[Page], limit: usize) -> String {
    let combined = pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    match combined.char_indices().nth(limit) {
        Some((byte_idx, _)) => combined[..byte_idx].to_string(),
        None => combined,
    }
}

/// Render the first `count` chunks with their header lines.
///
/// Uses the same `--- Chunk <i> (Page <page>) ---` header as the
/// plain-text output, but only for display.
#[must_use]
pub fn chunk_preview(chunks: &[Chunk], count: usize) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().take(count).enumerate() {
        let _ = write!(out, "\nChunk {} (Page {}):\n{}\n", i + 1, chunk.page, chunk.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_joins_pages_with_blank_lines() {
        let pages = vec![Page::new(1, "one"), Page::new(3, "three")];
        assert_eq!(document_preview(&pages, 100), "one\n\nthree");
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let pages = vec![Page::new(1, "日本語テキスト")];
        let preview = document_preview(&pages, 3);
        assert_eq!(preview, "日本語");
    }

    #[test]
    fn test_preview_shorter_than_limit_is_whole_text() {
        let pages = vec![Page::new(1, "short")];
        assert_eq!(document_preview(&pages, 2000), "short");
    }

    #[test]
    fn test_preview_of_no_pages_is_empty() {
        assert_eq!(document_preview(&[], 2000), "");
    }

    #[test]
    fn test_chunk_preview_takes_first_n() {
        let chunks = vec![
            Chunk::new(1, "a"),
            Chunk::new(1, "b"),
            Chunk::new(2, "c"),
            Chunk::new(2, "d"),
        ];
        let preview = chunk_preview(&chunks, 3);
        assert!(preview.contains("Chunk 1 (Page 1):\na"));
        assert!(preview.contains("Chunk 3 (Page 2):\nc"));
        assert!(!preview.contains('d'));
    }
}
