//! Output writers: JSON and plain text.
//!
//! Two renderings of the same chunk sequence:
//!
//! - **JSON** (machine-readable): a single pretty-printed array of
//!   `{"page": <n>, "text": <s>}` objects, UTF-8, non-ASCII characters
//!   preserved literally rather than `\u`-escaped.
//! - **Plain text** (human-readable): each chunk under a header line
//!   `--- Chunk <i> (Page <page>) ---`, where `<i>` is the chunk's
//!   1-based index across the whole document, followed by the chunk text
//!   and a blank line.
//!
//! Writers are generic over [`std::io::Write`]; the `_file` variants
//! open the path for you.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::{Chunk, Result};

/// Serialize chunks as a pretty-printed JSON array.
///
/// `serde_json` writes UTF-8 and leaves non-ASCII characters unescaped,
/// so the output is directly human-inspectable.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) on serialization failure
/// or [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn write_chunks_json<W: Write>(writer: W, chunks: &[Chunk]) -> Result<()> {
    serde_json::to_writer_pretty(writer, chunks)?;
    Ok(())
}

/// Serialize chunks to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) on serialization failure.
pub fn chunks_to_json(chunks: &[Chunk]) -> Result<String> {
    Ok(serde_json::to_string_pretty(chunks)?)
}

/// Write chunks as JSON to a file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created
/// or written.
pub fn write_chunks_json_file(path: impl AsRef<Path>, chunks: &[Chunk]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_chunks_json(&mut writer, chunks)?;
    writer.flush()?;
    info!(path = %path.display(), chunks = chunks.len(), "wrote JSON output");
    Ok(())
}

/// Render chunks in the plain-text format.
///
/// ```rust
/// use folio::{render_chunks_text, Chunk};
///
/// let chunks = vec![Chunk::new(1, "Hello."), Chunk::new(2, "World.")];
/// let text = render_chunks_text(&chunks);
/// assert!(text.starts_with("--- Chunk 1 (Page 1) ---\nHello.\n\n"));
/// assert!(text.contains("--- Chunk 2 (Page 2) ---\nWorld.\n\n"));
/// ```
#[must_use]
pub fn render_chunks_text(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "--- Chunk {} (Page {}) ---", i + 1, chunk.page);
        out.push_str(&chunk.text);
        out.push_str("\n\n");
    }
    out
}

/// Write chunks in the plain-text format.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn write_chunks_text<W: Write>(mut writer: W, chunks: &[Chunk]) -> Result<()> {
    writer.write_all(render_chunks_text(chunks).as_bytes())?;
    Ok(())
}

/// Write chunks in the plain-text format to a file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created
/// or written.
pub fn write_chunks_text_file(path: impl AsRef<Path>, chunks: &[Chunk]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_chunks_text(&mut writer, chunks)?;
    writer.flush()?;
    info!(path = %path.display(), chunks = chunks.len(), "wrote text output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Chunk> {
        vec![
            Chunk::new(1, "First chunk."),
            Chunk::new(1, "Second chunk, same page."),
            Chunk::new(3, "Third chunk, later page."),
        ]
    }

    #[test]
    fn test_json_is_array_of_page_text_objects() {
        let json = chunks_to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0]["page"], 1);
        assert_eq!(arr[0]["text"], "First chunk.");
        assert_eq!(arr[2]["page"], 3);
    }

    #[test]
    fn test_json_is_indented() {
        let json = chunks_to_json(&sample()).unwrap();
        assert!(json.contains('\n'), "pretty output should be multi-line");
        assert!(json.contains("  \"page\""));
    }

    #[test]
    fn test_json_preserves_non_ascii_literally() {
        let chunks = vec![Chunk::new(1, "café — 日本語")];
        let json = chunks_to_json(&chunks).unwrap();
        assert!(json.contains("café — 日本語"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_text_headers_are_global_and_one_based() {
        let text = render_chunks_text(&sample());
        let expected = "--- Chunk 1 (Page 1) ---\nFirst chunk.\n\n\
                        --- Chunk 2 (Page 1) ---\nSecond chunk, same page.\n\n\
                        --- Chunk 3 (Page 3) ---\nThird chunk, later page.\n\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_chunk_list() {
        assert_eq!(render_chunks_text(&[]), "");
        assert_eq!(chunks_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_chunks_json(&mut buf, &sample()).unwrap();
        let parsed: Vec<Chunk> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, sample());
    }
}
