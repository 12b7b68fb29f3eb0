//! PDF page extraction.
//!
//! Wraps the `pdf-extract` engine: the rest of the crate only ever sees
//! [`Page`] records, never the PDF object model.
//!
//! ## Page Filtering
//!
//! Pages that yield no extractable text (image-only scans, blank pages,
//! pages with no text layer) are omitted from the output. Ordinals are
//! *not* renumbered: a page is identified by its 1-based position in the
//! original document, so downstream chunks still cite the right page.
//!
//! ## Failure Model
//!
//! There is no per-page recovery. If the document cannot be opened or
//! parsed at all — missing file, corrupt format, unsupported encoding —
//! the whole extraction fails with [`Error::DocumentOpen`] carrying the
//! path and the underlying cause.
//!
//! PDF is a visual format, not a semantic one: the extracted text keeps
//! whatever line layout the engine reconstructs, and paragraph detection
//! is left to the chunker's blank-line rule.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Page, Result};

/// Extract per-page text from a PDF file.
///
/// Returns pages in document order, skipping pages with no extractable
/// text while preserving 1-based ordinals.
///
/// # Errors
///
/// Returns [`Error::DocumentOpen`] if the file cannot be read or the
/// document cannot be parsed.
///
/// ## Example
///
/// ```rust,no_run
/// let pages = folio::extract_pages("data/sample.pdf")?;
/// for page in &pages {
///     println!("page {}: {} chars", page.number, page.len());
/// }
/// # Ok::<(), folio::Error>(())
/// ```
pub fn extract_pages(path: impl AsRef<Path>) -> Result<Vec<Page>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::DocumentOpen {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    extract_pages_from_bytes(&bytes).map_err(|e| match e {
        // Attach the path to parse failures from the in-memory step.
        Error::DocumentOpen { reason, .. } => Error::DocumentOpen {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })
}

/// Extract per-page text from PDF bytes already in memory.
///
/// Same contract as [`extract_pages`]; the `DocumentOpen` error carries
/// an empty path since there is no file involved.
pub fn extract_pages_from_bytes(bytes: &[u8]) -> Result<Vec<Page>> {
    let raw_pages =
        pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| Error::DocumentOpen {
            path: std::path::PathBuf::new(),
            reason: e.to_string(),
        })?;

    let total = raw_pages.len();
    let mut pages = Vec::with_capacity(total);

    for (i, text) in raw_pages.into_iter().enumerate() {
        let number = i + 1;
        if text.trim().is_empty() {
            debug!(page = number, "no extractable text, skipping");
            continue;
        }
        pages.push(Page::new(number, text));
    }

    debug!(total, kept = pages.len(), "extracted pages");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_document_open() {
        let err = extract_pages("/no/such/file.pdf").unwrap_err();
        match err {
            Error::DocumentOpen { path, .. } => {
                assert_eq!(path, std::path::Path::new("/no/such/file.pdf"));
            }
            other => panic!("expected DocumentOpen, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_bytes_are_document_open() {
        let err = extract_pages_from_bytes(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, Error::DocumentOpen { .. }));
    }

    #[test]
    fn test_garbage_file_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.7 truncated garbage").unwrap();

        let err = extract_pages(&path).unwrap_err();
        match err {
            Error::DocumentOpen { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected DocumentOpen, got {other:?}"),
        }
    }
}
