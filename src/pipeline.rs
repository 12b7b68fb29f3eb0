//! The end-to-end pipeline: extract, chunk, write.
//!
//! A single synchronous pass with no process-wide state: everything the
//! run needs arrives in [`PipelineConfig`], everything it produces comes
//! back in [`IngestReport`]. There are no retries — any failure aborts
//! the run and propagates to the caller with the file path and cause.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    export, extract_pages, Chunk, PageChunker, Result, DEFAULT_MAX_CHARS,
};

/// Configuration for an ingest run.
///
/// ```rust
/// use folio::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.max_chars, 1000);
///
/// let config = PipelineConfig::new(500)
///     .with_json_path("out.json")
///     .with_text_path("out.txt");
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Soft upper bound on chunk length, in characters.
    pub max_chars: usize,
    /// Where to write the JSON array of chunks, if anywhere.
    pub json_path: Option<PathBuf>,
    /// Where to write the human-readable chunk listing, if anywhere.
    pub text_path: Option<PathBuf>,
}

impl PipelineConfig {
    /// Create a config with the given chunk size and no output files.
    ///
    /// Validation of `max_chars` happens when the run constructs its
    /// [`PageChunker`], so an invalid size surfaces as
    /// [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize)
    /// from [`ingest`] rather than a panic here.
    #[must_use]
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            json_path: None,
            text_path: None,
        }
    }

    /// Set the JSON output path.
    #[must_use]
    pub fn with_json_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    /// Set the plain-text output path.
    #[must_use]
    pub fn with_text_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_path = Some(path.into());
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

/// What an ingest run produced.
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Number of pages that yielded text (after empty-page filtering).
    pub pages: usize,
    /// The chunk sequence, in (page order, accumulation order).
    pub chunks: Vec<Chunk>,
}

/// Run the whole pipeline over one document.
///
/// Extracts per-page text, packs it into chunks, and writes whichever
/// outputs the config names.
///
/// # Errors
///
/// - [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize) if
///   `config.max_chars == 0`.
/// - [`Error::DocumentOpen`](crate::Error::DocumentOpen) if the document
///   cannot be read or parsed.
/// - [`Error::Io`](crate::Error::Io) /
///   [`Error::Json`](crate::Error::Json) if an output cannot be written.
pub fn ingest(pdf_path: impl AsRef<Path>, config: &PipelineConfig) -> Result<IngestReport> {
    let pdf_path = pdf_path.as_ref();
    let chunker = PageChunker::new(config.max_chars)?;

    let pages = extract_pages(pdf_path)?;
    let chunks = chunker.chunk_pages(&pages);

    info!(
        path = %pdf_path.display(),
        pages = pages.len(),
        chunks = chunks.len(),
        max_chars = config.max_chars,
        "ingested document"
    );

    if let Some(json_path) = &config.json_path {
        export::write_chunks_json_file(json_path, &chunks)?;
    }
    if let Some(text_path) = &config.text_path {
        export::write_chunks_text_file(text_path, &chunks)?;
    }

    Ok(IngestReport {
        pages: pages.len(),
        chunks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_chars, 1000);
        assert!(config.json_path.is_none());
        assert!(config.text_path.is_none());
    }

    #[test]
    fn test_zero_chunk_size_rejected_before_extraction() {
        // Fails on validation, not on the (nonexistent) file.
        let err = ingest("/no/such/file.pdf", &PipelineConfig::new(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidChunkSize(0)));
    }

    #[test]
    fn test_missing_document_propagates() {
        let err = ingest("/no/such/file.pdf", &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::DocumentOpen { .. }));
    }
}
