//! Error types for folio.

use std::path::PathBuf;

/// Errors that can occur while extracting or chunking a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    ///
    /// A zero `max_chars` would degenerate to one paragraph per chunk
    /// regardless of size, so it is rejected at construction.
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// The source document could not be opened or parsed at all.
    ///
    /// Missing file, corrupt format, unsupported encoding. Fatal — there
    /// is no per-page recovery from a document that won't open.
    #[error("cannot open document {}: {reason}", path.display())]
    DocumentOpen {
        /// Path of the document that failed to open.
        path: PathBuf,
        /// The underlying cause, as reported by the PDF engine or OS.
        reason: String,
    },

    /// An output file could not be written.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Chunk serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
