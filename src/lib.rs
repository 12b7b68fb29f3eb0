//! # folio
//!
//! Page-aware PDF text chunking for retrieval pipelines.
//!
//! ## The Problem
//!
//! To index a PDF for retrieval you need pieces small enough to embed,
//! but every piece must remember which page it came from — a retrieved
//! chunk without a page reference can't be cited or shown in context.
//!
//! Chunking a PDF as one big string throws the page mapping away.
//! Chunking page-by-page keeps it, but now each page's text has to be
//! packed into bounded pieces without splitting mid-paragraph:
//!
//! - A paragraph split mid-argument embeds poorly
//! - A chunk spanning a page boundary has no single page to cite
//! - A rigid character cut lands mid-word, mid-sentence, anywhere
//!
//! ## The Pipeline
//!
//! Two pure stages, run once each over the document:
//!
//! ```text
//! PDF ──extract──▶ [(1, text), (3, text), ...]   <- empty pages dropped,
//!                        │                          ordinals preserved
//!                        ▼
//!                    pack paragraphs (greedy, per page)
//!                        │
//!                        ▼
//!                  [Chunk { page: 1, text }, Chunk { page: 1, text },
//!                   Chunk { page: 3, text }, ...]
//! ```
//!
//! The packer splits each page on blank lines, trims the paragraphs, and
//! accumulates them first-fit into chunks of at most `max_chars`
//! characters. A paragraph is never split: one longer than `max_chars`
//! becomes its own oversized chunk. Chunks never cross pages.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{Page, PageChunker};
//!
//! let pages = vec![
//!     Page::new(1, "A short paragraph.\n\nAnother short one."),
//!     Page::new(2, "Second page."),
//! ];
//!
//! let chunker = PageChunker::new(1000).unwrap();
//! let chunks = chunker.chunk_pages(&pages);
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].page, 1);
//! assert_eq!(chunks[0].text, "A short paragraph.\n\nAnother short one.");
//! assert_eq!(chunks[1].page, 2);
//! ```
//!
//! Or run the whole pipeline against a file:
//!
//! ```rust,no_run
//! use folio::{ingest, PipelineConfig};
//!
//! let config = PipelineConfig::default()
//!     .with_json_path("chunks_output.json")
//!     .with_text_path("chunks_output.txt");
//!
//! let report = ingest("data/sample.pdf", &config)?;
//! println!("{} pages -> {} chunks", report.pages, report.chunks.len());
//! # Ok::<(), folio::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - **Reconstruction**: joining a page's chunks in order with `"\n\n"`
//!   reproduces that page's trimmed paragraph sequence.
//! - **Size bound**: `chunk.len() <= max_chars`, except a chunk holding a
//!   single paragraph that alone exceeds the bound.
//! - **Ordering**: chunks follow page order, then accumulation order
//!   within a page. Identical input yields an identical chunk sequence.
//!
//! Everything runs single-threaded in one pass; documents are assumed to
//! fit in memory.

mod chunk;
mod chunker;
mod error;
mod export;
mod page;
mod pdf;
mod pipeline;
mod preview;

pub use chunk::Chunk;
pub use chunker::{PageChunker, DEFAULT_MAX_CHARS, DEFAULT_SEPARATOR};
pub use error::{Error, Result};
pub use export::{
    chunks_to_json, render_chunks_text, write_chunks_json, write_chunks_json_file,
    write_chunks_text, write_chunks_text_file,
};
pub use page::Page;
pub use pdf::{extract_pages, extract_pages_from_bytes};
pub use pipeline::{ingest, IngestReport, PipelineConfig};
pub use preview::{chunk_preview, document_preview, DEFAULT_CHUNK_PREVIEW, DEFAULT_PREVIEW_CHARS};
