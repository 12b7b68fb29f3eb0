//! Greedy paragraph packing.
//!
//! Splits a page's text into paragraphs on blank-line boundaries, then
//! packs consecutive paragraphs first-fit into chunks of at most
//! `max_chars` characters.
//!
//! ## The Algorithm
//!
//! Per page, with `max_chars = 30`:
//!
//! ```text
//! Paragraphs: ["First para." (11), "Second one." (11), "Third." (6)]
//!
//! buffer = "First para."                       len 11
//! add "Second one."?  11 + 11 + 2 = 24 <= 30   -> join with "\n\n"
//! add "Third."?       24 +  6 + 2 = 32 >  30   -> flush, restart
//!
//! Chunk 0: "First para.\n\nSecond one."
//! Chunk 1: "Third."
//! ```
//!
//! The `+ 2` is the cost of the `"\n\n"` joint. The packer is first-fit
//! with no backtracking: once a chunk is flushed it is never rebalanced.
//! Not optimal packing, but deterministic and order-preserving.
//!
//! ## Oversized Paragraphs
//!
//! A paragraph is the atomic unit — it is never split. A paragraph
//! longer than `max_chars` lands in an empty buffer (anything before it
//! was flushed) and is emitted as its own chunk at whatever length it
//! has. Consumers that require a hard ceiling must handle this case.
//!
//! ## Why Per Page?
//!
//! Packing stops at page boundaries so every chunk cites exactly one
//! page. A trailing sliver on one page is emitted as a small chunk
//! rather than merged into the next page's first chunk.

use tracing::trace;

use crate::{Chunk, Error, Page, Result};

/// Default chunk size bound, in characters.
pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Default paragraph separator: a blank line.
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Paragraph-aware chunker with a per-chunk character bound.
///
/// ## Example
///
/// ```rust
/// use folio::{Page, PageChunker};
///
/// let chunker = PageChunker::new(30).unwrap();
/// let page = Page::new(1, "First para.\n\nSecond one.\n\nThird.");
/// let chunks = chunker.chunk_page(&page);
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "First para.\n\nSecond one.");
/// assert_eq!(chunks[1].text, "Third.");
/// ```
#[derive(Debug, Clone)]
pub struct PageChunker {
    max_chars: usize,
    separator: String,
}

impl PageChunker {
    /// Create a chunker with the given character bound and blank-line
    /// paragraph splitting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `max_chars == 0`.
    pub fn new(max_chars: usize) -> Result<Self> {
        if max_chars == 0 {
            return Err(Error::InvalidChunkSize(max_chars));
        }
        Ok(Self {
            max_chars,
            separator: DEFAULT_SEPARATOR.to_string(),
        })
    }

    /// Override the paragraph separator.
    ///
    /// Extracted text layout varies by source document; some extractors
    /// emit `"\r\n\r\n"` blank lines or form feeds between blocks. The
    /// separator is a plain substring, not a pattern.
    ///
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        self.separator = separator;
        self
    }

    /// The chunk size bound, in characters.
    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Split a page's text into trimmed, non-empty paragraphs.
    ///
    /// Runs of three or more newlines leave whitespace-only fragments
    /// between separators; trimming discards them, so any run of blank
    /// lines acts as a single boundary.
    fn paragraphs<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.separator.as_str())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Chunk a single page.
    ///
    /// Returns chunks in accumulation order, all carrying `page.number`.
    /// A page with no non-empty paragraphs yields no chunks.
    #[must_use]
    pub fn chunk_page(&self, page: &Page) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0usize;

        for paragraph in self.paragraphs(&page.text) {
            let para_chars = paragraph.chars().count();

            // Prospective length counts the "\n\n" joint.
            if buffer_chars + para_chars + 2 > self.max_chars {
                if !buffer.is_empty() {
                    trace!(page = page.number, len = buffer_chars, "flush chunk");
                    chunks.push(Chunk::new(page.number, std::mem::take(&mut buffer)));
                }
                // An empty buffer always accepts the paragraph, even one
                // longer than max_chars: paragraphs are never split.
                buffer.push_str(paragraph);
                buffer_chars = para_chars;
            } else if buffer.is_empty() {
                buffer.push_str(paragraph);
                buffer_chars = para_chars;
            } else {
                buffer.push_str("\n\n");
                buffer.push_str(paragraph);
                buffer_chars += para_chars + 2;
            }
        }

        if !buffer.is_empty() {
            chunks.push(Chunk::new(page.number, buffer));
        }

        chunks
    }

    /// Chunk an ordered sequence of pages.
    ///
    /// Output is grouped by page in input order; within a page, chunks
    /// appear in accumulation order. Deterministic: identical input
    /// yields an identical chunk sequence.
    #[must_use]
    pub fn chunk_pages(&self, pages: &[Page]) -> Vec<Chunk> {
        let mut chunks = Vec::with_capacity(pages.len());
        for page in pages {
            chunks.extend(self.chunk_page(page));
        }
        chunks
    }
}

impl Default for PageChunker {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}
