//! The Chunk type: a bounded unit of text annotated with its page.

use serde::{Deserialize, Serialize};

/// A chunk of text with the page it came from.
///
/// Each chunk is a self-contained piece that can be embedded, indexed,
/// and retrieved independently, and always cites a single source page —
/// chunks never span a page boundary.
///
/// ## Character Counts
///
/// `len` counts Unicode scalar values (`char`s), not bytes. The chunking
/// size bound is specified in characters, so a chunk of 1000 CJK
/// characters has `len() == 1000` even though it occupies ~3000 bytes.
///
/// ## Serialization
///
/// Serializes as `{"page": <n>, "text": <s>}`, which is the wire shape
/// of the JSON output (see [`write_chunks_json`](crate::write_chunks_json)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 1-based ordinal of the page this chunk's paragraphs came from.
    pub page: usize,
    /// The chunk text: trimmed paragraphs joined with `"\n\n"`.
    pub text: String,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this chunk is empty.
    ///
    /// The chunker never emits empty chunks; this exists for the usual
    /// pairing with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chunk {{ page: {}, len: {} }}", self.page, self.len())
    }
}
