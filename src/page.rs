//! The Page type: one page's worth of extracted text.

/// One page of extracted text, keyed by its position in the document.
///
/// `number` is the page's 1-based ordinal in the *original* document.
/// Pages that yield no text are dropped during extraction, but the
/// survivors keep their original ordinals — a document whose second page
/// is an image-only scan produces pages numbered 1 and 3, not 1 and 2.
///
/// ```rust
/// use folio::Page;
///
/// let page = Page::new(3, "Extracted text.");
/// assert_eq!(page.number, 3);
/// assert!(!page.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based ordinal of this page in the original document.
    pub number: usize,
    /// The raw extracted text of the page.
    pub text: String,
}

impl Page {
    /// Create a new page record.
    #[must_use]
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// The length of this page's text in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether this page has no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page {{ number: {}, len: {} }}", self.number, self.len())
    }
}
