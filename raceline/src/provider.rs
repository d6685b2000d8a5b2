//! # Text Provider Module - Reference Text Ownership
//!
//! The provider owns the immutable reference text a session is typed
//! against. It is consulted once when a comparator is constructed and can
//! additionally answer whole-word membership queries for validation use
//! cases (for example checking a submitted word against the text).
//!
//! ## Usage Example
//!
//! ```rust
//! use raceline::TextProvider;
//!
//! let provider = TextProvider::default();
//! assert!(provider.text().starts_with("The only thing"));
//! assert!(provider.contains_word("library."));
//! ```

/// The built-in sample text used by [`TextProvider::default`].
pub const SAMPLE_TEXT: &str =
    "The only thing that you absolutely have to know, is the location of the library.";

/// Owner of the fixed reference text
///
/// The text is set at construction and never mutated. Comparators read it
/// once at session start; after that the provider is not consulted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProvider {
    text: String,
}

impl TextProvider {
    /// Create a provider over the given reference text
    ///
    /// # Returns
    ///
    /// `None` if the text is empty, otherwise the provider.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::TextProvider;
    ///
    /// let provider = TextProvider::new("cat dog").unwrap();
    /// assert_eq!(provider.text(), "cat dog");
    ///
    /// assert!(TextProvider::new("").is_none());
    /// ```
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();

        if text.is_empty() {
            return None;
        }

        Some(Self { text })
    }

    /// The fixed reference text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether `word` is one of the whitespace-separated tokens of the
    /// reference text
    ///
    /// The match is exact and case-sensitive; no normalization is applied,
    /// so punctuation attached to a token is part of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use raceline::TextProvider;
    ///
    /// let provider = TextProvider::default();
    /// assert!(provider.contains_word("library."));
    /// assert!(!provider.contains_word("library"));
    /// ```
    pub fn contains_word(&self, word: &str) -> bool {
        self.text.split_whitespace().any(|token| token == word)
    }
}

impl Default for TextProvider {
    /// A provider over the built-in [`SAMPLE_TEXT`]
    fn default() -> Self {
        // Safety: SAMPLE_TEXT is a non-empty constant
        Self::new(SAMPLE_TEXT).unwrap()
    }
}
