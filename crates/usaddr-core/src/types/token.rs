//! # Whitespace Tokenizer
//!
//! Splits the text of a labeled address field into tokens. Punctuation
//! stays attached to its token; the feature extractor strips it later.

/// Whitespace tokenizer for address field text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize text into non-empty, whitespace-free slices of `input`.
    ///
    /// # Examples
    /// ```
    /// use usaddr_core::types::Tokenizer;
    ///
    /// let tokens = Tokenizer::new().tokenize("  123 Main\tSt. ");
    /// assert_eq!(tokens, ["123", "Main", "St."]);
    /// ```
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<&'a str> {
        input.split_whitespace().collect()
    }
}
