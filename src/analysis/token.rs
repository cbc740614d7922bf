//! Token types for text analysis.
//!
//! A [`Token`] is the unit handed to the index builder: normalized text, the
//! byte span it came from in the caller's buffer, and its position in the
//! document.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! assert_eq!(token.span_len(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token produced by a tokenizer.
///
/// Offsets are byte offsets into the buffer the caller passed in, with
/// `end_offset` exclusive. Tokens own their text, so a caller may keep them
/// after the cursor that produced them moves on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The normalized text of the token
    pub text: String,

    /// The position of the token in the document (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original buffer
    pub start_offset: usize,

    /// The byte offset where this token ends in the original buffer (exclusive)
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of the source span this token covers.
    pub fn span_len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream borrowing the buffer it was produced from.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Token> + 'a>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream<'a> {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'a>;
}

impl<'a> IntoTokenStream<'a> for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'a> {
        Box::new(self.into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_with_text_keeps_span() {
        let token = Token::with_offsets("Running", 3, 10, 17).with_text("run");
        assert_eq!(token.text, "run");
        assert_eq!(token.position, 3);
        assert_eq!(token.span_len(), 7);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0);
        assert_eq!(format!("{token}"), "hello");
    }

    #[test]
    fn test_token_stream() {
        let tokens = vec![Token::new("hello", 0), Token::new("world", 1)];

        let stream = tokens.into_token_stream();
        let collected: Vec<_> = stream.collect();

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].text, "hello");
        assert_eq!(collected[1].text, "world");
    }
}
