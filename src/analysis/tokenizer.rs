//! Tokenizer implementations for text analysis.
//!
//! Tokenizers turn a raw byte buffer into a stream of [`Token`]s whose
//! offsets point back into that buffer. Input is treated as UTF-8; invalid
//! sequences become U+FFFD tokens instead of errors.
//!
//! # Available Tokenizers
//!
//! - [`character::CharacterTokenizer`] - Runs of letters/digits, no normalization
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29)
//! - [`unicodesn::UnicodeSnTokenizer`] - Word boundaries plus case folding,
//!   diacritic removal, stemming and stop words
//! - [`html::HtmlTokenizer`] - Strips markup, then delegates to an inner tokenizer
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::tokenizer::Tokenizer;
//! use fts_tokenizers::analysis::tokenizer::character::CharacterTokenizer;
//!
//! let tokenizer = CharacterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize(b"abc 123").unwrap().collect();
//! assert_eq!(tokens[0].text, "abc");
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 7));
//! ```
//!
//! [`Token`]: crate::analysis::token::Token

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert bytes into tokens.
///
/// Implementations hold only read-only configuration; all per-document state
/// lives in the returned stream, so one tokenizer may serve any number of
/// streams at once. The trait requires `Send + Sync` to allow sharing across
/// threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given buffer into a stream of tokens.
    fn tokenize<'a>(&'a self, input: &'a [u8]) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod character;
pub mod html;
pub mod unicode_word;
pub mod unicodesn;

pub use character::CharacterTokenizer;
pub use html::HtmlTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use unicodesn::{UnicodeSnConfig, UnicodeSnTokenizer};
