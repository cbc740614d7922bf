//! Token filter implementations for token transformation.
//!
//! Filters wrap a [`TokenStream`] and return a new one. They are lazy: each
//! filter maps or drops tokens as the consumer pulls them, so a pipeline of
//! filters never buffers a whole document.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::token::Token;
//! use fts_tokenizers::analysis::token_filter::Filter;
//! use fts_tokenizers::analysis::token_filter::case_fold::CaseFoldFilter;
//!
//! let filter = CaseFoldFilter::new();
//! let tokens = vec![Token::new("HELLO", 0)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//! assert_eq!(result[0].text, "hello");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod case_fold;
pub mod diacritic;
pub mod remove_empty;
pub mod stem;
pub mod stop;

pub use diacritic::DiacriticFilter;
pub use case_fold::CaseFoldFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use stem::{IdentityStemmer, SnowballStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
