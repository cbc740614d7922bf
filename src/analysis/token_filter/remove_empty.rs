//! Remove empty filter implementation.
//!
//! Normalization can shrink a token to nothing (a lone combining mark once
//! diacritics are removed). This filter drops such tokens so the index never
//! sees an empty term.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::token_filter::Filter;
//! use fts_tokenizers::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//! use fts_tokenizers::analysis::token::Token;
//!
//! let filter = RemoveEmptyFilter::new();
//! let tokens = vec![Token::new("hello", 0), Token::new("", 1), Token::new("world", 2)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens with empty text from the stream.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.filter(|token| !token.text.is_empty())))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}
