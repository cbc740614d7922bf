//! Case fold filter implementation.
//!
//! Full Unicode case folding for case-insensitive matching, so `STRASSE` and
//! `straße` or `ΟΔΟΣ` and `οδος` fold to the same term. ASCII-only tokens take
//! a fast path. Folding may change the byte length of the text; offsets are
//! left untouched.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::token_filter::Filter;
//! use fts_tokenizers::analysis::token_filter::case_fold::CaseFoldFilter;
//! use fts_tokenizers::analysis::token::Token;
//!
//! let filter = CaseFoldFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("Straße", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "strasse");
//! ```

use caseless::default_case_fold_str;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that applies Unicode default case folding to token text.
#[derive(Clone, Debug, Default)]
pub struct CaseFoldFilter;

impl CaseFoldFilter {
    /// Create a new case fold filter.
    pub fn new() -> Self {
        CaseFoldFilter
    }

    /// Fold a single word.
    pub fn fold(text: &str) -> String {
        if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            default_case_fold_str(text)
        }
    }
}

impl Filter for CaseFoldFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|mut token: Token| {
            // Lowercase-only text can still fold (ß, final sigma).
            if !token.text.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
                token.text = Self::fold(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "case_fold"
    }
}
