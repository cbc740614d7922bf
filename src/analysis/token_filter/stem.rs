//! Stemming filter and the stemmers it can run.
//!
//! A [`Stemmer`] is a pure function from word to stem. [`SnowballStemmer`]
//! runs the Snowball algorithm for a [`Language`]; [`IdentityStemmer`]
//! returns words unchanged and is used when no language is configured or the
//! configured tag is not recognized.
//!
//! [`Language`]: crate::analysis::language::Language

use std::fmt;
use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod snowball;

pub use identity::IdentityStemmer;
pub use snowball::SnowballStemmer;

/// Filter that applies stemming to tokens.
#[derive(Clone)]
pub struct StemFilter {
    stemmer: Arc<dyn Stemmer>,
}

impl fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl StemFilter {
    /// Create a stem filter that leaves words unchanged.
    pub fn new() -> Self {
        Self::with_stemmer(Arc::new(IdentityStemmer::new()))
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Arc<dyn Stemmer>) -> Self {
        StemFilter { stemmer }
    }

    /// The stemmer this filter runs.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StemFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(move |mut token| {
            token.text = self.stemmer.stem(&token.text);
            token
        })))
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::Language;
    use crate::analysis::token::Token;

    #[test]
    fn test_stem_filter() {
        let filter = StemFilter::with_stemmer(Arc::new(SnowballStemmer::new(Language::English)));
        let tokens = vec![
            Token::with_offsets("running", 0, 0, 7),
            Token::with_offsets("unites", 1, 8, 14),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "unit");
        assert_eq!((result[1].start_offset, result[1].end_offset), (8, 14));
    }

    #[test]
    fn test_default_is_identity() {
        let filter = StemFilter::default();
        assert_eq!(filter.stemmer().name(), "identity");
        assert_eq!(format!("{filter:?}"), "StemFilter { stemmer: \"identity\" }");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StemFilter::new().name(), "stem");
    }
}
