//! Snowball stemmers backed by `rust-stemmers`.

use std::fmt;

use crate::analysis::language::Language;
use crate::analysis::token_filter::stem::Stemmer;

/// A stemmer running the Snowball algorithm for one language.
pub struct SnowballStemmer {
    language: Language,
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        SnowballStemmer {
            language,
            inner: rust_stemmers::Stemmer::create(language.algorithm()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("language", &self.language)
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}
