//! The no-op stemmer.
//!
//! A [`StemFilter`](super::StemFilter) built without an explicit stemmer runs
//! this one, so words come out exactly as they went in.

use crate::analysis::token_filter::stem::Stemmer;

/// Leaves every word as it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_owned()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::stem::StemFilter;

    #[test]
    fn test_words_pass_through() {
        let stemmer = IdentityStemmer::new();
        for word in ["running", "cafés", "strasse", ""] {
            assert_eq!(stemmer.stem(word), word);
        }
    }

    #[test]
    fn test_default_stem_filter_uses_identity() {
        assert_eq!(StemFilter::new().stemmer().name(), "identity");
    }
}
