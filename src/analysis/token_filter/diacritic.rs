//! Diacritic removal filter.
//!
//! Decomposes each token (NFD), drops combining marks and recomposes (NFC),
//! so `Café`, `Cafe\u{301}` and `Cafe` all become `Cafe`. Letters whose
//! "accent" is not a combining mark under decomposition (`ø`, `ł`, `ß`) are
//! left alone.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that strips combining diacritical marks from tokens.
#[derive(Clone, Debug, Default)]
pub struct DiacriticFilter;

impl DiacriticFilter {
    /// Create a new diacritic filter.
    pub fn new() -> Self {
        DiacriticFilter
    }

    /// Remove diacritics from a single word.
    pub fn strip(text: &str) -> String {
        if text.is_ascii() {
            return text.to_string();
        }
        text.nfd()
            .filter(|&c| !is_combining_mark(c))
            .nfc()
            .collect()
    }
}

impl Filter for DiacriticFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(Box::new(tokens.map(|mut token| {
            if !token.text.is_ascii() {
                token.text = Self::strip(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "diacritic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_precomposed_and_decomposed() {
        assert_eq!(DiacriticFilter::strip("Café"), "Cafe");
        assert_eq!(DiacriticFilter::strip("Cafe\u{301}"), "Cafe");
        assert_eq!(DiacriticFilter::strip("naïve"), "naive");
        assert_eq!(DiacriticFilter::strip("Ångström"), "Angstrom");
    }

    #[test]
    fn test_letters_without_decomposition_are_kept() {
        assert_eq!(DiacriticFilter::strip("Øresund"), "Øresund");
        assert_eq!(DiacriticFilter::strip("straße"), "straße");
    }

    #[test]
    fn test_mark_only_token_becomes_empty() {
        assert_eq!(DiacriticFilter::strip("\u{301}\u{308}"), "");
    }

    #[test]
    fn test_filter_keeps_offsets() {
        let tokens = vec![Token::with_offsets("élan", 0, 4, 9)];
        let result: Vec<Token> = DiacriticFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result[0], Token::with_offsets("elan", 0, 4, 9));
    }
}
