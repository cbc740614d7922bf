//! Languages with a Snowball stemmer.
//!
//! A language tag may be an English name (`english`), an ISO 639-1 code
//! (`en`) or an ISO 639-3 code (`eng`, and the bibliographic variants such as
//! `fre` or `ger`). Matching is case-insensitive. `porter` is accepted as an
//! alias for English, since that is what the classic FTS stemmer is called.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::language::Language;
//!
//! assert_eq!(Language::parse("spa"), Some(Language::Spanish));
//! assert_eq!(Language::parse("English"), Some(Language::English));
//! assert_eq!(Language::parse("klingon"), None);
//! ```

use std::fmt;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::stop;

/// Supported stemming languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Arabic,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Norwegian,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swedish,
    Tamil,
    Turkish,
}

/// Every language with the tags that select it. The first tag is the
/// canonical name.
const TAGS: &[(Language, &[&str])] = &[
    (Language::Arabic, &["arabic", "ar", "ara"]),
    (Language::Danish, &["danish", "da", "dan"]),
    (Language::Dutch, &["dutch", "nl", "nld", "dut"]),
    (Language::English, &["english", "en", "eng", "porter"]),
    (Language::Finnish, &["finnish", "fi", "fin"]),
    (Language::French, &["french", "fr", "fra", "fre"]),
    (Language::German, &["german", "de", "deu", "ger"]),
    (Language::Greek, &["greek", "el", "ell", "gre"]),
    (Language::Hungarian, &["hungarian", "hu", "hun"]),
    (Language::Italian, &["italian", "it", "ita"]),
    (Language::Norwegian, &["norwegian", "no", "nor", "nb", "nob"]),
    (Language::Portuguese, &["portuguese", "pt", "por"]),
    (Language::Romanian, &["romanian", "ro", "ron", "rum"]),
    (Language::Russian, &["russian", "ru", "rus"]),
    (Language::Spanish, &["spanish", "es", "spa"]),
    (Language::Swedish, &["swedish", "sv", "swe"]),
    (Language::Tamil, &["tamil", "ta", "tam"]),
    (Language::Turkish, &["turkish", "tr", "tur"]),
];

impl Language {
    /// All supported languages.
    pub fn all() -> impl Iterator<Item = Language> {
        TAGS.iter().map(|(language, _)| *language)
    }

    /// Parse a language tag, returning `None` if it is not recognized.
    pub fn parse(tag: &str) -> Option<Language> {
        let tag = tag.trim();
        TAGS.iter()
            .find(|(_, tags)| tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
            .map(|(language, _)| *language)
    }

    /// Canonical lowercase English name.
    pub fn name(self) -> &'static str {
        TAGS.iter()
            .find(|(language, _)| *language == self)
            .map_or("", |(_, tags)| tags[0])
    }

    /// The Snowball algorithm for this language.
    pub fn algorithm(self) -> Algorithm {
        match self {
            Language::Arabic => Algorithm::Arabic,
            Language::Danish => Algorithm::Danish,
            Language::Dutch => Algorithm::Dutch,
            Language::English => Algorithm::English,
            Language::Finnish => Algorithm::Finnish,
            Language::French => Algorithm::French,
            Language::German => Algorithm::German,
            Language::Greek => Algorithm::Greek,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Italian => Algorithm::Italian,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Romanian => Algorithm::Romanian,
            Language::Russian => Algorithm::Russian,
            Language::Spanish => Algorithm::Spanish,
            Language::Swedish => Algorithm::Swedish,
            Language::Tamil => Algorithm::Tamil,
            Language::Turkish => Algorithm::Turkish,
        }
    }

    /// Default stop words, in surface form. Empty for languages without a
    /// built-in list.
    pub fn default_stop_words(self) -> &'static [&'static str] {
        match self {
            Language::English => stop::ENGLISH_STOP_WORDS,
            Language::Spanish => stop::SPANISH_STOP_WORDS,
            Language::French => stop::FRENCH_STOP_WORDS,
            Language::German => stop::GERMAN_STOP_WORDS,
            Language::Italian => stop::ITALIAN_STOP_WORDS,
            Language::Portuguese => stop::PORTUGUESE_STOP_WORDS,
            Language::Dutch => stop::DUTCH_STOP_WORDS,
            _ => &[],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(Language::parse("english"), Some(Language::English));
        assert_eq!(Language::parse("EN"), Some(Language::English));
        assert_eq!(Language::parse("eng"), Some(Language::English));
        assert_eq!(Language::parse("porter"), Some(Language::English));
        assert_eq!(Language::parse("spa"), Some(Language::Spanish));
        assert_eq!(Language::parse("fre"), Some(Language::French));
        assert_eq!(Language::parse("deu"), Some(Language::German));
        assert_eq!(Language::parse(" ru "), Some(Language::Russian));
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("xx"), None);
        assert_eq!(Language::parse("en-US"), None);
    }

    #[test]
    fn test_every_language_round_trips_through_its_name() {
        assert_eq!(Language::all().count(), 18);
        for language in Language::all() {
            assert_eq!(Language::parse(language.name()), Some(language));
            assert_eq!(language.to_string(), language.name());
        }
    }

    #[test]
    fn test_default_stop_words() {
        assert!(Language::English.default_stop_words().contains(&"the"));
        assert!(Language::Spanish.default_stop_words().contains(&"que"));
        assert!(Language::Tamil.default_stop_words().is_empty());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Language::Portuguese).unwrap();
        assert_eq!(json, "\"portuguese\"");
        let parsed: Language = serde_json::from_str("\"dutch\"").unwrap();
        assert_eq!(parsed, Language::Dutch);
    }
}
