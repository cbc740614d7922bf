//! Unicode tokenizer with Snowball stemming ("unicodesn").
//!
//! The production tokenizer for natural-language text. It runs a fixed
//! pipeline over the buffer:
//!
//! 1. segment into words on Unicode word boundaries;
//! 2. case-fold each word (`casefold`, default on);
//! 3. strip diacritics (`remove_diacritics`, default on);
//! 4. stem with the Snowball algorithm for `language`, if any;
//! 5. drop stop words, compared stem to stem;
//! 6. drop words that normalized to nothing.
//!
//! Segmentation runs on the original text so every token's offsets point at
//! the word as written, even when normalization changes its length.
//!
//! # Configuration
//!
//! Instances are configured from the `tokenize=` arguments of a table
//! declaration, see [`UnicodeSnConfig::from_args`]:
//!
//! ```text
//! tokenize=unicodesn stemmer=english
//! tokenize=unicodesn language=fr casefold=0 stopwords=le,la,les
//! tokenize=unicodesn spa
//! ```
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::tokenizer::Tokenizer;
//! use fts_tokenizers::analysis::tokenizer::unicodesn::{UnicodeSnConfig, UnicodeSnTokenizer};
//!
//! let config = UnicodeSnConfig::from_args(&["stemmer=english"]).unwrap();
//! let tokenizer = UnicodeSnTokenizer::new(config);
//! let texts: Vec<String> = tokenizer
//!     .tokenize("The Unites of Café".as_bytes())
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(texts, vec!["unit", "cafe"]);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::language::Language;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::{
    CaseFoldFilter, DiacriticFilter, Filter, RemoveEmptyFilter, SnowballStemmer, StemFilter,
    StopFilter,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{FtsError, Result};

/// Configuration of a [`UnicodeSnTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnicodeSnConfig {
    /// Language tag selecting the stemmer and default stop words. `None`
    /// disables stemming.
    pub language: Option<String>,

    /// Fold case before stemming.
    pub casefold: bool,

    /// Strip combining diacritical marks.
    pub remove_diacritics: bool,

    /// Stop words replacing the language default. `Some(vec![])` disables
    /// stop words altogether.
    pub stopwords: Option<Vec<String>>,
}

impl Default for UnicodeSnConfig {
    fn default() -> Self {
        UnicodeSnConfig {
            language: None,
            casefold: true,
            remove_diacritics: true,
            stopwords: None,
        }
    }
}

impl UnicodeSnConfig {
    /// Parse tokenizer arguments.
    ///
    /// Each argument is `key=value`, with keys `language` (alias `stemmer`),
    /// `casefold`, `remove_diacritics` and `stopwords` (comma separated). An
    /// argument without `=` is a language tag. Later arguments override
    /// earlier ones. Unknown keys and malformed booleans are rejected.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let mut config = UnicodeSnConfig::default();

        for arg in args {
            let arg = arg.as_ref().trim();
            if arg.is_empty() {
                continue;
            }

            let Some((key, value)) = arg.split_once('=') else {
                config.language = Some(arg.to_string());
                continue;
            };
            let value = value.trim();

            match key.trim().to_ascii_lowercase().as_str() {
                "language" | "stemmer" => {
                    config.language = (!value.is_empty()).then(|| value.to_string());
                }
                "casefold" => config.casefold = parse_bool(key, value)?,
                "remove_diacritics" => config.remove_diacritics = parse_bool(key, value)?,
                "stopwords" => {
                    config.stopwords = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|w| !w.is_empty())
                            .map(str::to_string)
                            .collect(),
                    );
                }
                other => {
                    return Err(FtsError::invalid_argument(format!(
                        "unknown unicodesn option '{other}'"
                    )));
                }
            }
        }

        Ok(config)
    }

    /// Resolve the configured language tag. Unrecognized tags resolve to
    /// `None` with a warning.
    pub fn resolve_language(&self) -> Option<Language> {
        let tag = self.language.as_deref()?;
        let language = Language::parse(tag);
        if language.is_none() {
            log::warn!("unrecognized language tag '{tag}', stemming disabled");
        }
        language
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(FtsError::invalid_argument(format!(
            "option '{key}' expects a boolean, got '{value}'"
        ))),
    }
}

/// Word tokenizer with case folding, diacritic removal, stemming and stop
/// words.
///
/// All state is built at creation and read-only afterwards, so one instance
/// can drive any number of token streams at once.
#[derive(Clone)]
pub struct UnicodeSnTokenizer {
    config: UnicodeSnConfig,
    language: Option<Language>,
    words: UnicodeWordTokenizer,
    /// Per-word normalization, in order: fold, strip, stem.
    filters: Vec<Arc<dyn Filter>>,
    stop: StopFilter,
    remove_empty: RemoveEmptyFilter,
}

impl std::fmt::Debug for UnicodeSnTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnicodeSnTokenizer")
            .field("config", &self.config)
            .field("language", &self.language)
            .field("stop_words", &self.stop.len())
            .finish()
    }
}

impl UnicodeSnTokenizer {
    /// Build a tokenizer from a configuration.
    pub fn new(config: UnicodeSnConfig) -> Self {
        let language = config.resolve_language();

        let mut filters: Vec<Arc<dyn Filter>> = Vec::new();
        if config.casefold {
            filters.push(Arc::new(CaseFoldFilter::new()));
        }
        if config.remove_diacritics {
            filters.push(Arc::new(DiacriticFilter::new()));
        }
        if let Some(language) = language {
            filters.push(Arc::new(StemFilter::with_stemmer(Arc::new(
                SnowballStemmer::new(language),
            ))));
        }

        let mut tokenizer = UnicodeSnTokenizer {
            config,
            language,
            words: UnicodeWordTokenizer::new(),
            filters,
            stop: StopFilter::default(),
            remove_empty: RemoveEmptyFilter::new(),
        };
        tokenizer.stop = tokenizer.build_stop_filter();

        log::debug!(
            "created unicodesn tokenizer: language={:?} casefold={} remove_diacritics={} stop_words={}",
            tokenizer.language,
            tokenizer.config.casefold,
            tokenizer.config.remove_diacritics,
            tokenizer.stop.len()
        );
        tokenizer
    }

    /// Build a tokenizer from `tokenize=` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        Ok(Self::new(UnicodeSnConfig::from_args(args)?))
    }

    pub fn config(&self) -> &UnicodeSnConfig {
        &self.config
    }

    /// The stemming language, if one was recognized.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Normalize a single word the way tokens are normalized. Returns an
    /// empty string if nothing is left.
    pub fn normalize_word(&self, word: &str) -> String {
        let token = Token::new(word, 0);
        self.normalize(Box::new(std::iter::once(token)))
            .ok()
            .and_then(|mut tokens| tokens.next())
            .map(|t| t.text)
            .unwrap_or_default()
    }

    fn normalize<'a>(&'a self, mut tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    /// Stop words go through the same normalization as tokens so that the
    /// comparison happens between stems.
    fn build_stop_filter(&self) -> StopFilter {
        let surface: Vec<&str> = match (&self.config.stopwords, self.language) {
            (Some(words), _) => words.iter().map(String::as_str).collect(),
            (None, Some(language)) => language.default_stop_words().to_vec(),
            (None, None) => Vec::new(),
        };
        StopFilter::from_words(
            surface
                .into_iter()
                .map(|w| self.normalize_word(w))
                .filter(|w| !w.is_empty()),
        )
    }
}

impl Default for UnicodeSnTokenizer {
    fn default() -> Self {
        Self::new(UnicodeSnConfig::default())
    }
}

impl Tokenizer for UnicodeSnTokenizer {
    fn tokenize<'a>(&'a self, input: &'a [u8]) -> Result<TokenStream<'a>> {
        let tokens = self.words.tokenize(input)?;
        let tokens = self.normalize(tokens)?;
        let tokens = self.stop.filter(tokens)?;
        self.remove_empty.filter(tokens)
    }

    fn name(&self) -> &'static str {
        "unicodesn"
    }
}
