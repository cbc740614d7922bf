//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! typically don't contribute to search relevance, plus default stop word
//! lists for the languages that have one.
//!
//! The filter compares token text verbatim. Callers that stem tokens before
//! this filter must build it from stemmed stop words as well; see
//! [`StopFilter::from_words`].
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::token_filter::Filter;
//! use fts_tokenizers::analysis::token_filter::stop::{ENGLISH_STOP_WORDS, StopFilter};
//! use fts_tokenizers::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(ENGLISH_STOP_WORDS.iter().copied());
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default Spanish stop words.
pub const SPANISH_STOP_WORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o", "este",
    "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también", "me", "hasta",
    "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni",
    "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes", "algunos",
    "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos", "mucho",
    "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo",
    "nosotros",
];

/// Default French stop words.
pub const FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa",
    "se", "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos",
    "votre", "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée", "étées",
    "étés", "étant", "suis", "es", "est", "sommes", "êtes", "sont",
];

/// Default German stop words.
pub const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "bist",
    "da", "damit", "dann", "das", "dass", "dein", "dem", "den", "der", "des", "dich", "die",
    "dir", "doch", "du", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es", "euer",
    "für", "hat", "hatte", "ich", "ihr", "im", "in", "ist", "ja", "jede", "kein", "man", "mein",
    "mich", "mir", "mit", "nach", "nicht", "noch", "nun", "nur", "ob", "oder", "ohne", "sehr",
    "sein", "sich", "sie", "sind", "so", "um", "und", "uns", "unser", "von", "vor", "war",
    "was", "weil", "wenn", "wie", "wir", "wird", "zu", "zum", "zur",
];

/// Default Italian stop words.
pub const ITALIAN_STOP_WORDS: &[&str] = &[
    "ad", "al", "allo", "ai", "agli", "alla", "alle", "con", "col", "da", "dal", "dallo", "dai",
    "dalla", "dalle", "di", "del", "dello", "dei", "degli", "della", "delle", "in", "nel",
    "nello", "nei", "negli", "nella", "nelle", "su", "sul", "sullo", "sui", "sulla", "sulle",
    "per", "tra", "contro", "io", "tu", "lui", "lei", "noi", "voi", "loro", "mio", "tuo", "suo",
    "il", "lo", "la", "i", "gli", "le", "un", "uno", "una", "ma", "ed", "se", "perché", "anche",
    "come", "chi", "che", "non", "più", "quale", "quanto", "quello", "questo", "sono", "è", "e",
    "o",
];

/// Default Portuguese stop words.
pub const PORTUGUESE_STOP_WORDS: &[&str] = &[
    "de", "a", "o", "que", "e", "do", "da", "em", "um", "para", "com", "não", "uma", "os", "no",
    "se", "na", "por", "mais", "as", "dos", "como", "mas", "ao", "ele", "das", "à", "seu",
    "sua", "ou", "quando", "muito", "nos", "já", "eu", "também", "só", "pelo", "pela", "até",
    "isso", "ela", "entre", "depois", "sem", "mesmo", "aos", "seus", "quem", "nas", "me",
    "esse", "eles", "você", "essa", "num", "nem", "suas", "meu", "às", "minha", "numa", "pelos",
    "elas", "qual", "nós", "lhe", "deles", "essas", "esses", "pelas", "este", "dele",
];

/// Default Dutch stop words.
pub const DUTCH_STOP_WORDS: &[&str] = &[
    "de", "en", "van", "ik", "te", "dat", "die", "in", "een", "hij", "het", "niet", "zijn", "is",
    "was", "op", "aan", "met", "als", "voor", "had", "er", "maar", "om", "hem", "dan", "zou",
    "of", "wat", "mijn", "men", "dit", "zo", "door", "over", "ze", "zich", "bij", "ook", "tot",
    "je", "mij", "uit", "der", "daar", "haar", "naar", "heb", "hoe", "heeft", "hebben", "deze",
    "u", "want", "nog", "zal", "me", "zij", "nu", "ge", "geen", "omdat", "iets", "worden",
    "toch", "al", "waren", "veel", "meer", "doen", "toen", "moet", "ben", "zonder", "kan",
    "hun", "dus", "alles", "onder", "ja", "eens", "hier", "wie", "werd", "altijd", "doch",
    "wordt", "wezen", "kunnen", "ons", "zelf", "tegen", "na", "reeds", "wil", "kon", "niets",
    "uw", "iemand", "geweest", "andere",
];

/// A filter that removes stop words from the token stream.
///
/// The word set is shared behind an [`Arc`], so clones are cheap.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter with an explicit word set.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Filter for StopFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        if self.is_empty() {
            return Ok(tokens);
        }
        Ok(Box::new(
            tokens.filter(move |token| !self.is_stop_word(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(ENGLISH_STOP_WORDS.iter().copied());
        let tokens = vec![
            Token::new("this", 0),
            Token::new("is", 1),
            Token::new("test", 2),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "test");
        assert_eq!(result[0].position, 2);
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = StopFilter::default();
        assert!(filter.is_empty());
        let tokens = vec![Token::new("the", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_comparison_is_exact() {
        let filter = StopFilter::from_words(["the"]);
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_default_lists_are_lowercase() {
        for list in [
            ENGLISH_STOP_WORDS,
            SPANISH_STOP_WORDS,
            FRENCH_STOP_WORDS,
            GERMAN_STOP_WORDS,
            ITALIAN_STOP_WORDS,
            PORTUGUESE_STOP_WORDS,
            DUTCH_STOP_WORDS,
        ] {
            assert!(list.iter().all(|w| *w == w.to_lowercase()));
        }
    }
}
