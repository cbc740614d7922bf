//! Tokenizer module descriptors.
//!
//! A [`TokenizerModule`] is an immutable capability: it knows which tokenizer
//! variant it builds and which descriptor format it speaks, and nothing else.
//! Modules are created once and shared read-only between every connection
//! that registers them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{
    CharacterTokenizer, HtmlTokenizer, Tokenizer, UnicodeSnTokenizer,
};
use crate::error::{FtsError, Result};
use crate::fts::instance::TokenizerInstance;

/// Descriptor format version of the built-in modules.
pub const MODULE_VERSION: u32 = 1;

/// The tokenizer variants a module can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Letter/digit runs, no normalization.
    Character,
    /// Unicode words with case folding, diacritic removal and stemming.
    UnicodeStemming,
    /// Markup stripping in front of a unicode stemming tokenizer.
    Html,
}

impl TokenizerKind {
    /// Name of the tokenizer implementation behind this kind.
    pub fn tokenizer_name(self) -> &'static str {
        match self {
            TokenizerKind::Character => "character",
            TokenizerKind::UnicodeStemming => "unicodesn",
            TokenizerKind::Html => "html",
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tokenizer_name())
    }
}

/// An immutable tokenizer-module descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenizerModule {
    kind: TokenizerKind,
    version: u32,
}

impl TokenizerModule {
    pub const fn new(kind: TokenizerKind, version: u32) -> Self {
        TokenizerModule { kind, version }
    }

    pub const fn character() -> Self {
        Self::new(TokenizerKind::Character, MODULE_VERSION)
    }

    pub const fn unicode_stemming() -> Self {
        Self::new(TokenizerKind::UnicodeStemming, MODULE_VERSION)
    }

    pub const fn html() -> Self {
        Self::new(TokenizerKind::Html, MODULE_VERSION)
    }

    pub fn kind(&self) -> TokenizerKind {
        self.kind
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Create a configured instance.
    ///
    /// `args` are the words following the tokenizer name in a `tokenize=`
    /// clause, forwarded verbatim. Bad arguments fail with
    /// [`FtsError::InvalidArgument`]; an unrecognized language tag does not.
    pub fn create<S: AsRef<str>>(&self, args: &[S]) -> Result<TokenizerInstance> {
        let tokenizer: Box<dyn Tokenizer> = match self.kind {
            TokenizerKind::Character => {
                if let Some(arg) = args.iter().map(AsRef::as_ref).find(|a| !a.trim().is_empty()) {
                    return Err(FtsError::invalid_argument(format!(
                        "character tokenizer takes no arguments, got '{arg}'"
                    )));
                }
                Box::new(CharacterTokenizer::new())
            }
            TokenizerKind::UnicodeStemming => Box::new(UnicodeSnTokenizer::from_args(args)?),
            TokenizerKind::Html => Box::new(HtmlTokenizer::from_args(args)?),
        };

        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        log::debug!("created {} instance with args {:?}", self.kind, args);
        Ok(TokenizerInstance::new(self.kind, tokenizer, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[test]
    fn test_builtin_descriptors() {
        assert_eq!(TokenizerModule::character().kind(), TokenizerKind::Character);
        assert_eq!(TokenizerModule::html().kind(), TokenizerKind::Html);
        assert_eq!(TokenizerModule::unicode_stemming().version(), MODULE_VERSION);
        assert_ne!(TokenizerModule::character(), TokenizerModule::html());
    }

    #[test]
    fn test_create_each_kind() {
        for module in [
            TokenizerModule::character(),
            TokenizerModule::unicode_stemming(),
            TokenizerModule::html(),
        ] {
            let instance = module.create(NO_ARGS).unwrap();
            assert_eq!(instance.kind(), module.kind());
            assert_eq!(instance.tokenizer_name().unwrap(), module.kind().tokenizer_name());
        }
    }

    #[test]
    fn test_character_rejects_arguments() {
        let err = TokenizerModule::character().create(&["stemmer=english"]).unwrap_err();
        assert!(matches!(err, FtsError::InvalidArgument(_)));
        assert!(TokenizerModule::character().create(&["", "  "]).is_ok());
    }

    #[test]
    fn test_unicode_rejects_unknown_keys() {
        let err = TokenizerModule::unicode_stemming()
            .create(&["colour=red"])
            .unwrap_err();
        assert!(matches!(err, FtsError::InvalidArgument(_)));
    }

    #[test]
    fn test_bad_language_still_creates() {
        let instance = TokenizerModule::html().create(&["stemmer=xx"]).unwrap();
        assert_eq!(instance.args(), ["stemmer=xx".to_string()]);
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&TokenizerKind::UnicodeStemming).unwrap();
        assert_eq!(json, "\"unicode_stemming\"");
    }
}
