//! HTML-aware tokenizer.
//!
//! Two stages: [`HtmlStripCharFilter`] removes markup and decodes character
//! references, then an inner tokenizer (by default a
//! [`UnicodeSnTokenizer`]) splits the remaining prose. Token offsets from the
//! inner tokenizer refer to the stripped text; they are mapped back through
//! the filter's transformations so they point into the original markup.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::tokenizer::Tokenizer;
//! use fts_tokenizers::analysis::tokenizer::html::HtmlTokenizer;
//!
//! let tokenizer = HtmlTokenizer::default();
//! let input = "<p>Hello <b>World</b></p>";
//! let tokens: Vec<_> = tokenizer.tokenize(input.as_bytes()).unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(&input[tokens[0].start_offset..tokens[0].end_offset], "Hello");
//! assert_eq!(&input[tokens[1].start_offset..tokens[1].end_offset], "World");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{Bias, CharFilter, HtmlStripCharFilter, OffsetMap};
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::unicodesn::UnicodeSnTokenizer;
use crate::error::Result;

/// A tokenizer that strips HTML before delegating to an inner tokenizer.
#[derive(Clone)]
pub struct HtmlTokenizer {
    strip: HtmlStripCharFilter,
    inner: Arc<dyn Tokenizer>,
}

impl std::fmt::Debug for HtmlTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlTokenizer")
            .field("inner", &self.inner.name())
            .finish()
    }
}

impl HtmlTokenizer {
    /// Wrap an inner tokenizer.
    pub fn new(inner: Arc<dyn Tokenizer>) -> Self {
        HtmlTokenizer {
            strip: HtmlStripCharFilter::new(),
            inner,
        }
    }

    /// Build an HTML tokenizer whose prose tokenizer is a
    /// [`UnicodeSnTokenizer`] configured from `args`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        Ok(Self::new(Arc::new(UnicodeSnTokenizer::from_args(args)?)))
    }

    /// The tokenizer that runs on the stripped text.
    pub fn inner(&self) -> &dyn Tokenizer {
        self.inner.as_ref()
    }
}

impl Default for HtmlTokenizer {
    fn default() -> Self {
        Self::new(Arc::new(UnicodeSnTokenizer::default()))
    }
}

impl Tokenizer for HtmlTokenizer {
    fn tokenize<'a>(&'a self, input: &'a [u8]) -> Result<TokenStream<'a>> {
        let (stripped, transformations) = self.strip.filter(input);
        if transformations.is_empty() {
            return self.inner.tokenize(input);
        }

        let map = OffsetMap::new(&transformations);
        let tokens: Vec<Token> = self
            .inner
            .tokenize(&stripped)?
            .map(|mut token| {
                token.start_offset = map.to_original(token.start_offset, Bias::Start);
                token.end_offset = map.to_original(token.end_offset, Bias::End);
                token
            })
            .collect();

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
