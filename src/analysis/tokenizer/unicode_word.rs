//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). It properly handles international text and filters out non-word
//! segments like punctuation and whitespace. It does no normalization; see
//! [`UnicodeSnTokenizer`](super::unicodesn::UnicodeSnTokenizer) for that.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::tokenizer::Tokenizer;
//! use fts_tokenizers::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world! can't stop".as_bytes()).unwrap().collect();
//!
//! // Punctuation and whitespace are automatically filtered out
//! assert_eq!(tokens[0].text, "Hello");
//! assert_eq!(tokens[1].text, "world");
//! assert_eq!(tokens[2].text, "can't");
//! ```

use std::str::Utf8Chunks;

use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::util::utf8::REPLACEMENT;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Segments containing at least one alphanumeric character are words; all
/// other segments are separators and are skipped. Invalid UTF-8 splits the
/// text: each invalid sequence becomes a U+FFFD token and the valid runs on
/// either side are segmented independently.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }

    fn is_word(segment: &str) -> bool {
        segment.chars().any(|c| c.is_alphanumeric())
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&'a self, input: &'a [u8]) -> Result<TokenStream<'a>> {
        Ok(Box::new(WordStream {
            chunks: input.utf8_chunks(),
            next_chunk_offset: 0,
            words: None,
            invalid: None,
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

struct WordStream<'a> {
    chunks: Utf8Chunks<'a>,
    next_chunk_offset: usize,
    /// Word segmentation of the current valid run, with the run's base offset.
    words: Option<(usize, UWordBoundIndices<'a>)>,
    /// Invalid span trailing the current valid run.
    invalid: Option<(usize, usize)>,
    position: usize,
}

impl WordStream<'_> {
    fn emit(&mut self, text: &str, start: usize, end: usize) -> Token {
        let token = Token::with_offsets(text, self.position, start, end);
        self.position += 1;
        token
    }
}

impl Iterator for WordStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some((base, words)) = self.words.as_mut() {
                let base = *base;
                if let Some((i, word)) = words.find(|(_, w)| UnicodeWordTokenizer::is_word(w)) {
                    return Some(self.emit(word, base + i, base + i + word.len()));
                }
                self.words = None;
            }

            if let Some((start, end)) = self.invalid.take() {
                log::debug!("replacing {} invalid byte(s) at offset {start}", end - start);
                let mut buf = [0u8; 4];
                return Some(self.emit(REPLACEMENT.encode_utf8(&mut buf), start, end));
            }

            let chunk = self.chunks.next()?;
            let base = self.next_chunk_offset;
            let valid = chunk.valid();
            let invalid = chunk.invalid();
            self.next_chunk_offset += valid.len() + invalid.len();

            if !valid.is_empty() {
                self.words = Some((base, valid.split_word_bound_indices()));
            }
            if !invalid.is_empty() {
                let start = base + valid.len();
                self.invalid = Some((start, start + invalid.len()));
            }
        }
    }
}
