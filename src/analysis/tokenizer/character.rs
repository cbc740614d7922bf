//! Character-class tokenizer implementation.
//!
//! The lowest-common-denominator tokenizer: every maximal run of letters and
//! digits becomes one token, everything else separates tokens and is dropped.
//! There is no case folding and no stemming, which makes it suitable for
//! identifiers, codes and other text that is not natural-language prose.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::tokenizer::Tokenizer;
//! use fts_tokenizers::analysis::tokenizer::character::CharacterTokenizer;
//!
//! let tokenizer = CharacterTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("SKU-4411/B".as_bytes()).unwrap().collect();
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["SKU", "4411", "B"]);
//! ```

use std::iter::Peekable;

use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::util::utf8::{Decoded, REPLACEMENT, Utf8Units};

/// A tokenizer that emits runs of letters and digits.
///
/// Combining marks continue a run but never start one, so a decomposed
/// `e\u{301}` stays a single token. Each invalid UTF-8 sequence becomes its own
/// U+FFFD token spanning the bad bytes.
#[derive(Clone, Debug, Default)]
pub struct CharacterTokenizer;

impl CharacterTokenizer {
    /// Create a new character tokenizer.
    pub fn new() -> Self {
        CharacterTokenizer
    }

    fn starts_run(c: char) -> bool {
        c.is_alphanumeric()
    }

    fn continues_run(c: char) -> bool {
        c.is_alphanumeric() || is_combining_mark(c)
    }
}

impl Tokenizer for CharacterTokenizer {
    fn tokenize<'a>(&'a self, input: &'a [u8]) -> Result<TokenStream<'a>> {
        Ok(Box::new(CharacterTokenStream {
            units: Utf8Units::new(input).peekable(),
            position: 0,
        }))
    }

    fn name(&self) -> &'static str {
        "character"
    }
}

/// Lazily scans the buffer; nothing is buffered beyond the current run.
struct CharacterTokenStream<'a> {
    units: Peekable<Utf8Units<'a>>,
    position: usize,
}

impl CharacterTokenStream<'_> {
    fn emit(&mut self, text: String, start: usize, end: usize) -> Token {
        let token = Token::with_offsets(text, self.position, start, end);
        self.position += 1;
        token
    }
}

impl Iterator for CharacterTokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (offset, unit, len) = self.units.next()?;
            let c = match unit {
                Decoded::Invalid => {
                    log::debug!("replacing {len} invalid byte(s) at offset {offset}");
                    return Some(self.emit(REPLACEMENT.to_string(), offset, offset + len));
                }
                Decoded::Char(c) if CharacterTokenizer::starts_run(c) => c,
                Decoded::Char(_) => continue,
            };

            let mut text = String::from(c);
            let mut end = offset + len;
            while let Some(&(next_offset, Decoded::Char(next), next_len)) = self.units.peek() {
                if !CharacterTokenizer::continues_run(next) {
                    break;
                }
                text.push(next);
                end = next_offset + next_len;
                self.units.next();
            }

            return Some(self.emit(text, offset, end));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &[u8]) -> Vec<Token> {
        CharacterTokenizer::new().tokenize(input).unwrap().collect()
    }

    #[test]
    fn test_letter_and_digit_runs() {
        let tokens = tokenize(b"abc 123");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::with_offsets("abc", 0, 0, 3));
        assert_eq!(tokens[1], Token::with_offsets("123", 1, 4, 7));
    }

    #[test]
    fn test_mixed_alphanumeric_is_one_run() {
        let texts: Vec<String> = tokenize(b"abc123, x_y").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["abc123", "x", "y"]);
    }

    #[test]
    fn test_no_case_folding() {
        let tokens = tokenize("Straße ÉTÉ".as_bytes());
        assert_eq!(tokens[0].text, "Straße");
        assert_eq!(tokens[1].text, "ÉTÉ");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (8, 13));
    }

    #[test]
    fn test_combining_mark_continues_run() {
        let tokens = tokenize("cafe\u{301} \u{301}x".as_bytes());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "cafe\u{301}");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert!(tokenize(b"").is_empty());
        assert!(tokenize(b" ,.;- ").is_empty());
    }

    #[test]
    fn test_invalid_bytes_become_replacement_tokens() {
        let tokens = tokenize(b"ab\xFFcd \xE2\x82");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "\u{FFFD}", "cd", "\u{FFFD}"]);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (2, 3));
        assert_eq!((tokens[3].start_offset, tokens[3].end_offset), (6, 8));
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(CharacterTokenizer::new().name(), "character");
    }
}
