//! Text analysis building blocks.
//!
//! Char filters rewrite raw bytes, tokenizers split bytes into tokens, and
//! token filters normalize the tokens.

pub mod char_filter;
pub mod language;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
