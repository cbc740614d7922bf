//! # fts-tokenizers
//!
//! Pluggable tokenizer modules for full-text search indexes.
//!
//! ## Features
//!
//! - Three tokenizer variants: `character`, `unicodesn` (Unicode words with
//!   Snowball stemming) and `HTMLTokenizer` (markup-aware)
//! - Byte offsets that always point into the caller's original buffer
//! - Malformed UTF-8 tolerated everywhere
//! - Per-connection tokenizer registries with extension-style entry points

pub mod analysis;
pub mod cli;
pub mod error;
pub mod fts;
pub mod util;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::error::{FtsError, Result};
    pub use crate::fts::{Connection, Cursor, TokenizerInstance, TokenizerKind, TokenizerModule, TokenizerRegistry};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
