//! The tokenizer-module contract and its host glue.
//!
//! The index builder asks a connection's [`TokenizerRegistry`] for a
//! [`TokenizerModule`] by name, creates a [`TokenizerInstance`] from the
//! arguments of the table declaration, and then, for each document, opens a
//! [`Cursor`] and pulls tokens until it is exhausted.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::fts::connection::Connection;
//! use fts_tokenizers::fts::extension;
//!
//! let mut conn = Connection::open();
//! extension::register_named_tokenizer(&mut conn, extension::HTML_TOKENIZER_NAME).unwrap();
//!
//! let table = conn
//!     .create_virtual_table(
//!         "CREATE VIRTUAL TABLE pages USING fts4(body, tokenize=HTMLTokenizer stemmer=english)",
//!     )
//!     .unwrap();
//! let terms: Vec<String> = table
//!     .tokenize(b"<h1>Unites</h1>")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(terms, vec!["unit"]);
//! ```

pub mod connection;
pub mod cursor;
pub mod extension;
pub mod instance;
pub mod module;
pub mod registry;

pub use connection::{Connection, FtsTable, FtsTableDecl, TokenizeClause};
pub use cursor::Cursor;
pub use instance::TokenizerInstance;
pub use module::{TokenizerKind, TokenizerModule};
pub use registry::TokenizerRegistry;
