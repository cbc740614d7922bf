//! Error types for the tokenizer modules.
//!
//! All fallible operations return [`FtsError`] through the crate-wide
//! [`Result`] alias. End of a token stream is not an error: cursors report it
//! as `Ok(None)`. Malformed UTF-8 is not an error either; every tokenizer
//! absorbs it into a replacement token.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::error::{FtsError, Result};
//!
//! fn configure(arg: &str) -> Result<()> {
//!     Err(FtsError::invalid_argument(format!("unknown key: {arg}")))
//! }
//!
//! let err = configure("colour=red").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid argument: unknown key: colour=red");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for tokenizer operations.
#[derive(Error, Debug)]
pub enum FtsError {
    /// Bad configuration or arguments at instance-creation time, or a bad
    /// buffer handed to `open`.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation called on a closed cursor, a destroyed instance or a closed
    /// connection.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Registry lookup miss.
    #[error("Unknown tokenizer: {0}")]
    UnknownTokenizer(String),

    /// Registering a tokenizer with a connection failed.
    #[error("Failed to register tokenizer '{name}': {reason}")]
    Registration { name: String, reason: String },

    /// I/O errors (CLI input and output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FtsError.
pub type Result<T> = std::result::Result<T, FtsError>;

impl FtsError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FtsError::InvalidArgument(msg.into())
    }

    /// Create a new invalid state error.
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        FtsError::InvalidState(msg.into())
    }

    /// Create a new unknown tokenizer error.
    pub fn unknown_tokenizer<S: Into<String>>(name: S) -> Self {
        FtsError::UnknownTokenizer(name.into())
    }

    /// Create a new registration error.
    pub fn registration<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        FtsError::Registration {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
