//! Per-document token cursors.
//!
//! A cursor walks one document's token stream. It never yields empty tokens,
//! numbers the tokens it yields consecutively from zero, and moves through
//! three states:
//!
//! ```text
//! Open --(stream ends)--> Exhausted
//!   \                        |
//!    `------(close)------> Closed
//! ```
//!
//! Once exhausted, [`Cursor::next`] keeps returning `Ok(None)`. Once closed it
//! returns [`FtsError::InvalidState`].

use std::fmt;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{FtsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Open,
    Exhausted,
    Closed,
}

/// Iteration state over one document.
pub struct Cursor<'a> {
    tokens: Option<TokenStream<'a>>,
    state: CursorState,
    /// Length of the document, for offset checks.
    length: usize,
    last_start: Option<usize>,
    position: usize,
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("state", &self.state)
            .field("length", &self.length)
            .field("position", &self.position)
            .finish()
    }
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: TokenStream<'a>, length: usize) -> Self {
        Cursor {
            tokens: Some(tokens),
            state: CursorState::Open,
            length,
            last_start: None,
            position: 0,
        }
    }

    /// Advance to the next non-empty token.
    ///
    /// Returns `Ok(None)` at end of stream, and again on every later call.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<Token>> {
        match self.state {
            CursorState::Closed => {
                return Err(FtsError::invalid_state("next called on a closed cursor"));
            }
            CursorState::Exhausted => return Ok(None),
            CursorState::Open => {}
        }

        loop {
            let Some(mut token) = self.tokens.as_mut().and_then(|tokens| tokens.next()) else {
                self.state = CursorState::Exhausted;
                self.tokens = None;
                return Ok(None);
            };
            if token.is_empty() {
                continue;
            }
            self.check_offsets(&token);
            self.last_start = Some(token.start_offset);
            token.position = self.position;
            self.position += 1;
            return Ok(Some(token));
        }
    }

    fn check_offsets(&self, token: &Token) {
        debug_assert!(
            token.start_offset < token.end_offset && token.end_offset <= self.length,
            "token {token:?} outside document of {} bytes",
            self.length
        );
        debug_assert!(
            self.last_start.is_none_or(|last| last <= token.start_offset),
            "token {token:?} starts before the previous token"
        );
    }

    /// Release the token stream. Closing twice is harmless.
    pub fn close(&mut self) {
        self.tokens = None;
        self.state = CursorState::Closed;
    }

    pub fn is_closed(&self) -> bool {
        self.state == CursorState::Closed
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Drain the remaining tokens.
    pub fn collect_tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
