//! Configured tokenizer instances.

use std::fmt;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::{FtsError, Result};
use crate::fts::cursor::Cursor;
use crate::fts::module::TokenizerKind;

/// A tokenizer configured from the arguments of one table declaration.
///
/// Instances are reentrant: [`open`](Self::open) borrows the instance
/// immutably and every cursor keeps its own scan state, so several documents
/// may be tokenized at once. [`destroy`](Self::destroy) needs exclusive
/// access, which the borrow checker only grants once every cursor is gone.
pub struct TokenizerInstance {
    kind: TokenizerKind,
    tokenizer: Option<Box<dyn Tokenizer>>,
    args: Vec<String>,
}

impl fmt::Debug for TokenizerInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerInstance")
            .field("kind", &self.kind)
            .field("args", &self.args)
            .field("destroyed", &self.is_destroyed())
            .finish()
    }
}

impl TokenizerInstance {
    pub(crate) fn new(kind: TokenizerKind, tokenizer: Box<dyn Tokenizer>, args: Vec<String>) -> Self {
        TokenizerInstance {
            kind,
            tokenizer: Some(tokenizer),
            args,
        }
    }

    pub fn kind(&self) -> TokenizerKind {
        self.kind
    }

    /// The arguments this instance was created with.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn is_destroyed(&self) -> bool {
        self.tokenizer.is_none()
    }

    /// Name of the underlying tokenizer.
    pub fn tokenizer_name(&self) -> Result<&'static str> {
        self.tokenizer()
            .map(|t| t.name())
            .ok_or_else(|| FtsError::invalid_state("tokenizer instance has been destroyed"))
    }

    fn tokenizer(&self) -> Option<&dyn Tokenizer> {
        self.tokenizer.as_deref()
    }

    /// Open a cursor over a document.
    ///
    /// Fails with [`FtsError::InvalidArgument`] if the instance has been
    /// destroyed.
    pub fn open<'a>(&'a self, buffer: &'a [u8]) -> Result<Cursor<'a>> {
        let tokenizer = self.tokenizer().ok_or_else(|| {
            FtsError::invalid_argument("cannot open a cursor on a destroyed tokenizer instance")
        })?;
        let tokens = tokenizer.tokenize(buffer)?;
        Ok(Cursor::new(tokens, buffer.len()))
    }

    /// Open a cursor from a buffer/length pair.
    ///
    /// A missing buffer is only valid with a zero length, and `length` may
    /// not exceed the buffer. Only the first `length` bytes are tokenized.
    pub fn open_raw<'a>(&'a self, buffer: Option<&'a [u8]>, length: usize) -> Result<Cursor<'a>> {
        let buffer: &'a [u8] = match buffer {
            Some(buffer) if length <= buffer.len() => &buffer[..length],
            Some(buffer) => {
                return Err(FtsError::invalid_argument(format!(
                    "length {length} exceeds buffer of {} bytes",
                    buffer.len()
                )));
            }
            None if length == 0 => &[],
            None => {
                return Err(FtsError::invalid_argument(format!(
                    "null buffer with length {length}"
                )));
            }
        };
        self.open(buffer)
    }

    /// Release the tokenizer. A destroyed instance cannot be destroyed again.
    pub fn destroy(&mut self) -> Result<()> {
        match self.tokenizer.take() {
            Some(tokenizer) => {
                log::debug!("destroyed {} instance", tokenizer.name());
                Ok(())
            }
            None => Err(FtsError::invalid_state(
                "tokenizer instance already destroyed",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fts::module::TokenizerModule;

    fn character() -> TokenizerInstance {
        TokenizerModule::character().create::<&str>(&[]).unwrap()
    }

    #[test]
    fn test_open_and_collect() {
        let instance = character();
        let tokens = instance.open(b"abc 123").unwrap().collect_tokens().unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (4, 7));
    }

    #[test]
    fn test_open_raw() {
        let instance = character();

        let tokens = instance.open_raw(Some(&b"abc 123"[..]), 3).unwrap().collect_tokens().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "abc");

        let mut cursor = instance.open_raw(None, 0).unwrap();
        assert_eq!(cursor.next().unwrap(), None);

        let err = instance.open_raw(None, 4).unwrap_err();
        assert!(matches!(err, FtsError::InvalidArgument(_)));
        let err = instance.open_raw(Some(&b"ab"[..]), 3).unwrap_err();
        assert!(matches!(err, FtsError::InvalidArgument(_)));
    }

    #[test]
    fn test_concurrent_cursors_are_independent() {
        let instance = character();
        let mut first = instance.open(b"one two").unwrap();
        let mut second = instance.open(b"three").unwrap();

        assert_eq!(first.next().unwrap().unwrap().text, "one");
        assert_eq!(second.next().unwrap().unwrap().text, "three");
        assert_eq!(first.next().unwrap().unwrap().text, "two");
        assert_eq!(second.next().unwrap(), None);
    }

    #[test]
    fn test_destroy() {
        let mut instance = character();
        assert!(!instance.is_destroyed());
        instance.destroy().unwrap();
        assert!(instance.is_destroyed());

        let err = instance.open(b"abc").unwrap_err();
        assert!(matches!(err, FtsError::InvalidArgument(_)));
        let err = instance.destroy().unwrap_err();
        assert!(matches!(err, FtsError::InvalidState(_)));
        let err = instance.tokenizer_name().unwrap_err();
        assert!(matches!(err, FtsError::InvalidState(_)));
    }
}
