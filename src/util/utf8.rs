//! Lossless UTF-8 decoding over raw byte buffers.
//!
//! Tokenizers receive bytes, not `&str`, and must never fail a document over
//! one bad byte. [`Utf8Units`] walks a buffer codepoint by codepoint and
//! reports each maximal invalid sequence as a single [`Decoded::Invalid`] unit,
//! using the same grouping as [`String::from_utf8_lossy`].

/// The replacement codepoint emitted for invalid byte sequences.
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// One decoded unit of a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A valid Unicode scalar value.
    Char(char),
    /// A maximal invalid or truncated byte sequence.
    Invalid,
}

impl Decoded {
    /// The codepoint this unit stands for; invalid sequences become U+FFFD.
    pub fn as_char(self) -> char {
        match self {
            Decoded::Char(c) => c,
            Decoded::Invalid => REPLACEMENT,
        }
    }
}

/// Decode the unit starting at `pos`, returning it with its byte length.
///
/// Returns `None` when `pos` is at or past the end of the buffer.
pub fn decode_at(bytes: &[u8], pos: usize) -> Option<(Decoded, usize)> {
    let lead = *bytes.get(pos)?;
    if lead < 0x80 {
        return Some((Decoded::Char(lead as char), 1));
    }

    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return Some((Decoded::Invalid, 1)),
    };

    let end = (pos + width).min(bytes.len());
    match std::str::from_utf8(&bytes[pos..end]) {
        Ok(s) => match s.chars().next() {
            Some(c) => Some((Decoded::Char(c), end - pos)),
            None => Some((Decoded::Invalid, 1)),
        },
        // A truncated sequence at the end of the buffer has no error_len.
        Err(e) => Some((Decoded::Invalid, e.error_len().unwrap_or(end - pos).max(1))),
    }
}

/// Iterator over `(byte_offset, unit, byte_len)` triples of a buffer.
#[derive(Clone, Debug)]
pub struct Utf8Units<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Units<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Utf8Units { bytes, pos: 0 }
    }
}

impl Iterator for Utf8Units<'_> {
    type Item = (usize, Decoded, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (unit, len) = decode_at(self.bytes, self.pos)?;
        let offset = self.pos;
        self.pos += len;
        Some((offset, unit, len))
    }
}
