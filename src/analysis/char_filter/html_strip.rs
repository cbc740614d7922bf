//! HTML markup stripping char filter.
//!
//! Scans the raw buffer byte by byte with a small state machine. Text bytes
//! are copied through, each tag, comment and `<script>`/`<style>` element is
//! replaced by a single space, and character references are decoded. Every
//! replacement is recorded as a [`Transformation`] so token offsets can be
//! mapped back to the original markup.
//!
//! Malformed markup never aborts the scan:
//!
//! - a `<` that does not open a recognizable tag, or whose tag never closes,
//!   is literal text;
//! - an unknown or unterminated character reference is literal text;
//! - an unterminated comment or script/style body runs to the end of the
//!   buffer and is dropped.
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::char_filter::CharFilter;
//! use fts_tokenizers::analysis::char_filter::html_strip::HtmlStripCharFilter;
//!
//! let filter = HtmlStripCharFilter::new();
//! let (text, _) = filter.filter(b"<p>caf&eacute; <b>au</b> lait</p>");
//! assert_eq!(text, " café  au  lait ".as_bytes());
//! ```

use super::entity;
use super::{CharFilter, Transformation};

/// Elements whose content is dropped along with the markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// What replaces a tag, comment or skipped element in the filtered text.
const MARKUP_SEPARATOR: &[u8] = b" ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HtmlState {
    Text,
    /// Just consumed `<`.
    TagOpen,
    TagName,
    /// Attributes, up to the closing `>`.
    InTag,
    Comment,
    ScriptOrStyleBody,
    /// At an `&` in text.
    EntityRef,
}

/// A char filter that removes HTML markup and decodes character references.
#[derive(Clone, Debug, Default)]
pub struct HtmlStripCharFilter;

impl HtmlStripCharFilter {
    /// Create a new HTML strip char filter.
    pub fn new() -> Self {
        HtmlStripCharFilter
    }
}

impl CharFilter for HtmlStripCharFilter {
    fn filter(&self, input: &[u8]) -> (Vec<u8>, Vec<Transformation>) {
        let mut scanner = Scanner::new(input);
        scanner.run();
        (scanner.out, scanner.transformations)
    }

    fn name(&self) -> &'static str {
        "html_strip"
    }
}

struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    state: HtmlState,
    out: Vec<u8>,
    transformations: Vec<Transformation>,
    /// Offset of the `<` that started the markup being scanned.
    markup_start: usize,
    tag_name: Vec<u8>,
    closing: bool,
    quote: Option<u8>,
    /// Element whose raw body is being skipped.
    raw_element: &'static str,
    last_gt: Option<usize>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            pos: 0,
            state: HtmlState::Text,
            out: Vec::with_capacity(input.len()),
            transformations: Vec::new(),
            markup_start: 0,
            tag_name: Vec::new(),
            closing: false,
            quote: None,
            raw_element: "",
            last_gt: input.iter().rposition(|&b| b == b'>'),
        }
    }

    fn run(&mut self) {
        loop {
            while self.pos < self.input.len() {
                self.step();
            }
            if !self.finish_at_end() {
                break;
            }
        }
    }

    fn step(&mut self) {
        let b = self.input[self.pos];
        match self.state {
            HtmlState::Text => match b {
                b'<' if self.opens_tag(self.pos) => {
                    self.markup_start = self.pos;
                    self.pos += 1;
                    self.state = HtmlState::TagOpen;
                }
                b'&' => self.state = HtmlState::EntityRef,
                _ => {
                    self.out.push(b);
                    self.pos += 1;
                }
            },
            HtmlState::EntityRef => {
                match entity::decode_reference(self.input, self.pos) {
                    Some((c, len)) => {
                        let mut buf = [0u8; 4];
                        let start = self.pos;
                        self.replace(start, start + len, c.encode_utf8(&mut buf).as_bytes());
                        self.pos += len;
                    }
                    None => {
                        self.out.push(b'&');
                        self.pos += 1;
                    }
                }
                self.state = HtmlState::Text;
            }
            HtmlState::TagOpen => {
                self.tag_name.clear();
                self.closing = false;
                self.quote = None;
                if self.input[self.pos..].starts_with(b"!--") {
                    self.pos += 3;
                    self.state = HtmlState::Comment;
                } else if b == b'/' {
                    self.closing = true;
                    self.pos += 1;
                    self.state = HtmlState::TagName;
                } else if b == b'!' || b == b'?' {
                    self.pos += 1;
                    self.state = HtmlState::InTag;
                } else {
                    self.state = HtmlState::TagName;
                }
            }
            HtmlState::TagName => {
                if b.is_ascii_alphanumeric() || b == b'-' || b == b':' {
                    self.tag_name.push(b.to_ascii_lowercase());
                    self.pos += 1;
                } else {
                    self.state = HtmlState::InTag;
                }
            }
            HtmlState::InTag => {
                self.pos += 1;
                match (self.quote, b) {
                    (Some(q), _) if b == q => self.quote = None,
                    (Some(_), _) => {}
                    (None, b'"' | b'\'') => self.quote = Some(b),
                    (None, b'>') => self.finish_tag(),
                    (None, _) => {}
                }
            }
            HtmlState::Comment => {
                match find(&self.input[self.pos..], b"-->") {
                    Some(i) => {
                        self.pos += i + 3;
                        self.replace_markup(self.pos);
                        self.state = HtmlState::Text;
                    }
                    None => self.pos = self.input.len(),
                }
            }
            HtmlState::ScriptOrStyleBody => match self.find_end_tag(self.pos) {
                Some(end) => {
                    self.pos = end;
                    self.replace_markup(end);
                    self.state = HtmlState::Text;
                }
                None => self.pos = self.input.len(),
            },
        }
    }

    /// Handle running out of input in the middle of a construct. Returns true
    /// when scanning must resume.
    fn finish_at_end(&mut self) -> bool {
        match self.state {
            HtmlState::Text | HtmlState::EntityRef => false,
            HtmlState::TagOpen | HtmlState::TagName | HtmlState::InTag => {
                // Unterminated tag: the `<` was text after all.
                self.out.push(b'<');
                self.pos = self.markup_start + 1;
                self.state = HtmlState::Text;
                true
            }
            HtmlState::Comment | HtmlState::ScriptOrStyleBody => {
                let end = self.input.len();
                self.replace_markup(end);
                self.state = HtmlState::Text;
                false
            }
        }
    }

    /// A `<` opens a tag only if a tag can start there and some `>` follows.
    /// Comments open unconditionally.
    fn opens_tag(&self, pos: usize) -> bool {
        if self.input[pos + 1..].starts_with(b"!--") {
            return true;
        }
        let starts_tag = matches!(
            self.input.get(pos + 1).copied(),
            Some(b) if b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?')
        );
        starts_tag && self.last_gt.is_some_and(|gt| gt > pos)
    }

    fn finish_tag(&mut self) {
        let self_closing = self.pos >= 2 && self.input[self.pos - 2] == b'/';
        let raw = RAW_TEXT_ELEMENTS
            .iter()
            .find(|name| name.as_bytes() == self.tag_name.as_slice());

        match raw {
            Some(name) if !self.closing && !self_closing => {
                self.raw_element = name;
                self.state = HtmlState::ScriptOrStyleBody;
            }
            _ => {
                self.replace_markup(self.pos);
                self.state = HtmlState::Text;
            }
        }
    }

    /// Find the end (exclusive) of the `</name ...>` tag closing the current
    /// raw element, searching from `from`.
    fn find_end_tag(&self, from: usize) -> Option<usize> {
        let name = self.raw_element.as_bytes();
        let mut i = from;
        while let Some(rel) = find(&self.input[i..], b"</") {
            let name_start = i + rel + 2;
            let name_end = name_start + name.len();
            let matches_name = self
                .input
                .get(name_start..name_end)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name));
            let boundary = matches!(
                self.input.get(name_end).copied(),
                None | Some(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
            );
            if matches_name && boundary {
                return Some(match find(&self.input[name_end..], b">") {
                    Some(gt) => name_end + gt + 1,
                    None => self.input.len(),
                });
            }
            i = name_start;
        }
        None
    }

    fn replace_markup(&mut self, end: usize) {
        self.replace(self.markup_start, end, MARKUP_SEPARATOR);
    }

    fn replace(&mut self, original_start: usize, original_end: usize, replacement: &[u8]) {
        let new_start = self.out.len();
        self.out.extend_from_slice(replacement);
        self.transformations.push(Transformation::new(
            original_start,
            original_end,
            new_start,
            self.out.len(),
        ));
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
