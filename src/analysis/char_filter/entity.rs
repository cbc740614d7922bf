//! HTML character reference decoding.
//!
//! Supports decimal (`&#233;`) and hexadecimal (`&#xE9;`) references and the
//! named references most often found in real documents: the XML core set,
//! the whole Latin-1 block and common typographic punctuation. References
//! must be terminated by `;`.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::util::utf8::REPLACEMENT;

/// Longest entity name worth looking up.
const MAX_NAME_LEN: usize = 32;

/// Longest digit run accepted in a numeric reference.
const MAX_DIGITS: usize = 8;

/// Entity names for U+00A0..=U+00FF, in codepoint order.
const LATIN1_NAMES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave",
    "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve",
    "Oacute", "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml",
    "Yacute", "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig",
    "ccedil", "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth",
    "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave",
    "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml",
];

const OTHER_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("OElig", '\u{0152}'),
    ("oelig", '\u{0153}'),
    ("Scaron", '\u{0160}'),
    ("scaron", '\u{0161}'),
    ("Yuml", '\u{0178}'),
    ("fnof", '\u{0192}'),
    ("circ", '\u{02C6}'),
    ("tilde", '\u{02DC}'),
    ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'),
    ("thinsp", '\u{2009}'),
    ("zwnj", '\u{200C}'),
    ("zwj", '\u{200D}'),
    ("lrm", '\u{200E}'),
    ("rlm", '\u{200F}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("sbquo", '\u{201A}'),
    ("ldquo", '\u{201C}'),
    ("rdquo", '\u{201D}'),
    ("bdquo", '\u{201E}'),
    ("dagger", '\u{2020}'),
    ("Dagger", '\u{2021}'),
    ("bull", '\u{2022}'),
    ("hellip", '\u{2026}'),
    ("permil", '\u{2030}'),
    ("prime", '\u{2032}'),
    ("Prime", '\u{2033}'),
    ("lsaquo", '\u{2039}'),
    ("rsaquo", '\u{203A}'),
    ("oline", '\u{203E}'),
    ("euro", '\u{20AC}'),
    ("trade", '\u{2122}'),
    ("larr", '\u{2190}'),
    ("uarr", '\u{2191}'),
    ("rarr", '\u{2192}'),
    ("darr", '\u{2193}'),
    ("harr", '\u{2194}'),
];

static NAMED_ENTITIES: LazyLock<AHashMap<&'static str, char>> = LazyLock::new(|| {
    let latin1 = LATIN1_NAMES
        .iter()
        .zip(0xA0u32..)
        .filter_map(|(&name, cp)| char::from_u32(cp).map(|c| (name, c)));
    latin1.chain(OTHER_ENTITIES.iter().copied()).collect()
});

/// Look up a named entity (without `&` and `;`). Names are case-sensitive.
pub fn lookup_named(name: &str) -> Option<char> {
    NAMED_ENTITIES.get(name).copied()
}

/// Decode the character reference starting at `input[pos]`, which must be `&`.
///
/// Returns the decoded codepoint and the number of bytes the reference spans,
/// or `None` if the bytes there do not form a complete, known reference.
/// Numeric references to NUL, surrogates or values beyond U+10FFFF decode to
/// U+FFFD.
pub fn decode_reference(input: &[u8], pos: usize) -> Option<(char, usize)> {
    if input.get(pos) != Some(&b'&') {
        return None;
    }
    let rest = &input[pos + 1..];

    if rest.first() == Some(&b'#') {
        let (radix, digits_from) = match rest.get(1).copied() {
            Some(b'x') | Some(b'X') => (16, 2),
            _ => (10, 1),
        };
        let digits = rest[digits_from..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit() && (radix == 16 || b.is_ascii_digit()))
            .count();
        if digits == 0 || digits > MAX_DIGITS {
            return None;
        }
        let end = digits_from + digits;
        if rest.get(end) != Some(&b';') {
            return None;
        }
        let text = std::str::from_utf8(&rest[digits_from..end]).ok()?;
        let value = u32::from_str_radix(text, radix).ok()?;
        let c = match value {
            0 => REPLACEMENT,
            v => char::from_u32(v).unwrap_or(REPLACEMENT),
        };
        return Some((c, end + 2));
    }

    let name_len = rest
        .iter()
        .take(MAX_NAME_LEN + 1)
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if name_len == 0 || name_len > MAX_NAME_LEN || rest.get(name_len) != Some(&b';') {
        return None;
    }
    let name = std::str::from_utf8(&rest[..name_len]).ok()?;
    lookup_named(name).map(|c| (c, name_len + 2))
}
