//! Char filters that rewrite the raw buffer before tokenization.
//!
//! A char filter returns the filtered bytes together with the list of
//! [`Transformation`]s it applied. Tokenizers run on the filtered bytes, and
//! [`OffsetMap`] translates their offsets back into the original buffer so
//! callers can highlight matches in the source document.
//!
//! # Available Filters
//!
//! - [`html_strip::HtmlStripCharFilter`] - Removes markup and decodes entities
//!
//! # Examples
//!
//! ```
//! use fts_tokenizers::analysis::char_filter::{Bias, OffsetMap, Transformation};
//!
//! // "a<b>c" filtered to "a c": the tag became a single space.
//! let transformations = vec![Transformation::new(1, 4, 1, 2)];
//! let map = OffsetMap::new(&transformations);
//!
//! assert_eq!(map.to_original(2, Bias::Start), 4); // "c" starts after the tag
//! assert_eq!(map.to_original(1, Bias::End), 1); // "a" ends before it
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }

    fn original_len(&self) -> usize {
        self.original_end - self.original_start
    }

    fn new_len(&self) -> usize {
        self.new_end - self.new_start
    }

    fn delta(&self) -> isize {
        self.original_len() as isize - self.new_len() as isize
    }
}

/// Trait for character filters that transform bytes before tokenization.
///
/// Implementations return the filtered buffer and the transformations, ordered
/// by position and non-overlapping. Bytes outside every transformation are
/// copied through unchanged.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input buffer.
    fn filter(&self, input: &[u8]) -> (Vec<u8>, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Which side of a token an offset belongs to.
///
/// The side decides where an offset lands when it touches a replaced span: a
/// start offset moves past text deleted at that point, an end offset stays
/// before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    Start,
    End,
}

/// Maps offsets in filtered text back to offsets in the original text.
#[derive(Debug)]
pub struct OffsetMap<'t> {
    transformations: &'t [Transformation],
    /// `prefix[i]` is the net length change of `transformations[..i]`.
    prefix: Vec<isize>,
}

impl<'t> OffsetMap<'t> {
    pub fn new(transformations: &'t [Transformation]) -> Self {
        let mut prefix = Vec::with_capacity(transformations.len() + 1);
        let mut acc = 0isize;
        prefix.push(acc);
        for t in transformations {
            acc += t.delta();
            prefix.push(acc);
        }
        OffsetMap {
            transformations,
            prefix,
        }
    }

    /// Translate `offset` in the filtered text into the original text.
    ///
    /// An offset strictly inside a replacement snaps to the replacement's
    /// original start or end according to `bias`.
    pub fn to_original(&self, offset: usize, bias: Bias) -> usize {
        let first = self
            .transformations
            .partition_point(|t| t.new_end < offset);
        let mut delta = self.prefix[first];

        for t in &self.transformations[first..] {
            if offset < t.new_start {
                break;
            }
            if offset > t.new_start && offset < t.new_end {
                return match bias {
                    Bias::Start => t.original_start,
                    Bias::End => t.original_end,
                };
            }
            if offset == t.new_start && (t.new_len() > 0 || bias == Bias::End) {
                break;
            }
            delta += t.delta();
        }

        (offset as isize + delta) as usize
    }
}

pub mod entity;
pub mod html_strip;

pub use html_strip::HtmlStripCharFilter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_without_transformations() {
        let map = OffsetMap::new(&[]);
        assert_eq!(map.to_original(0, Bias::Start), 0);
        assert_eq!(map.to_original(42, Bias::End), 42);
    }

    #[test]
    fn test_shrinking_replacement() {
        // "x&amp;y" -> "x&y"
        let transformations = vec![Transformation::new(1, 6, 1, 2)];
        let map = OffsetMap::new(&transformations);

        assert_eq!(map.to_original(0, Bias::Start), 0);
        assert_eq!(map.to_original(1, Bias::Start), 1);
        assert_eq!(map.to_original(2, Bias::Start), 6);
        assert_eq!(map.to_original(2, Bias::End), 6);
        assert_eq!(map.to_original(3, Bias::End), 7);
    }

    #[test]
    fn test_growing_replacement_snaps_inside() {
        // one original byte became four filtered bytes
        let transformations = vec![Transformation::new(3, 4, 3, 7)];
        let map = OffsetMap::new(&transformations);

        assert_eq!(map.to_original(5, Bias::Start), 3);
        assert_eq!(map.to_original(5, Bias::End), 4);
        assert_eq!(map.to_original(7, Bias::End), 4);
        assert_eq!(map.to_original(9, Bias::End), 6);
    }

    #[test]
    fn test_deletion_bias() {
        // "ab<!---->cd" -> "abcd"
        let transformations = vec![Transformation::new(2, 9, 2, 2)];
        let map = OffsetMap::new(&transformations);

        assert_eq!(map.to_original(2, Bias::Start), 9);
        assert_eq!(map.to_original(2, Bias::End), 2);
        assert_eq!(map.to_original(4, Bias::End), 11);
    }

    #[test]
    fn test_many_transformations() {
        // "<p>Hi</p> <i>yo</i>" -> " Hi    yo "
        let transformations = vec![
            Transformation::new(0, 3, 0, 1),
            Transformation::new(5, 9, 3, 4),
            Transformation::new(10, 13, 5, 6),
            Transformation::new(15, 19, 8, 9),
        ];
        let map = OffsetMap::new(&transformations);

        assert_eq!(map.to_original(1, Bias::Start), 3);
        assert_eq!(map.to_original(3, Bias::End), 5);
        assert_eq!(map.to_original(6, Bias::Start), 13);
        assert_eq!(map.to_original(8, Bias::End), 15);
    }
}
