//! Immutable, bounds-checked views into a text buffer.
//!
//! A [`TextView`] is a `(source, start, end)` triple. Slicing recomputes the
//! offsets and never copies the underlying text.
//!
//! # Invariant
//!
//! `start <= end <= source.len()`, and both `start` and `end` lie on `char`
//! boundaries of `source`. Every constructor and slicing method preserves
//! this; [`safe_subsegment_len`](TextView::safe_subsegment_len) clamps
//! arbitrary caller indices to satisfy it.

use std::fmt;
use std::ops::Range;

/// Zero-copy view into a region of a UTF-8 backing buffer.
///
/// `Copy`, so views are passed by value. Two views compare equal when their
/// text is equal, regardless of which buffer or offset they came from.
#[derive(Clone, Copy)]
pub struct TextView<'a> {
    /// Entire backing buffer the view indexes into.
    source: &'a str,
    /// Byte offset of the first byte in the view.
    start: usize,
    /// Byte offset one past the last byte in the view.
    end: usize,
}

impl<'a> TextView<'a> {
    /// Canonical empty view: "no usable remainder".
    ///
    /// Compares equal to every other empty view. Callers that need to tell
    /// "nothing left" from "matched an empty span" must look at the
    /// `Option` returned by the originating call, not at emptiness.
    pub const EMPTY: TextView<'static> = TextView {
        source: "",
        start: 0,
        end: 0,
    };

    /// Create a view covering all of `source`.
    #[inline]
    pub const fn new(source: &'a str) -> Self {
        TextView {
            source,
            start: 0,
            end: source.len(),
        }
    }

    /// Create a view over a byte range of `source`.
    ///
    /// Returns `None` if the range is out of bounds, reversed, or splits a
    /// multi-byte character.
    pub fn from_range(source: &'a str, range: Range<usize>) -> Option<Self> {
        source.get(range.clone())?;
        Some(TextView {
            source,
            start: range.start,
            end: range.end,
        })
    }

    /// The text this view covers.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// The text as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.as_str().as_bytes()
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the view covers no text.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute byte offset of this view within its backing buffer.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.start
    }

    /// Absolute byte range of this view within its backing buffer.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The whole backing buffer this view was sliced from.
    #[inline]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Sub-view over `[from, to)`, relative to this view.
    ///
    /// Callers guarantee `from <= to <= len` on char boundaries.
    #[inline]
    pub(crate) fn slice(self, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= self.len(), "slice out of bounds");
        debug_assert!(
            self.as_str().is_char_boundary(from) && self.as_str().is_char_boundary(to),
            "slice splits a character"
        );
        TextView {
            source: self.source,
            start: self.start + from,
            end: self.start + to,
        }
    }

    /// Remainder of the view starting at `to`.
    ///
    /// # Panics
    ///
    /// Panics if `to > len` or `to` is not on a char boundary. Use
    /// [`safe_subsegment`](Self::safe_subsegment) for untrusted indices.
    #[inline]
    #[must_use]
    pub fn advance(self, to: usize) -> Self {
        assert!(
            to <= self.len() && self.as_str().is_char_boundary(to),
            "advance to {to} outside view of length {}",
            self.len()
        );
        self.slice(to, self.len())
    }

    /// Remainder of the view from `start`, clamping out-of-range starts.
    ///
    /// Equivalent to [`safe_subsegment_len`](Self::safe_subsegment_len)
    /// with a length covering the rest of the view.
    #[inline]
    #[must_use]
    pub fn safe_subsegment(self, start: isize) -> Self {
        self.safe_subsegment_len(start, isize::MAX)
    }

    /// Sub-view of up to `length` bytes from `start`, never out of bounds.
    ///
    /// - `start` is clamped into `[0, len]`. If the clamped start is at or
    ///   past the end, the result is [`TextView::EMPTY`].
    /// - The end (`start + length`, saturating) is clamped into
    ///   `[start, len]`, so a negative length yields an empty view.
    /// - A start inside a char moves up to the next char boundary and an end
    ///   inside a char moves down to the previous one, so the result never
    ///   reaches outside `[start, start + length)`.
    #[must_use]
    pub fn safe_subsegment_len(self, start: isize, length: isize) -> Self {
        let len = self.len();
        let start = usize::try_from(start).unwrap_or(0).min(len);
        if start >= len {
            return TextView::EMPTY;
        }

        let end = match usize::try_from(length) {
            Ok(length) => start.saturating_add(length).min(len),
            Err(_) => start,
        };

        let text = self.as_str();
        let start = ceil_char_boundary(text, start);
        let end = floor_char_boundary(text, end).max(start);
        self.slice(start, end)
    }
}

/// Largest char boundary of `text` that is `<= index`.
///
/// `index` must be `<= text.len()`.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    // A UTF-8 sequence is at most 4 bytes, so this loops at most 3 times.
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Smallest char boundary of `text` that is `>= index`.
///
/// `index` must be `<= text.len()`.
pub(crate) fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

impl Default for TextView<'_> {
    fn default() -> Self {
        TextView::EMPTY
    }
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(source: &'a str) -> Self {
        TextView::new(source)
    }
}

impl AsRef<str> for TextView<'_> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for TextView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextView<'_> {}

impl PartialEq<str> for TextView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::hash::Hash for TextView<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.as_str(), self.start, self.end)
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
