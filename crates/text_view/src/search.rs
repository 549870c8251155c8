//! Ordinal search and comparison.
//!
//! Searches are byte-exact over UTF-8. Because both haystack and needle are
//! valid UTF-8, every match starts and ends on a char boundary, so match
//! offsets can be used to slice directly.
//!
//! Case-insensitive comparison uses a simple per-char fold that does not
//! depend on locale: a char is folded to its uppercase form when that form
//! is a single char, otherwise it is compared as-is.

use memchr::memmem;

use crate::TextView;

/// A search pattern: a single `char` or a sub-sequence.
///
/// Implemented for `char`, `str`, `String`, [`TextView`], and references
/// to any of them. A needle may be empty; see the individual operations for
/// how an empty needle is treated.
pub trait Needle {
    /// Encoded length in bytes.
    fn len_utf8(&self) -> usize;

    /// Byte offset of the first match in `haystack`.
    fn find_in(&self, haystack: &str) -> Option<usize>;

    /// Byte offset of the last match in `haystack`.
    fn rfind_in(&self, haystack: &str) -> Option<usize>;

    /// Returns `true` if the needle has no content.
    #[inline]
    fn is_empty_needle(&self) -> bool {
        self.len_utf8() == 0
    }
}

impl Needle for char {
    #[inline]
    fn len_utf8(&self) -> usize {
        char::len_utf8(*self)
    }

    fn find_in(&self, haystack: &str) -> Option<usize> {
        if let Some(byte) = ascii_byte(*self) {
            return memchr::memchr(byte, haystack.as_bytes());
        }
        let mut buf = [0u8; 4];
        memmem::find(haystack.as_bytes(), self.encode_utf8(&mut buf).as_bytes())
    }

    fn rfind_in(&self, haystack: &str) -> Option<usize> {
        if let Some(byte) = ascii_byte(*self) {
            return memchr::memrchr(byte, haystack.as_bytes());
        }
        let mut buf = [0u8; 4];
        memmem::rfind(haystack.as_bytes(), self.encode_utf8(&mut buf).as_bytes())
    }
}

impl Needle for str {
    #[inline]
    fn len_utf8(&self) -> usize {
        self.len()
    }

    #[inline]
    fn find_in(&self, haystack: &str) -> Option<usize> {
        memmem::find(haystack.as_bytes(), self.as_bytes())
    }

    #[inline]
    fn rfind_in(&self, haystack: &str) -> Option<usize> {
        memmem::rfind(haystack.as_bytes(), self.as_bytes())
    }
}

impl Needle for String {
    #[inline]
    fn len_utf8(&self) -> usize {
        self.len()
    }

    #[inline]
    fn find_in(&self, haystack: &str) -> Option<usize> {
        self.as_str().find_in(haystack)
    }

    #[inline]
    fn rfind_in(&self, haystack: &str) -> Option<usize> {
        self.as_str().rfind_in(haystack)
    }
}

impl Needle for TextView<'_> {
    #[inline]
    fn len_utf8(&self) -> usize {
        self.len()
    }

    #[inline]
    fn find_in(&self, haystack: &str) -> Option<usize> {
        self.as_str().find_in(haystack)
    }

    #[inline]
    fn rfind_in(&self, haystack: &str) -> Option<usize> {
        self.as_str().rfind_in(haystack)
    }
}

impl<N: Needle + ?Sized> Needle for &N {
    #[inline]
    fn len_utf8(&self) -> usize {
        (**self).len_utf8()
    }

    #[inline]
    fn find_in(&self, haystack: &str) -> Option<usize> {
        (**self).find_in(haystack)
    }

    #[inline]
    fn rfind_in(&self, haystack: &str) -> Option<usize> {
        (**self).rfind_in(haystack)
    }
}

/// The single UTF-8 byte of an ASCII char, `None` for anything wider.
#[inline]
fn ascii_byte(c: char) -> Option<u8> {
    if c.is_ascii() {
        u8::try_from(c).ok()
    } else {
        None
    }
}

/// Simple case fold used by the `*_ignore_case` comparisons.
#[inline]
fn fold(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Returns `true` if every char yielded by `prefix` matches the next char of
/// `text` under [`fold`].
fn fold_prefix_eq(
    mut text: impl Iterator<Item = char>,
    prefix: impl Iterator<Item = char>,
) -> bool {
    for p in prefix {
        match text.next() {
            Some(t) if t == p || fold(t) == fold(p) => {}
            _ => return false,
        }
    }
    true
}

impl TextView<'_> {
    /// Byte offset of the first occurrence of `needle`.
    ///
    /// An empty needle matches at `0`.
    #[inline]
    pub fn index_of(&self, needle: impl Needle) -> Option<usize> {
        needle.find_in(self.as_str())
    }

    /// Byte offset of the first occurrence of `needle` at or after `start`.
    ///
    /// The result is relative to the whole view, not to `start`. Returns
    /// `None` if `start` is past the end or not on a char boundary.
    pub fn index_of_from(&self, needle: impl Needle, start: usize) -> Option<usize> {
        let suffix = self.as_str().get(start..)?;
        needle.find_in(suffix).map(|pos| start + pos)
    }

    /// Byte offset of the last occurrence of `needle`.
    ///
    /// An empty needle matches at `len`.
    #[inline]
    pub fn last_index_of(&self, needle: impl Needle) -> Option<usize> {
        needle.rfind_in(self.as_str())
    }

    /// Byte offset of the last occurrence of `needle` in the suffix that
    /// begins at `start`.
    ///
    /// The result is relative to the whole view. Returns `None` if `start`
    /// is past the end or not on a char boundary.
    pub fn last_index_of_from(&self, needle: impl Needle, start: usize) -> Option<usize> {
        let suffix = self.as_str().get(start..)?;
        needle.rfind_in(suffix).map(|pos| start + pos)
    }

    /// Returns `true` if `needle` occurs anywhere in the view.
    #[inline]
    pub fn contains(&self, needle: impl Needle) -> bool {
        self.index_of(needle).is_some()
    }

    /// Case-insensitive ordinal prefix test.
    pub fn starts_with_ignore_case(&self, prefix: impl AsRef<str>) -> bool {
        fold_prefix_eq(self.as_str().chars(), prefix.as_ref().chars())
    }

    /// Case-insensitive ordinal suffix test.
    pub fn ends_with_ignore_case(&self, suffix: impl AsRef<str>) -> bool {
        fold_prefix_eq(self.as_str().chars().rev(), suffix.as_ref().chars().rev())
    }

    /// Case-sensitive, char-for-char equality against a view or a literal.
    #[inline]
    pub fn equals_ordinal(&self, other: impl AsRef<str>) -> bool {
        self.as_str() == other.as_ref()
    }
}
