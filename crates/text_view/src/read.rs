//! Cursor-driven sequential reads.
//!
//! The cursor is a caller-owned byte offset into the view. Each successful
//! read returns the next segment and moves the cursor past its terminator.
//! A read that starts at or past the end returns `None` and leaves the
//! cursor alone, so a `while let` loop visits every segment, including a
//! final one with no terminator, and stops exactly once.
//!
//! ```text
//! "line1\r\nline2"
//!  cursor 0  -> Some("line1"), cursor 7   (CRLF consumed as one break)
//!  cursor 7  -> Some("line2"), cursor 12  (no terminator: rest of view)
//!  cursor 12 -> None
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::view::ceil_char_boundary;
use crate::{Needle, TextView};

impl<'a> TextView<'a> {
    /// Read the next line starting at `*cursor`.
    ///
    /// A line ends at the first `\r` or `\n`; `\r\n` counts as a single
    /// break. The terminator is excluded from the returned line and the
    /// cursor moves past it. Without a terminator, the rest of the view is
    /// the line and the cursor moves to `len`.
    ///
    /// A cursor inside a multi-byte char is first moved up to the next char
    /// boundary. Returns `None` when that leaves nothing to read.
    pub fn try_read_line(&self, cursor: &mut usize) -> Option<TextView<'a>> {
        let (from, rest) = self.remainder(*cursor)?;

        let Some(pos) = memchr::memchr2(b'\r', b'\n', rest.as_bytes()) else {
            *cursor = self.len();
            trace!(from, to = *cursor, len = rest.len(), "read final line");
            return Some(rest);
        };

        let bytes = rest.as_bytes();
        let crlf = bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n');
        *cursor = from + pos + if crlf { 2 } else { 1 };
        trace!(from, to = *cursor, len = pos, crlf, "read line");
        Some(rest.slice(0, pos))
    }

    /// Read the next part delimited by `needle`, starting at `*cursor`.
    ///
    /// On a match the part is everything before the needle and the cursor
    /// moves past the whole needle. Without a match, or with an empty
    /// needle, the rest of the view is the final part and the cursor moves
    /// to `len`.
    ///
    /// Returns `None` only when `*cursor >= len`. A cursor inside a
    /// multi-byte char is handled as in [`try_read_line`].
    ///
    /// [`try_read_line`]: Self::try_read_line
    pub fn try_read_part(
        &self,
        needle: impl Needle,
        cursor: &mut usize,
    ) -> Option<TextView<'a>> {
        let (from, rest) = self.remainder(*cursor)?;

        let found = if needle.is_empty_needle() {
            None
        } else {
            rest.index_of(&needle)
        };
        let Some(pos) = found else {
            *cursor = self.len();
            trace!(from, to = *cursor, len = rest.len(), "read final part");
            return Some(rest);
        };

        *cursor = from + pos + needle.len_utf8();
        trace!(from, to = *cursor, len = pos, "read part");
        Some(rest.slice(0, pos))
    }

    /// Iterate over the lines of the view, as [`try_read_line`] reads them.
    ///
    /// [`try_read_line`]: Self::try_read_line
    pub fn lines(self) -> Lines<'a> {
        Lines {
            view: self,
            cursor: 0,
        }
    }

    /// Iterate over the parts of the view delimited by `needle`, as
    /// [`try_read_part`] reads them.
    ///
    /// [`try_read_part`]: Self::try_read_part
    pub fn parts<N: Needle>(self, needle: N) -> Parts<'a, N> {
        Parts {
            view: self,
            needle,
            cursor: 0,
        }
    }

    /// Start and unread remainder from `cursor`, or `None` when nothing is
    /// left. The start is `cursor` rounded up to a char boundary.
    fn remainder(&self, cursor: usize) -> Option<(usize, TextView<'a>)> {
        if cursor >= self.len() {
            return None;
        }
        let from = ceil_char_boundary(self.as_str(), cursor);
        if from >= self.len() {
            return None;
        }
        Some((from, self.slice(from, self.len())))
    }
}

/// Iterator over the lines of a [`TextView`].
///
/// Created by [`TextView::lines`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    view: TextView<'a>,
    cursor: usize,
}

impl Lines<'_> {
    /// Byte offset where the next line starts.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = TextView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.view.try_read_line(&mut self.cursor)
    }
}

impl FusedIterator for Lines<'_> {}

/// Iterator over the needle-delimited parts of a [`TextView`].
///
/// Created by [`TextView::parts`].
#[derive(Clone, Debug)]
pub struct Parts<'a, N> {
    view: TextView<'a>,
    needle: N,
    cursor: usize,
}

impl<N> Parts<'_, N> {
    /// Byte offset where the next part starts.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a, N: Needle> Iterator for Parts<'a, N> {
    type Item = TextView<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.view.try_read_part(&self.needle, &mut self.cursor)
    }
}

impl<N: Needle> FusedIterator for Parts<'_, N> {}
