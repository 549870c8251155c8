//! Split a view around the first or last occurrence of a needle.
//!
//! Both halves are sub-views of the input and the needle itself belongs to
//! neither. When there is nothing to split on, the whole input comes back
//! as `first` and `last` is [`TextView::EMPTY`].

use crate::{Needle, TextView};

impl<'a> TextView<'a> {
    /// Split around the first occurrence of `needle`.
    ///
    /// - Found: `(prefix before needle, suffix after needle)`.
    /// - Not found, or `needle` is empty: `(self, EMPTY)`.
    /// - `self` is empty: `(EMPTY, EMPTY)`.
    pub fn split_on_first(self, needle: impl Needle) -> (TextView<'a>, TextView<'a>) {
        let pos = if needle.is_empty_needle() {
            None
        } else {
            self.index_of(&needle)
        };
        self.split_at_match(pos, needle.len_utf8())
    }

    /// Split around the last occurrence of `needle`.
    ///
    /// Same outcomes as [`split_on_first`](Self::split_on_first), matching
    /// from the end instead.
    pub fn split_on_last(self, needle: impl Needle) -> (TextView<'a>, TextView<'a>) {
        let pos = if needle.is_empty_needle() {
            None
        } else {
            self.last_index_of(&needle)
        };
        self.split_at_match(pos, needle.len_utf8())
    }

    fn split_at_match(
        self,
        pos: Option<usize>,
        needle_len: usize,
    ) -> (TextView<'a>, TextView<'a>) {
        if self.is_empty() {
            return (TextView::EMPTY, TextView::EMPTY);
        }
        match pos {
            Some(pos) => (
                self.slice(0, pos),
                self.slice(pos + needle_len, self.len()),
            ),
            None => (self, TextView::EMPTY),
        }
    }
}
