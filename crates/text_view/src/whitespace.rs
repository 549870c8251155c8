//! Whitespace classification and trimming.
//!
//! Whitespace is anything `char::is_whitespace` accepts (the Unicode
//! `White_Space` property). Trimming returns a bounded sub-view of the
//! input; an all-whitespace view trims to an empty view positioned where
//! the scan stopped.

use crate::TextView;

impl TextView<'_> {
    /// Returns `true` if every char is whitespace. Vacuously `true` when
    /// the view is empty.
    pub fn is_white_space(&self) -> bool {
        self.as_str().chars().all(char::is_whitespace)
    }

    /// Returns `true` if the view is empty or entirely whitespace.
    #[inline]
    pub fn is_empty_or_white_space(&self) -> bool {
        self.is_empty() || self.is_white_space()
    }

    /// Drop leading whitespace.
    #[must_use]
    pub fn trim_start(self) -> Self {
        let start = first_non_white_space(self.as_str()).unwrap_or(self.len());
        self.slice(start, self.len())
    }

    /// Drop trailing whitespace.
    ///
    /// On an all-whitespace view the result is the empty view at offset 0
    /// of `self`; the backwards scan never runs past the first byte.
    #[must_use]
    pub fn trim_end(self) -> Self {
        let end = self
            .as_str()
            .char_indices()
            .rev()
            .find(|&(_, c)| !c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        self.slice(0, end)
    }

    /// Drop leading and trailing whitespace.
    #[inline]
    #[must_use]
    pub fn trim(self) -> Self {
        self.trim_start().trim_end()
    }

    /// Suffix starting at the first non-whitespace char.
    ///
    /// Returns `self` unchanged when it does not start with whitespace, and
    /// an empty view at the end when it is all whitespace.
    #[must_use]
    pub fn advance_past_whitespace(self) -> Self {
        match first_non_white_space(self.as_str()) {
            Some(0) => self,
            Some(i) => self.slice(i, self.len()),
            None => self.slice(self.len(), self.len()),
        }
    }

    /// Suffix after the first occurrence of `delim`.
    ///
    /// When `delim` does not occur the whole view is consumed, leaving an
    /// empty view at its end.
    #[must_use]
    pub fn advance_past_char(self, delim: char) -> Self {
        match self.index_of(delim) {
            Some(i) => self.slice(i + delim.len_utf8(), self.len()),
            None => self.slice(self.len(), self.len()),
        }
    }
}

/// Byte index of the first non-whitespace char, if any.
fn first_non_white_space(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests;
