//! Shared, immutable backing buffer for [`TextView`]s.
//!
//! The buffer owns its text behind an `Arc<str>`: clones share storage and
//! the text is never relocated or resized, so views borrowed from it stay
//! valid for as long as the borrow checker lets them exist.

use std::fmt;
use std::sync::Arc;

use crate::{DecodeError, TextView, Utf8Bridge};

/// Owned, reference-counted text that views index into.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TextBuffer {
    text: Arc<str>,
}

impl TextBuffer {
    /// Create a buffer holding a copy of `text`.
    pub fn new(text: &str) -> Self {
        TextBuffer {
            text: Arc::from(text),
        }
    }

    /// Decode `bytes` into a new buffer through `bridge`.
    ///
    /// The returned buffer does not borrow from `bytes`.
    pub fn from_utf8(
        bytes: &[u8],
        bridge: &(impl Utf8Bridge + ?Sized),
    ) -> Result<Self, DecodeError> {
        bridge.decode(bytes)
    }

    /// View covering the whole buffer.
    #[inline]
    pub fn view(&self) -> TextView<'_> {
        TextView::new(&self.text)
    }

    /// The buffer's text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the buffer holds no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if both buffers share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &TextBuffer) -> bool {
        Arc::ptr_eq(&self.text, &other.text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        TextBuffer {
            text: Arc::from(text),
        }
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        TextBuffer::new(text)
    }
}

impl From<Arc<str>> for TextBuffer {
    fn from(text: Arc<str>) -> Self {
        TextBuffer { text }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        TextBuffer::new("")
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer").field(&self.as_str()).finish()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests;
