//! Bridge between text views and UTF-8 byte sequences.
//!
//! Views never convert themselves: every conversion goes through a
//! [`Utf8Bridge`] the caller passes in. Two providers ship with the crate:
//!
//! - [`StrictUtf8`] rejects malformed input with a [`DecodeError`].
//! - [`LossyUtf8`] replaces malformed sequences with U+FFFD and never fails.
//!
//! Encoding borrows the view's bytes when it can. Decoding always produces a
//! fresh [`TextBuffer`] whose lifetime is independent of the input bytes.

use std::borrow::Cow;
use std::str::Utf8Error;

use tracing::debug;

use crate::{TextBuffer, TextView};

/// Error produced when bytes cannot be decoded as UTF-8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A byte sequence that can never be valid UTF-8.
    #[error("invalid UTF-8 sequence of {len} byte(s) at offset {offset}")]
    InvalidSequence {
        /// Byte offset where the invalid sequence starts.
        offset: usize,
        /// Length of the invalid sequence in bytes.
        len: usize,
    },
    /// Input ended in the middle of a multi-byte sequence.
    #[error("truncated UTF-8 sequence at offset {offset}")]
    Truncated {
        /// Byte offset where the incomplete sequence starts.
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset of the first byte that could not be decoded.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::InvalidSequence { offset, .. } | DecodeError::Truncated { offset } => {
                offset
            }
        }
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(err: Utf8Error) -> Self {
        let offset = err.valid_up_to();
        match err.error_len() {
            Some(len) => DecodeError::InvalidSequence { offset, len },
            None => DecodeError::Truncated { offset },
        }
    }
}

/// Converts between views and UTF-8 bytes.
pub trait Utf8Bridge: Send + Sync {
    /// UTF-8 bytes of `view`. May borrow from the view or allocate.
    fn encode<'a>(&self, view: TextView<'a>) -> Cow<'a, [u8]>;

    /// Decode `bytes` into a newly allocated buffer.
    fn decode(&self, bytes: &[u8]) -> Result<TextBuffer, DecodeError>;
}

/// Rejects malformed UTF-8.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictUtf8;

impl Utf8Bridge for StrictUtf8 {
    #[inline]
    fn encode<'a>(&self, view: TextView<'a>) -> Cow<'a, [u8]> {
        Cow::Borrowed(view.as_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<TextBuffer, DecodeError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(TextBuffer::new(text)),
            Err(err) => {
                let err = DecodeError::from(err);
                debug!(offset = err.offset(), len = bytes.len(), "rejected malformed UTF-8");
                Err(err)
            }
        }
    }
}

/// Replaces malformed UTF-8 with U+FFFD.
#[derive(Clone, Copy, Debug, Default)]
pub struct LossyUtf8;

impl Utf8Bridge for LossyUtf8 {
    #[inline]
    fn encode<'a>(&self, view: TextView<'a>) -> Cow<'a, [u8]> {
        Cow::Borrowed(view.as_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<TextBuffer, DecodeError> {
        Ok(match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => TextBuffer::new(text),
            Cow::Owned(text) => {
                debug!(len = bytes.len(), "replaced malformed UTF-8");
                TextBuffer::from(text)
            }
        })
    }
}

impl<'a> TextView<'a> {
    /// UTF-8 bytes of this view, produced by `bridge`.
    #[inline]
    pub fn to_utf8(self, bridge: &(impl Utf8Bridge + ?Sized)) -> Cow<'a, [u8]> {
        bridge.encode(self)
    }
}
