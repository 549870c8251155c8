//! Zero-copy text views.
//!
//! This crate provides [`TextView`], an immutable `(buffer, start, end)`
//! handle into a UTF-8 backing buffer, plus the operations higher-level
//! parsers are built from:
//! - Bounds-safe slicing ([`TextView::safe_subsegment_len`])
//! - Whitespace classification and trimming
//! - Ordinal search and case-insensitive prefix/suffix comparison
//! - Split on first/last occurrence of a [`Needle`]
//! - Cursor-driven sequential reads ([`TextView::try_read_line`],
//!   [`TextView::try_read_part`])
//!
//! None of these allocate or copy: every result is a sub-view of its input.
//!
//! # Offsets
//!
//! All offsets are byte offsets relative to the view they were computed
//! from. Every offset the crate hands out lies on a `char` boundary, so it
//! can be fed back into [`TextView::advance`] or a cursor.
//!
//! # Encoding
//!
//! Conversion to and from raw bytes goes through an injected
//! [`Utf8Bridge`]. There is no global provider; pick [`StrictUtf8`] or
//! [`LossyUtf8`] at the call site.

mod buffer;
mod encoding;
mod read;
mod search;
mod split;
mod view;
mod whitespace;

pub use buffer::TextBuffer;
pub use encoding::{DecodeError, LossyUtf8, StrictUtf8, Utf8Bridge};
pub use read::{Lines, Parts};
pub use search::Needle;
pub use view::TextView;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=text_view=debug` or `RUST_LOG=text_view=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            if let Err(err) = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init()
            {
                tracing::debug!(%err, "tracing subscriber already installed");
            }
        }
    });
}
