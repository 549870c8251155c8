//! `init_tracing` when the host already installed a global subscriber.
//!
//! Kept in its own test binary so the global subscriber and `RUST_LOG`
//! stay isolated from the other tests.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::prelude::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn init_tracing_reports_existing_subscriber() {
    let capture = Capture::default();
    let writer = capture.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
        .try_init()
        .unwrap();

    std::env::set_var("RUST_LOG", "text_view=debug");
    text_view::init_tracing();
    text_view::init_tracing();

    let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert_eq!(
        output.matches("tracing subscriber already installed").count(),
        1,
        "{output}"
    );
}
