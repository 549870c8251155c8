use crate::TextView;
use pretty_assertions::assert_eq;

// === Classification ===

#[test]
fn is_white_space_classifies_views() {
    assert!(TextView::new(" \t\r\n").is_white_space());
    assert!(TextView::new("\u{a0}\u{2003}").is_white_space()); // NBSP, em space
    assert!(!TextView::new("  x ").is_white_space());
}

#[test]
fn empty_view_is_vacuously_white_space() {
    assert!(TextView::EMPTY.is_white_space());
    assert!(TextView::EMPTY.is_empty_or_white_space());
}

#[test]
fn is_empty_or_white_space() {
    assert!(TextView::new("   ").is_empty_or_white_space());
    assert!(!TextView::new(" a ").is_empty_or_white_space());
}

// === Trimming ===

#[test]
fn trim_both_ends() {
    let view = TextView::new("  hello world \t\n");
    assert_eq!(view.trim(), "hello world");
    assert_eq!(view.trim().offset(), 2);
}

#[test]
fn trim_start_only() {
    assert_eq!(TextView::new("  a b  ").trim_start(), "a b  ");
}

#[test]
fn trim_end_only() {
    assert_eq!(TextView::new("  a b  ").trim_end(), "  a b");
}

#[test]
fn trim_end_all_white_space_stops_at_zero() {
    let view = TextView::new("xx    ").advance(2);
    let trimmed = view.trim_end();
    assert!(trimmed.is_empty());
    assert_eq!(trimmed.offset(), 2);
}

#[test]
fn trim_start_all_white_space_is_empty_at_end() {
    let trimmed = TextView::new("    ").trim_start();
    assert!(trimmed.is_empty());
    assert_eq!(trimmed.offset(), 4);
}

#[test]
fn trim_empty() {
    assert!(TextView::EMPTY.trim().is_empty());
}

#[test]
fn trim_keeps_multibyte_content() {
    let view = TextView::new("\u{3000}caf\u{e9}\u{3000}"); // ideographic spaces
    assert_eq!(view.trim(), "caf\u{e9}");
}

#[test]
fn trim_is_idempotent() {
    for text in ["", " ", " a ", "a", "\t a b \r\n", "  \u{e9}  "] {
        let once = TextView::new(text).trim();
        assert_eq!(once.trim(), once, "trim not idempotent for {text:?}");
    }
}

// === Advance Past ===

#[test]
fn advance_past_whitespace() {
    let view = TextView::new("   value");
    assert_eq!(view.advance_past_whitespace(), "value");
    assert_eq!(view.advance_past_whitespace().offset(), 3);
}

#[test]
fn advance_past_whitespace_without_leading_white_space_is_identity() {
    let view = TextView::new("value  ");
    let advanced = view.advance_past_whitespace();
    assert_eq!(advanced, view);
    assert_eq!(advanced.range(), view.range());
}

#[test]
fn advance_past_whitespace_all_white_space_is_empty() {
    assert!(TextView::new(" \t ").advance_past_whitespace().is_empty());
}

#[test]
fn advance_past_char() {
    let view = TextView::new("key: value");
    assert_eq!(view.advance_past_char(':'), " value");
    assert!(TextView::new("abc:").advance_past_char(':').is_empty());
}

#[test]
fn advance_past_missing_char_consumes_view() {
    let view = TextView::new("xx key: value").advance(3);
    let rest = view.advance_past_char('#');
    assert!(rest.is_empty());
    assert_eq!(rest.offset(), view.offset() + view.len());
    assert_eq!(rest.source(), view.source());
}

#[test]
fn advance_past_char_on_empty_view() {
    let rest = TextView::EMPTY.advance_past_char(':');
    assert!(rest.is_empty());
    assert_eq!(rest, TextView::EMPTY);
}

#[test]
fn advance_past_multibyte_char() {
    let view = TextView::new("a\u{2192}b");
    assert_eq!(view.advance_past_char('\u{2192}'), "b");
}
