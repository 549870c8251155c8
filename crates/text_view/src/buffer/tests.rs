use super::*;
use pretty_assertions::assert_eq;

#[test]
fn view_covers_whole_buffer() {
    let buf = TextBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.view(), "hello");
    assert_eq!(buf.view().offset(), 0);
}

#[test]
fn empty_buffer() {
    let buf = TextBuffer::default();
    assert!(buf.is_empty());
    assert!(buf.view().is_empty());
}

#[test]
fn clones_share_storage() {
    let a = TextBuffer::from(String::from("shared"));
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.view().as_str().as_ptr(), b.view().as_str().as_ptr());

    let c = TextBuffer::new("shared");
    assert_eq!(a, c);
    assert!(!a.ptr_eq(&c));
}

#[test]
fn views_slice_without_copying() {
    let buf = TextBuffer::new("key=value");
    let value = buf.view().advance(4);
    let base = buf.as_str().as_ptr() as usize;
    assert_eq!(value.as_str().as_ptr() as usize, base + 4);
}

#[test]
fn debug_and_display() {
    let buf = TextBuffer::from("a\nb");
    assert_eq!(format!("{buf:?}"), "TextBuffer(\"a\\nb\")");
    assert_eq!(format!("{buf}"), "a\nb");
}
