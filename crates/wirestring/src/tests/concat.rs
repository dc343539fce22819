use core::fmt::Write as _;

use crate::{FlashStr, WireString, flash_str};

#[test]
fn appends_grow_across_the_inline_boundary() {
    let mut s = WireString::from("0123456789");
    assert!(s.is_inline());
    assert!(s.concat("abcdefghij"));
    assert!(!s.is_inline());
    assert_eq!(s, "0123456789abcdefghij");
    assert_eq!(*s.as_bytes_with_nul().last().unwrap(), 0);
}

#[test]
fn zero_length_addend_is_a_successful_noop() {
    let mut s = WireString::from("abc");
    let cap = s.capacity();
    assert!(s.concat(""));
    assert!(s.concat(&b""[..]));
    assert!(s.concat(&WireString::new()));
    assert!(s.concat(FlashStr::new(b"")));
    assert_eq!(s, "abc");
    assert_eq!(s.capacity(), cap);
}

#[test]
fn concat_self_doubles_content() {
    let mut s = WireString::from("ab");
    assert!(s.concat_self());
    assert_eq!(s, "abab");
}

#[test]
fn concat_self_survives_relocation() {
    // Doubling pushes the value out of the inline array; the duplicated
    // bytes must come from the storage as it is after the growth.
    let mut s = WireString::from("0123456789");
    assert!(s.concat_self());
    assert!(!s.is_inline());
    assert_eq!(s, "01234567890123456789");
}

#[test]
fn concat_self_on_empty_is_fine() {
    let mut s = WireString::new();
    assert!(s.concat_self());
    assert!(s.is_empty());
}

#[test]
fn byte_and_char_sources() {
    let mut s = WireString::new();
    assert!(s.concat(b'a'));
    assert!(s.concat('ß'));
    assert_eq!(s.as_bytes(), "aß".as_bytes());
}

#[test]
fn numeric_sources_render_decimal() {
    let mut s = WireString::from("n=");
    assert!(s.concat(-5i32));
    assert!(s.concat(b' '));
    assert!(s.concat(250u32));
    assert!(s.concat(b' '));
    assert!(s.concat(1.5f32));
    assert_eq!(s, "n=-5 250 1.50");
}

#[test]
fn flash_sources_append_through_the_primitives() {
    let mut s = WireString::from("boot: ");
    assert!(s.concat(flash_str!("sensors online")));
    assert_eq!(s, "boot: sensors online");
}

#[test]
fn write_macro_goes_through_fmt_write() {
    let mut s = WireString::new();
    write!(s, "{}-{}", 12, "ab").unwrap();
    assert_eq!(s, "12-ab");
}

#[test]
fn extend_pushes_bytes() {
    let mut s = WireString::from("ab");
    s.extend(b"cd".iter().copied());
    assert_eq!(s, "abcd");
}
