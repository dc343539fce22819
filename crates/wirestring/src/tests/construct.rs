use crate::{CAPACITY_MAX, FlashStr, INLINE_CAPACITY, WireString};

#[test]
fn new_is_empty_inline_and_terminated() {
    let s = WireString::new();
    assert!(s.is_empty());
    assert!(s.is_inline());
    assert_eq!(s.len(), 0);
    assert_eq!(s.capacity(), INLINE_CAPACITY);
    assert_eq!(s.as_bytes_with_nul(), b"\0");
}

#[test]
fn short_content_stays_inline() {
    let s = WireString::from("0123456789abcde");
    assert_eq!(s.len(), INLINE_CAPACITY);
    assert!(s.is_inline());
    assert_eq!(s.as_bytes_with_nul(), b"0123456789abcde\0");
}

#[test]
fn sixteenth_byte_moves_to_heap() {
    let s = WireString::from("0123456789abcdef");
    assert!(!s.is_inline());
    assert_eq!(s.len(), 16);
    // Block sizes round up in 16-byte steps, one byte held back for the NUL.
    assert_eq!(s.capacity(), 31);
    assert_eq!(s.as_bytes_with_nul(), b"0123456789abcdef\0");
}

#[test]
fn length_never_exceeds_capacity() {
    for n in [0usize, 1, 14, 15, 16, 17, 100] {
        let content = std::vec![b'x'; n];
        let s = WireString::from_bytes(&content);
        assert!(s.len() <= s.capacity());
        assert_eq!(s.byte_at(s.len()), 0);
        assert_eq!(*s.as_bytes_with_nul().last().unwrap(), 0);
    }
}

#[test]
fn clone_is_a_deep_copy() {
    let a = WireString::from("original content over 15 bytes");
    let mut b = a.clone();
    assert_eq!(a, b);
    b.set_byte_at(0, b'X');
    assert_eq!(a, "original content over 15 bytes");
    assert_eq!(b.byte_at(0), b'X');
}

#[test]
fn clone_from_reuses_assignment_semantics() {
    let src = WireString::from("abc");
    let mut dst = WireString::from("something longer than inline!!");
    dst.clone_from(&src);
    assert_eq!(dst, "abc");
}

#[test]
fn take_moves_content_out_and_resets_source() {
    let mut a = WireString::from("payload that needs heap mode");
    let b = a.take();
    assert!(a.is_empty());
    assert!(a.is_inline());
    assert_eq!(b, "payload that needs heap mode");
}

#[test]
fn assign_replaces_content() {
    let mut s = WireString::from("old");
    s.assign_bytes(b"new content");
    assert_eq!(s, "new content");
    s.assign(&WireString::new());
    assert!(s.is_empty());
    assert_eq!(s.as_bytes_with_nul(), b"\0");
}

#[test]
fn from_flash_routes_through_the_primitives() {
    let src = FlashStr::new(b"stored in flash, longer than inline");
    let s = WireString::from_flash(src);
    assert_eq!(s, "stored in flash, longer than inline");
    assert!(!s.is_inline());

    let mut t = WireString::from("x");
    t.assign_flash(src);
    assert_eq!(t, "stored in flash, longer than inline");
}

#[test]
fn with_capacity_preallocates() {
    let s = WireString::with_capacity(100);
    assert!(s.is_empty());
    assert!(s.capacity() >= 100);
    assert!(!s.is_inline());
}

#[test]
fn reserve_honors_the_ceiling() {
    let mut s = WireString::from("abc");
    assert!(!s.reserve(CAPACITY_MAX));
    assert_eq!(s, "abc");
    // The largest request whose rounded block still fits.
    let mut big = WireString::new();
    assert!(big.reserve(CAPACITY_MAX - 16));
    assert!(big.capacity() >= CAPACITY_MAX - 16);
}

#[test]
fn numeric_constructors_render_decimal() {
    assert_eq!(WireString::from(0i32), "0");
    assert_eq!(WireString::from(-42i32), "-42");
    assert_eq!(WireString::from(7u16), "7");
    assert_eq!(WireString::from(i64::MIN), "-9223372036854775808");
    assert_eq!(WireString::from(u64::MAX), "18446744073709551615");
}

#[test]
fn radix_constructors_render_other_bases() {
    assert_eq!(WireString::from_radix_u32(255, 16), "ff");
    assert_eq!(WireString::from_radix_u32(5, 2), "101");
    assert_eq!(WireString::from_radix_u64(u64::MAX, 36).len(), 13);
}

#[test]
fn float_constructors_render_fixed_point() {
    assert_eq!(WireString::from(1.5f32), "1.50");
    assert_eq!(WireString::from(-2.25f64), "-2.25");
    assert_eq!(WireString::from_float(1.5, 3), "1.500");
    assert_eq!(WireString::from_double(3.0, 0), "3");
}

#[test]
fn parsing_delegates_over_the_buffer() {
    assert_eq!(WireString::from(" 123xyz").to_int(), 123);
    assert_eq!(WireString::from("-17").to_int(), -17);
    assert_eq!(WireString::new().to_int(), 0);
    assert!((WireString::from("2.5").to_float() - 2.5).abs() < 1e-6);
    assert!((WireString::from("2.5e2").to_double() - 250.0).abs() < 1e-9);
    assert!(WireString::from("junk").to_double().abs() < 1e-12);
}

#[test]
fn read_bytes_copies_a_window() {
    let s = WireString::from("abcdef");
    let mut buf = [0u8; 4];
    assert_eq!(s.read_bytes(2, &mut buf), 4);
    assert_eq!(&buf, b"cdef");
    assert_eq!(s.read_bytes(5, &mut buf), 1);
    assert_eq!(buf[0], b'f');
    assert_eq!(s.read_bytes(6, &mut buf), 0);
}

#[test]
fn to_str_checks_utf8() {
    assert_eq!(WireString::from("héllo").to_str(), Some("héllo"));
    assert_eq!(WireString::from_bytes(b"\xff\xfe").to_str(), None);
}
