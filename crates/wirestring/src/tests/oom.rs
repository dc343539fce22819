//! Forced allocation failures: every mutating operation must leave the value
//! either unchanged (pure appends) or reset to the empty state (assignment),
//! never with mismatched length and capacity.

use crate::{FlashStr, ReserveError, WireString, repr::alloc_fail};

/// Fifteen bytes: fills the inline array so any growth must allocate.
const FULL_INLINE: &[u8] = b"0123456789abcde";

#[test]
fn failed_assignment_invalidates() {
    let mut s = WireString::from("keep");
    alloc_fail::arm();
    s.assign_bytes(b"this needs a heap block to hold");
    assert!(s.is_empty());
    assert!(s.is_inline());
    assert_eq!(s.as_bytes_with_nul(), b"\0");
}

#[test]
fn failed_flash_assignment_invalidates() {
    let mut s = WireString::from("keep");
    alloc_fail::arm();
    s.assign_flash(FlashStr::new(b"this needs a heap block to hold"));
    assert!(s.is_empty());
}

#[test]
fn failed_append_leaves_the_value_unchanged() {
    let mut s = WireString::from_bytes(FULL_INLINE);
    alloc_fail::arm();
    assert!(!s.concat("f"));
    assert_eq!(s.as_bytes(), FULL_INLINE);
    assert_eq!(s.len(), 15);
    assert!(s.len() <= s.capacity());
}

#[test]
fn failed_self_append_leaves_the_value_unchanged() {
    let mut s = WireString::from_bytes(FULL_INLINE);
    alloc_fail::arm();
    assert!(!s.concat_self());
    assert_eq!(s.as_bytes(), FULL_INLINE);
}

#[test]
fn failed_insert_is_a_silent_noop() {
    let mut s = WireString::from_bytes(FULL_INLINE);
    alloc_fail::arm();
    s.insert_bytes(1, b"XY");
    assert_eq!(s.as_bytes(), FULL_INLINE);
}

#[test]
fn failed_growing_replace_leaves_content_untouched() {
    let mut s = WireString::from("banana banana");
    alloc_fail::arm();
    assert!(!s.replace(b"a", b"aaa"));
    assert_eq!(s, "banana banana");
}

#[test]
fn failed_reserve_reports_and_preserves() {
    let mut s = WireString::from("abc");
    alloc_fail::arm();
    assert_eq!(s.try_reserve(100), Err(ReserveError::AllocFailed));
    assert_eq!(s, "abc");
    // A later attempt with a working allocator succeeds.
    assert!(s.reserve(100));
    assert_eq!(s, "abc");
    assert!(s.capacity() >= 100);
}

#[test]
fn failed_clone_yields_the_empty_state() {
    let s = WireString::from("content too long for the inline array");
    alloc_fail::arm();
    let copy = s.clone();
    assert!(copy.is_empty());
    assert_eq!(s, "content too long for the inline array");
}
