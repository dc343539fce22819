//! Trait surface: value semantics, ordering, formatting, operators.

use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Deref, Index},
};

use crate::string::{Concat, WireString};

impl Default for WireString {
    fn default() -> Self {
        WireString::new()
    }
}

impl Clone for WireString {
    /// Deep copy; an allocation shortfall yields the empty state, the same
    /// as a failed assignment.
    fn clone(&self) -> Self {
        WireString::from_bytes(self.as_bytes())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl fmt::Debug for WireString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for WireString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl PartialEq for WireString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for WireString {}

impl PartialEq<[u8]> for WireString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for WireString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for WireString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for WireString {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for WireString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for WireString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<WireString> for &str {
    fn eq(&self, other: &WireString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for WireString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WireString {
    /// Byte-wise lexicographic order; the empty state sorts before any
    /// non-empty value and two empty values compare equal.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for WireString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl Deref for WireString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Index<usize> for WireString {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl Index<core::ops::RangeTo<usize>> for WireString {
    type Output = [u8];

    fn index(&self, index: core::ops::RangeTo<usize>) -> &[u8] {
        &self.as_bytes()[index]
    }
}

impl From<&str> for WireString {
    fn from(value: &str) -> Self {
        WireString::from_bytes(value.as_bytes())
    }
}

impl From<&[u8]> for WireString {
    fn from(value: &[u8]) -> Self {
        WireString::from_bytes(value)
    }
}

impl<const N: usize> From<&[u8; N]> for WireString {
    fn from(value: &[u8; N]) -> Self {
        WireString::from_bytes(value)
    }
}

impl From<char> for WireString {
    fn from(value: char) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<i16> for WireString {
    fn from(value: i16) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<u16> for WireString {
    fn from(value: u16) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<i32> for WireString {
    fn from(value: i32) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<u32> for WireString {
    fn from(value: u32) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<i64> for WireString {
    fn from(value: i64) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<u64> for WireString {
    fn from(value: u64) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<f32> for WireString {
    /// Fixed-point with two fraction digits; use
    /// [`WireString::from_float`] for other precisions.
    fn from(value: f32) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl From<f64> for WireString {
    /// Fixed-point with two fraction digits; use
    /// [`WireString::from_double`] for other precisions.
    fn from(value: f64) -> Self {
        let mut s = WireString::new();
        s.concat(value);
        s
    }
}

impl<T: Concat> AddAssign<T> for WireString {
    /// `+=` in append form; a failed growth leaves the value unchanged.
    fn add_assign(&mut self, rhs: T) {
        let _ = self.concat(rhs);
    }
}

impl Add<&WireString> for WireString {
    type Output = WireString;

    fn add(mut self, rhs: &WireString) -> WireString {
        self += rhs;
        self
    }
}

impl Add<&str> for WireString {
    type Output = WireString;

    fn add(mut self, rhs: &str) -> WireString {
        self += rhs;
        self
    }
}

impl Add<&[u8]> for WireString {
    type Output = WireString;

    fn add(mut self, rhs: &[u8]) -> WireString {
        self += rhs;
        self
    }
}

impl Add<WireString> for WireString {
    type Output = WireString;

    /// When the right operand is a transient with enough spare capacity to
    /// hold the sum and the left one is not, the sum is built by prepending
    /// into the right operand's storage instead of reallocating. Purely an
    /// allocation optimization; the resulting content is identical.
    fn add(mut self, mut rhs: WireString) -> WireString {
        let total = self.len() + rhs.len();
        if total > self.capacity() && total <= rhs.capacity() {
            rhs.insert_bytes(0, self.as_bytes());
            rhs
        } else {
            self += &rhs;
            self
        }
    }
}

impl Add<WireString> for &str {
    type Output = WireString;

    fn add(self, mut rhs: WireString) -> WireString {
        let total = self.len() + rhs.len();
        if total <= rhs.capacity() {
            rhs.insert_bytes(0, self.as_bytes());
            rhs
        } else {
            let mut res = WireString::with_capacity(total);
            res += self;
            res += &rhs;
            res
        }
    }
}

impl Add<WireString> for char {
    type Output = WireString;

    fn add(self, rhs: WireString) -> WireString {
        let mut scratch = [0u8; 4];
        let encoded: &str = self.encode_utf8(&mut scratch);
        encoded + rhs
    }
}

impl fmt::Write for WireString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.concat_bytes(s.as_bytes()) {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

impl Extend<u8> for WireString {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            let _ = self.concat(byte);
        }
    }
}
