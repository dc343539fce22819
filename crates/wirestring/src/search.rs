//! Search, comparison, and substring extraction.

use bstr::ByteSlice;

use crate::{flash::FlashStr, string::WireString};

impl WireString {
    /// Position of the first occurrence of `needle`.
    #[must_use]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        self.as_bytes().find(needle)
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    ///
    /// A `from` past the end yields `None`.
    #[must_use]
    pub fn find_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        if from >= self.len() {
            return None;
        }
        self.as_bytes()[from..].find(needle).map(|p| p + from)
    }

    /// Position of the first occurrence of `byte`.
    #[must_use]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.as_bytes().find_byte(byte)
    }

    /// Position of the first occurrence of `byte` at or after `from`.
    #[must_use]
    pub fn find_byte_from(&self, byte: u8, from: usize) -> Option<usize> {
        if from >= self.len() {
            return None;
        }
        self.as_bytes()[from..].find_byte(byte).map(|p| p + from)
    }

    /// Position of the first occurrence of a read-only memory needle,
    /// compared through the flash primitives.
    #[must_use]
    pub fn find_flash(&self, needle: FlashStr) -> Option<usize> {
        needle.find_in(self.as_bytes())
    }

    /// Position of the last occurrence of `needle`.
    #[must_use]
    pub fn rfind(&self, needle: &[u8]) -> Option<usize> {
        self.as_bytes().rfind(needle)
    }

    /// Position of the last occurrence of `needle` starting at or before
    /// `from`.
    #[must_use]
    pub fn rfind_from(&self, needle: &[u8], from: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let from = from.min(len);
        let window = (from + needle.len()).min(len);
        self.as_bytes()[..window].rfind(needle)
    }

    /// Position of the last occurrence of `byte`.
    #[must_use]
    pub fn rfind_byte(&self, byte: u8) -> Option<usize> {
        self.as_bytes().rfind_byte(byte)
    }

    /// Position of the last occurrence of `byte` at or before `from`.
    #[must_use]
    pub fn rfind_byte_from(&self, byte: u8, from: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let window = (from + 1).min(len);
        self.as_bytes()[..window].rfind_byte(byte)
    }

    /// Whether the content starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(prefix)
    }

    /// Whether the content ends with `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        self.as_bytes().ends_with(suffix)
    }

    /// Equality whose running time depends only on the lengths, not on where
    /// the first mismatch sits.
    ///
    /// Short-circuits only on a length mismatch (lengths are not secret);
    /// otherwise every byte is visited and the verdict is combined with
    /// bitwise logic rather than a lazy boolean.
    #[must_use]
    pub fn equals_constant_time(&self, other: &WireString) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        let mut equal: usize = 0;
        let mut diff: usize = 0;
        for (a, b) in self.as_bytes().iter().zip(other.as_bytes()) {
            if a == b {
                equal += 1;
            } else {
                diff += 1;
            }
        }
        let all_equal = u8::from(equal == self.len());
        let none_diff = u8::from(diff == 0);
        (all_equal & none_diff) == 1
    }

    /// Deep copy of the byte range `[left, right)`.
    ///
    /// An inverted range is normalized by swapping; `right` is clamped to the
    /// length. The source is never observably mutated.
    #[must_use]
    pub fn substring(&self, left: usize, right: usize) -> WireString {
        let (left, right) = if left > right {
            (right, left)
        } else {
            (left, right)
        };
        let len = self.len();
        if left >= len {
            return WireString::new();
        }
        let right = right.min(len);
        WireString::from_bytes(&self.as_bytes()[left..right])
    }
}
