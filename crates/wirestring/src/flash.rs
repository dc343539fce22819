//! Read-only memory sources.
//!
//! On Harvard-architecture parts, constant data baked into the firmware image
//! lives in an address space that cannot be dereferenced like ordinary RAM;
//! it is read through byte-wise or block-copy primitives instead. [`FlashStr`]
//! is the handle for such a source: string-buffer code never slices it
//! directly, it goes through [`byte_at`], [`copy_into`] and [`find_in`]. On
//! hosted targets the handle wraps a plain `&'static [u8]` and the primitives
//! compile down to ordinary reads; what matters is the access discipline.
//!
//! [`byte_at`]: FlashStr::byte_at
//! [`copy_into`]: FlashStr::copy_into
//! [`find_in`]: FlashStr::find_in

/// A byte run in read-only (flash) memory.
#[derive(Debug, Clone, Copy)]
pub struct FlashStr {
    data: &'static [u8],
}

impl FlashStr {
    /// Wraps a byte run placed in the read-only address space.
    #[must_use]
    pub const fn new(data: &'static [u8]) -> Self {
        FlashStr { data }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Single-byte read primitive. Out-of-range reads yield 0.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Block-copy primitive: fills `dst` from the start of this run, stopping
    /// at whichever end comes first, and returns the number of bytes copied.
    pub fn copy_into(&self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.len());
        for (i, slot) in dst[..n].iter_mut().enumerate() {
            *slot = self.byte_at(i);
        }
        n
    }

    /// Compare primitive: position of the first occurrence of this run inside
    /// a RAM haystack.
    #[must_use]
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return Some(0);
        }
        if n > haystack.len() {
            return None;
        }
        'candidate: for start in 0..=haystack.len() - n {
            for i in 0..n {
                if haystack[start + i] != self.byte_at(i) {
                    continue 'candidate;
                }
            }
            return Some(start);
        }
        None
    }

    /// Byte-for-byte equality against a RAM run.
    #[must_use]
    pub fn eq_bytes(&self, other: &[u8]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        (0..self.len()).all(|i| self.byte_at(i) == other[i])
    }
}

/// Builds a [`FlashStr`] from a string literal.
///
/// ```rust
/// use wirestring::flash_str;
///
/// let greeting = flash_str!("hello");
/// assert_eq!(greeting.len(), 5);
/// ```
#[macro_export]
macro_rules! flash_str {
    ($lit:literal) => {
        $crate::FlashStr::new($lit.as_bytes())
    };
}

#[cfg(test)]
mod tests {
    use super::FlashStr;

    #[test]
    fn primitives_cover_the_run() {
        let f = FlashStr::new(b"flash");
        assert_eq!(f.len(), 5);
        assert_eq!(f.byte_at(0), b'f');
        assert_eq!(f.byte_at(99), 0);

        let mut dst = [0u8; 3];
        assert_eq!(f.copy_into(&mut dst), 3);
        assert_eq!(&dst, b"fla");
    }

    #[test]
    fn find_in_scans_ram_haystacks() {
        let needle = FlashStr::new(b"an");
        assert_eq!(needle.find_in(b"banana"), Some(1));
        assert_eq!(needle.find_in(b"b"), None);
        assert_eq!(FlashStr::new(b"").find_in(b"x"), Some(0));
    }

    #[test]
    fn eq_bytes_matches_exactly() {
        let f = FlashStr::new(b"ok");
        assert!(f.eq_bytes(b"ok"));
        assert!(!f.eq_bytes(b"ok!"));
        assert!(!f.eq_bytes(b"no"));
    }
}
