//! Storage representation and capacity management.
//!
//! A [`Repr`] owns exactly one of two storages: a fixed array embedded in the
//! value (inline mode) or an exclusively owned heap block (heap mode). Both
//! keep one byte past the content reserved for the NUL terminator, and both
//! are zero-initialized, so `storage[len] == 0` holds at every observable
//! point. All higher-level algorithms branch on the discriminant through the
//! accessors here and otherwise see a uniform byte run.

use alloc::{boxed::Box, vec::Vec};

use crate::error::ReserveError;

/// Size of the embedded array, terminator slot included.
const INLINE_SIZE: usize = 16;

/// Content bytes an inline value can hold.
pub const INLINE_CAPACITY: usize = INLINE_SIZE - 1;

/// Hard ceiling on a heap block's size, terminator included.
///
/// Requests whose rounded-up block size would exceed this fail with
/// [`ReserveError::CapacityExceeded`].
pub const CAPACITY_MAX: usize = 65535;

#[derive(Debug)]
pub(crate) enum Repr {
    Inline { len: u8, buf: [u8; INLINE_SIZE] },
    Heap { len: usize, buf: Box<[u8]> },
}

impl Repr {
    pub(crate) const fn empty() -> Self {
        Repr::Inline {
            len: 0,
            buf: [0; INLINE_SIZE],
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Repr::Inline { len, .. } => usize::from(*len),
            Repr::Heap { len, .. } => *len,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            Repr::Inline { .. } => INLINE_CAPACITY,
            Repr::Heap { buf, .. } => buf.len() - 1,
        }
    }

    pub(crate) fn is_inline(&self) -> bool {
        matches!(self, Repr::Inline { .. })
    }

    /// The full usable storage, terminator slot included.
    pub(crate) fn storage(&self) -> &[u8] {
        match self {
            Repr::Inline { buf, .. } => buf,
            Repr::Heap { buf, .. } => buf,
        }
    }

    pub(crate) fn storage_mut(&mut self) -> &mut [u8] {
        match self {
            Repr::Inline { buf, .. } => buf,
            Repr::Heap { buf, .. } => buf,
        }
    }

    pub(crate) fn contents(&self) -> &[u8] {
        &self.storage()[..self.len()]
    }

    pub(crate) fn contents_mut(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.storage_mut()[..len]
    }

    pub(crate) fn contents_with_nul(&self) -> &[u8] {
        &self.storage()[..=self.len()]
    }

    /// Records a new content length and writes the terminator.
    ///
    /// `new_len` must not exceed `capacity()`.
    pub(crate) fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        match self {
            Repr::Inline { len, buf } => {
                buf[new_len] = 0;
                *len = new_len as u8;
            }
            Repr::Heap { len, buf } => {
                buf[new_len] = 0;
                *len = new_len;
            }
        }
    }

    /// Releases any heap block and returns to the initial inline empty state.
    pub(crate) fn reset(&mut self) {
        *self = Repr::empty();
    }

    /// Guarantees storage for `requested` content bytes, transparently
    /// switching representation. No-op when the active storage already
    /// suffices. On failure the existing content is left untouched.
    pub(crate) fn try_reserve(&mut self, requested: usize) -> Result<(), ReserveError> {
        if self.capacity() >= requested {
            return Ok(());
        }
        self.change_capacity(requested)
    }

    fn change_capacity(&mut self, requested: usize) -> Result<(), ReserveError> {
        if requested <= INLINE_CAPACITY {
            // Only reachable when shrinking out of heap mode through the
            // internal resize path; a growing reserve never lands here.
            if let Repr::Heap { len, buf } = self {
                let keep = (*len).min(INLINE_CAPACITY);
                let mut inline = [0u8; INLINE_SIZE];
                inline[..keep].copy_from_slice(&buf[..keep]);
                *self = Repr::Inline {
                    len: keep as u8,
                    buf: inline,
                };
            }
            return Ok(());
        }
        // Round up to the next 16-byte step; the extra slot covers the
        // terminator. No further amortization: repeated single-byte growth
        // past the inline array reallocates every 16 bytes, trading append
        // throughput for a small footprint.
        let new_size = (requested + INLINE_SIZE) & !(INLINE_SIZE - 1);
        if new_size > CAPACITY_MAX {
            return Err(ReserveError::CapacityExceeded { requested });
        }
        let mut block = alloc_block(new_size)?;
        let len = self.len();
        block[..len].copy_from_slice(self.contents());
        *self = Repr::Heap { len, buf: block };
        Ok(())
    }
}

impl Default for Repr {
    fn default() -> Self {
        Repr::empty()
    }
}

/// Allocates a zero-filled block, reporting exhaustion instead of aborting.
fn alloc_block(size: usize) -> Result<Box<[u8]>, ReserveError> {
    #[cfg(test)]
    if alloc_fail::take() {
        return Err(ReserveError::AllocFailed);
    }
    let mut block = Vec::new();
    if block.try_reserve_exact(size).is_err() {
        return Err(ReserveError::AllocFailed);
    }
    block.resize(size, 0);
    Ok(block.into_boxed_slice())
}


#[cfg(test)]
mod tests {
    use super::{CAPACITY_MAX, INLINE_CAPACITY, Repr};

    #[test]
    fn empty_repr_is_inline_and_terminated() {
        let repr = Repr::empty();
        assert!(repr.is_inline());
        assert_eq!(repr.len(), 0);
        assert_eq!(repr.capacity(), INLINE_CAPACITY);
        assert_eq!(repr.contents_with_nul(), [0]);
    }

    #[test]
    fn reserve_within_inline_is_a_noop() {
        let mut repr = Repr::empty();
        assert!(repr.try_reserve(INLINE_CAPACITY).is_ok());
        assert!(repr.is_inline());
    }

    #[test]
    fn reserve_past_inline_switches_to_heap_and_rounds_up() {
        let mut repr = Repr::empty();
        repr.storage_mut()[..3].copy_from_slice(b"abc");
        repr.set_len(3);
        assert!(repr.try_reserve(16).is_ok());
        assert!(!repr.is_inline());
        // (16 + 16) & !15 == 32 block bytes, one reserved for the terminator.
        assert_eq!(repr.capacity(), 31);
        assert_eq!(repr.contents(), b"abc");
        assert_eq!(repr.contents_with_nul(), b"abc\0");
    }

    #[test]
    fn reserve_beyond_ceiling_fails_and_preserves_content() {
        let mut repr = Repr::empty();
        repr.storage_mut()[..2].copy_from_slice(b"hi");
        repr.set_len(2);
        assert!(repr.try_reserve(CAPACITY_MAX).is_err());
        assert!(repr.is_inline());
        assert_eq!(repr.contents(), b"hi");
    }

    #[test]
    fn shrink_back_into_inline_keeps_prefix() {
        let mut repr = Repr::empty();
        repr.try_reserve(40).unwrap();
        repr.storage_mut()[..5].copy_from_slice(b"hello");
        repr.set_len(5);
        repr.change_capacity(8).unwrap();
        assert!(repr.is_inline());
        assert_eq!(repr.contents(), b"hello");
    }
}
