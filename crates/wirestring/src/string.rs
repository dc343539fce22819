//! The string buffer value type: construction, assignment, concatenation.

use core::mem;

use bstr::{BStr, ByteSlice};

use crate::{
    error::ReserveError,
    flash::FlashStr,
    numbers,
    repr::{INLINE_CAPACITY, Repr},
};

/// A mutable, growable, always-NUL-terminated byte string.
///
/// Content up to [`INLINE_CAPACITY`] bytes lives in an array embedded in the
/// value; longer content moves to an exclusively owned heap block. The two
/// representations are transparently interchangeable: every operation behaves
/// identically in either mode, and growth past the inline array switches mode
/// on the fly.
///
/// Two kinds of failure exist, and they are deliberately distinct:
///
/// - **Allocation failure** — growth that cannot be satisfied. Appends report
///   it by returning `false` and leave the value unchanged; assignments reset
///   the value to the empty state so no half-written content survives.
/// - **Invalid arguments** — an out-of-range position or index. These are
///   silent no-ops, not errors; callers probing with bad indices get an
///   unchanged value back.
///
/// ```rust
/// use wirestring::WireString;
///
/// let mut s = WireString::from("ab");
/// assert!(s.concat_self());
/// assert_eq!(s, "abab");
/// assert_eq!(s.as_bytes_with_nul(), b"abab\0");
/// ```
pub struct WireString {
    pub(crate) repr: Repr,
}

impl WireString {
    /// Creates an empty string in inline mode.
    #[must_use]
    pub const fn new() -> Self {
        WireString {
            repr: Repr::empty(),
        }
    }

    /// Creates an empty string with room for `capacity` content bytes.
    ///
    /// Falls back to an empty inline value when the request cannot be
    /// satisfied.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut s = WireString::new();
        let _ = s.repr.try_reserve(capacity);
        s
    }

    /// Deep-copies `bytes` into a fresh value.
    ///
    /// An allocation shortfall yields the empty state, mirroring assignment.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut s = WireString::new();
        s.assign_bytes(bytes);
        s
    }

    /// Copies a read-only memory run into a fresh value, going through the
    /// flash access primitives only.
    #[must_use]
    pub fn from_flash(src: FlashStr) -> Self {
        let mut s = WireString::new();
        s.assign_flash(src);
        s
    }

    /// Renders `value` in `base` (2..=36).
    #[must_use]
    pub fn from_radix_u64(value: u64, base: u32) -> Self {
        let mut scratch = [0u8; numbers::INT_SCRATCH];
        WireString::from_bytes(numbers::fmt_u64(value, base, &mut scratch))
    }

    /// Renders `value` in `base` (2..=36).
    #[must_use]
    pub fn from_radix_u32(value: u32, base: u32) -> Self {
        WireString::from_radix_u64(u64::from(value), base)
    }

    /// Renders `value` as fixed-point decimal with `decimals` fraction
    /// digits (clamped to 18).
    #[must_use]
    pub fn from_double(value: f64, decimals: u8) -> Self {
        let mut scratch = [0u8; numbers::FLOAT_SCRATCH];
        WireString::from_bytes(numbers::fmt_float(value, decimals, &mut scratch))
    }

    /// See [`WireString::from_double`].
    #[must_use]
    pub fn from_float(value: f32, decimals: u8) -> Self {
        WireString::from_double(f64::from(value), decimals)
    }

    /// Number of content bytes, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repr.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content bytes the active storage can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.repr.capacity()
    }

    /// Whether content currently lives in the embedded array.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.repr.is_inline()
    }

    /// The content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.repr.contents()
    }

    /// The content bytes plus the trailing NUL, for C-style consumers.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.repr.contents_with_nul()
    }

    /// The content as a [`BStr`] for conventionally printable byte strings.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        self.as_bytes().as_bstr()
    }

    /// The content as UTF-8, when it happens to be valid UTF-8.
    #[must_use]
    pub fn to_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Guarantees room for `capacity` content bytes.
    ///
    /// # Errors
    ///
    /// [`ReserveError`] when the rounded request exceeds the storage ceiling
    /// or the allocator fails; the value is left unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), ReserveError> {
        self.repr.try_reserve(capacity)
    }

    /// Boolean-flavored [`WireString::try_reserve`].
    pub fn reserve(&mut self, capacity: usize) -> bool {
        self.try_reserve(capacity).is_ok()
    }

    /// Empties the value, keeping the current storage.
    pub fn clear(&mut self) {
        self.repr.set_len(0);
    }

    /// Releases any heap block and returns to the initial empty state.
    pub fn invalidate(&mut self) {
        self.repr.reset();
    }

    /// Moves the content out, leaving `self` in the initial empty state.
    #[must_use]
    pub fn take(&mut self) -> WireString {
        mem::take(self)
    }

    /// Deep-copies `bytes` over the current content.
    ///
    /// On allocation failure the value is reset to the empty state rather
    /// than left with mismatched length and capacity.
    pub fn assign_bytes(&mut self, bytes: &[u8]) {
        if self.try_reserve(bytes.len()).is_err() {
            self.invalidate();
            return;
        }
        self.repr.storage_mut()[..bytes.len()].copy_from_slice(bytes);
        self.repr.set_len(bytes.len());
    }

    /// Deep-copies another value's content; see [`WireString::assign_bytes`].
    pub fn assign(&mut self, other: &WireString) {
        self.assign_bytes(other.as_bytes());
    }

    /// Copies a read-only memory run over the current content, using the
    /// flash block-copy primitive.
    pub fn assign_flash(&mut self, src: FlashStr) {
        if self.try_reserve(src.len()).is_err() {
            self.invalidate();
            return;
        }
        let n = src.len();
        src.copy_into(&mut self.repr.storage_mut()[..n]);
        self.repr.set_len(n);
    }

    /// Appends `value`, growing storage first.
    ///
    /// Returns `false` and leaves the value unchanged when growth fails.
    /// Appending something zero-length succeeds without growth.
    pub fn concat<T: Concat>(&mut self, value: T) -> bool {
        value.append_to(self)
    }

    /// Appends a byte run; the primitive every [`Concat`] source funnels into.
    pub fn concat_bytes(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return true;
        }
        let old_len = self.len();
        let new_len = old_len + bytes.len();
        if self.try_reserve(new_len).is_err() {
            return false;
        }
        self.repr.storage_mut()[old_len..new_len].copy_from_slice(bytes);
        self.repr.set_len(new_len);
        true
    }

    /// Appends a read-only memory run through the flash primitives.
    pub fn concat_flash(&mut self, src: FlashStr) -> bool {
        if src.is_empty() {
            return true;
        }
        let old_len = self.len();
        let new_len = old_len + src.len();
        if self.try_reserve(new_len).is_err() {
            return false;
        }
        src.copy_into(&mut self.repr.storage_mut()[old_len..new_len]);
        self.repr.set_len(new_len);
        true
    }

    /// Appends the value to itself, doubling its content.
    ///
    /// Growth may relocate the storage, so the duplication reads the content
    /// only after the reserve and uses an overlap-tolerant move. (Aliasing
    /// rules make `x.concat(&x)` inexpressible, hence the dedicated method.)
    pub fn concat_self(&mut self) -> bool {
        let old_len = self.len();
        if old_len == 0 {
            return true;
        }
        let new_len = 2 * old_len;
        if self.try_reserve(new_len).is_err() {
            return false;
        }
        self.repr.storage_mut().copy_within(..old_len, old_len);
        self.repr.set_len(new_len);
        true
    }

    /// Byte at `index`, or 0 when out of range.
    #[must_use]
    pub fn byte_at(&self, index: usize) -> u8 {
        self.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Overwrites the byte at `index`; out-of-range is a silent no-op.
    pub fn set_byte_at(&mut self, index: usize, byte: u8) {
        if let Some(slot) = self.repr.contents_mut().get_mut(index) {
            *slot = byte;
        }
    }

    /// Copies content starting at `from` into `dst`, returning the number of
    /// bytes copied (0 when `from` is out of range).
    pub fn read_bytes(&self, from: usize, dst: &mut [u8]) -> usize {
        if dst.is_empty() || from >= self.len() {
            return 0;
        }
        let n = dst.len().min(self.len() - from);
        dst[..n].copy_from_slice(&self.as_bytes()[from..from + n]);
        n
    }

    /// Parses the content as a decimal integer; unparseable content and the
    /// empty state yield 0.
    #[must_use]
    pub fn to_int(&self) -> i64 {
        numbers::parse_int(self.as_bytes())
    }

    /// Parses the content as a float; unparseable content yields 0.0.
    #[must_use]
    pub fn to_float(&self) -> f32 {
        #[allow(clippy::cast_possible_truncation)]
        {
            numbers::parse_float(self.as_bytes()) as f32
        }
    }

    /// See [`WireString::to_float`].
    #[must_use]
    pub fn to_double(&self) -> f64 {
        numbers::parse_float(self.as_bytes())
    }
}

/// A value that can be appended to a [`WireString`].
///
/// This is the append overload set: byte runs, single bytes, UTF-8 text,
/// numbers (rendered in decimal, floats with two fraction digits), and
/// read-only memory runs. Numeric sources render into a stack scratch buffer
/// sized for their worst case, then funnel into the byte-run append.
pub trait Concat {
    /// Appends `self` to `target`; `false` means growth failed and `target`
    /// is unchanged.
    fn append_to(self, target: &mut WireString) -> bool;
}

impl Concat for &WireString {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_bytes(self.as_bytes())
    }
}

impl Concat for &[u8] {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_bytes(self)
    }
}

impl<const N: usize> Concat for &[u8; N] {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_bytes(self)
    }
}

impl Concat for &str {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_bytes(self.as_bytes())
    }
}

impl Concat for u8 {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_bytes(&[self])
    }
}

impl Concat for char {
    fn append_to(self, target: &mut WireString) -> bool {
        let mut scratch = [0u8; 4];
        target.concat_bytes(self.encode_utf8(&mut scratch).as_bytes())
    }
}

impl Concat for i64 {
    fn append_to(self, target: &mut WireString) -> bool {
        let mut scratch = [0u8; numbers::INT_SCRATCH];
        let rendered = numbers::fmt_i64(self, &mut scratch);
        target.concat_bytes(rendered)
    }
}

impl Concat for u64 {
    fn append_to(self, target: &mut WireString) -> bool {
        let mut scratch = [0u8; numbers::INT_SCRATCH];
        let rendered = numbers::fmt_u64(self, 10, &mut scratch);
        target.concat_bytes(rendered)
    }
}

impl Concat for i32 {
    fn append_to(self, target: &mut WireString) -> bool {
        i64::from(self).append_to(target)
    }
}

impl Concat for u32 {
    fn append_to(self, target: &mut WireString) -> bool {
        u64::from(self).append_to(target)
    }
}

impl Concat for i16 {
    fn append_to(self, target: &mut WireString) -> bool {
        i64::from(self).append_to(target)
    }
}

impl Concat for u16 {
    fn append_to(self, target: &mut WireString) -> bool {
        u64::from(self).append_to(target)
    }
}

impl Concat for f64 {
    fn append_to(self, target: &mut WireString) -> bool {
        let mut scratch = [0u8; numbers::FLOAT_SCRATCH];
        let rendered = numbers::fmt_float(self, 2, &mut scratch);
        target.concat_bytes(rendered)
    }
}

impl Concat for f32 {
    fn append_to(self, target: &mut WireString) -> bool {
        f64::from(self).append_to(target)
    }
}

impl Concat for FlashStr {
    fn append_to(self, target: &mut WireString) -> bool {
        target.concat_flash(self)
    }
}

const _: () = assert!(INLINE_CAPACITY == 15);
