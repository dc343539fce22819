//! In-place editing: insert, remove, replace, trim, case conversion.
//!
//! Every shift of existing content goes through `copy_within`, the
//! overlap-tolerant move; a plain non-overlapping copy is only used for bytes
//! arriving from outside the buffer. Length changes always re-terminate.

use core::cmp::Ordering;

use bstr::ByteSlice;

use crate::{flash::FlashStr, string::WireString};

impl WireString {
    /// Inserts `bytes` at `position`, shifting the tail right.
    ///
    /// A position past the end, or a growth failure, is a silent no-op.
    pub fn insert_bytes(&mut self, position: usize, bytes: &[u8]) -> &mut Self {
        let old_len = self.len();
        if position > old_len || bytes.is_empty() {
            return self;
        }
        let total = old_len + bytes.len();
        if self.try_reserve(total).is_err() {
            return self;
        }
        let storage = self.repr.storage_mut();
        storage.copy_within(position..old_len, position + bytes.len());
        storage[position..position + bytes.len()].copy_from_slice(bytes);
        self.repr.set_len(total);
        self
    }

    /// Inserts a single byte at `position`.
    pub fn insert_byte(&mut self, position: usize, byte: u8) -> &mut Self {
        self.insert_bytes(position, &[byte])
    }

    /// Inserts another value's content at `position`.
    pub fn insert(&mut self, position: usize, other: &WireString) -> &mut Self {
        self.insert_bytes(position, other.as_bytes())
    }

    /// Inserts a read-only memory run at `position`, copying through the
    /// flash primitives.
    pub fn insert_flash(&mut self, position: usize, src: FlashStr) -> &mut Self {
        let old_len = self.len();
        if position > old_len || src.is_empty() {
            return self;
        }
        let total = old_len + src.len();
        if self.try_reserve(total).is_err() {
            return self;
        }
        let storage = self.repr.storage_mut();
        storage.copy_within(position..old_len, position + src.len());
        src.copy_into(&mut storage[position..position + src.len()]);
        self.repr.set_len(total);
        self
    }

    /// Removes `count` bytes starting at `index`, clamping `count` to the
    /// remaining tail. Out-of-range `index` or zero `count` is a no-op.
    pub fn remove(&mut self, index: usize, count: usize) {
        let len = self.len();
        if index >= len || count == 0 {
            return;
        }
        let count = count.min(len - index);
        self.repr
            .storage_mut()
            .copy_within(index + count..len, index);
        self.repr.set_len(len - count);
    }

    /// Substitutes every occurrence of one byte with another, in place.
    pub fn replace_byte(&mut self, find: u8, replace: u8) {
        for b in self.repr.contents_mut() {
            if *b == find {
                *b = replace;
            }
        }
    }

    /// Replaces every non-overlapping, leftmost-first occurrence of `find`
    /// with `replace`.
    ///
    /// Returns `false` without touching the value when there is nothing to
    /// do: empty subject, empty pattern, no matches, or (for a growing
    /// replacement) a failed reserve.
    pub fn replace(&mut self, find: &[u8], replace: &[u8]) -> bool {
        if self.is_empty() || find.is_empty() || find.len() > self.len() {
            return false;
        }
        match replace.len().cmp(&find.len()) {
            Ordering::Equal => self.replace_in_place(find, replace),
            Ordering::Less => self.replace_shrinking(find, replace),
            Ordering::Greater => self.replace_growing(find, replace),
        }
    }

    /// Equal-length strategy: overwrite each match where it stands. Storage
    /// never resizes and the scan resumes past the written replacement.
    fn replace_in_place(&mut self, find: &[u8], replace: &[u8]) -> bool {
        let mut replaced = false;
        let mut at = 0;
        while let Some(offset) = self.as_bytes()[at..].find(find) {
            let m = at + offset;
            self.repr.storage_mut()[m..m + replace.len()].copy_from_slice(replace);
            at = m + replace.len();
            replaced = true;
        }
        replaced
    }

    /// Shrinking strategy: compact left-to-right with separate read and write
    /// cursors, flush the tail once, and adjust the length a single time.
    fn replace_shrinking(&mut self, find: &[u8], replace: &[u8]) -> bool {
        let len = self.len();
        let mut read = 0;
        let mut write = 0;
        loop {
            let Some(offset) = self.as_bytes()[read..].find(find) else {
                break;
            };
            let m = read + offset;
            let storage = self.repr.storage_mut();
            storage.copy_within(read..m, write);
            write += m - read;
            storage[write..write + replace.len()].copy_from_slice(replace);
            write += replace.len();
            read = m + find.len();
        }
        if read == 0 {
            return false;
        }
        self.repr.storage_mut().copy_within(read..len, write);
        self.repr.set_len(write + (len - read));
        true
    }

    /// Growing strategy: count matches to size the result, grow once, then
    /// rewrite right-to-left so tail shifts never clobber matches still
    /// pending on the left. The backward walk replays the forward
    /// non-overlapping match set, so all three strategies agree on which
    /// occurrences get replaced.
    fn replace_growing(&mut self, find: &[u8], replace: &[u8]) -> bool {
        let len = self.len();
        let diff = replace.len() - find.len();

        let mut count = 0;
        let mut at = 0;
        while let Some(offset) = self.as_bytes()[at..].find(find) {
            at += offset + find.len();
            count += 1;
        }
        if count == 0 {
            return false;
        }
        let new_len = len + count * diff;
        if self.try_reserve(new_len).is_err() {
            return false;
        }

        let mut moved_len = len;
        let mut bound = len;
        loop {
            // Everything below `bound` is still untouched original content.
            let m = last_leftmost_match(&self.repr.storage()[..bound], find);
            let Some(m) = m else { break };
            let storage = self.repr.storage_mut();
            storage.copy_within(m + find.len()..moved_len, m + replace.len());
            storage[m..m + replace.len()].copy_from_slice(replace);
            moved_len += diff;
            bound = m;
        }
        debug_assert_eq!(moved_len, new_len);
        self.repr.set_len(new_len);
        true
    }

    /// Drops ASCII whitespace from both ends.
    pub fn trim(&mut self) -> &mut Self {
        self.trim_whitespace(true, true);
        self
    }

    /// Drops leading ASCII whitespace.
    pub fn trim_start(&mut self) -> &mut Self {
        self.trim_whitespace(true, false);
        self
    }

    /// Drops trailing ASCII whitespace.
    pub fn trim_end(&mut self) -> &mut Self {
        self.trim_whitespace(false, true);
        self
    }

    /// Computes the qualifying window in one pass, then performs at most one
    /// overlap-safe move to slide it down to offset 0.
    fn trim_whitespace(&mut self, start: bool, end: bool) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let bytes = self.as_bytes();
        let mut begin = 0;
        if start {
            while begin < len && bytes[begin].is_ascii_whitespace() {
                begin += 1;
            }
        }
        let mut stop = len;
        if end {
            while stop > begin && bytes[stop - 1].is_ascii_whitespace() {
                stop -= 1;
            }
        }
        if begin > 0 {
            self.repr.storage_mut().copy_within(begin..stop, 0);
        }
        self.repr.set_len(stop - begin);
    }

    /// Drops bytes drawn from `set` off both ends.
    pub fn trim_matches(&mut self, set: &[u8]) -> &mut Self {
        self.trim_set(set, true, true);
        self
    }

    /// Drops leading bytes drawn from `set`.
    pub fn trim_start_matches(&mut self, set: &[u8]) -> &mut Self {
        self.trim_set(set, true, false);
        self
    }

    /// Drops trailing bytes drawn from `set`.
    pub fn trim_end_matches(&mut self, set: &[u8]) -> &mut Self {
        self.trim_set(set, false, true);
        self
    }

    /// Trailing trim shortens the length directly; leading trim counts the
    /// qualifying run and removes it through the removal primitive.
    fn trim_set(&mut self, set: &[u8], start: bool, end: bool) {
        let mut len = self.len();
        if len == 0 || set.is_empty() {
            return;
        }
        if end {
            while len > 0 && set.contains(&self.as_bytes()[len - 1]) {
                len -= 1;
            }
            self.repr.set_len(len);
        }
        if start {
            let bytes = self.as_bytes();
            let mut run = 0;
            while run < bytes.len() && set.contains(&bytes[run]) {
                run += 1;
            }
            self.remove(0, run);
        }
    }

    /// Lowercases ASCII letters in place; no length change.
    pub fn make_ascii_lowercase(&mut self) -> &mut Self {
        self.repr.contents_mut().make_ascii_lowercase();
        self
    }

    /// Uppercases ASCII letters in place; no length change.
    pub fn make_ascii_uppercase(&mut self) -> &mut Self {
        self.repr.contents_mut().make_ascii_uppercase();
        self
    }
}

/// Last match of the forward non-overlapping scan over `haystack`.
fn last_leftmost_match(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let mut last = None;
    let mut at = 0;
    while at < haystack.len() {
        let Some(offset) = haystack[at..].find(needle) else {
            break;
        };
        last = Some(at + offset);
        at += offset + needle.len();
    }
    last
}
