//! Numeric rendering and parsing over fixed-size stack scratch buffers.
//!
//! Rendering never allocates: callers hand in a scratch array whose size is
//! statically sufficient for the worst case, and get back the written slice.
//! Worst cases: a `u64` in base 2 is 64 digits, an `i64` in base 10 is 19
//! digits plus sign, and a fixed-point float is sign + 20 integer digits +
//! point + [`MAX_DECIMALS`] fraction digits.

/// Scratch size for integer rendering: 64 binary digits plus a sign slot.
pub(crate) const INT_SCRATCH: usize = 65;

/// Scratch size for fixed-point float rendering.
pub(crate) const FLOAT_SCRATCH: usize = 1 + 20 + 1 + MAX_DECIMALS as usize;

/// Fraction digits are clamped to this so the scratch buffer always fits;
/// an f64 carries no more meaningful decimal digits anyway.
pub(crate) const MAX_DECIMALS: u8 = 18;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in `base` (clamped to 2..=36), least significant digit
/// last. The returned slice borrows the tail of `buf`.
pub(crate) fn fmt_u64(mut value: u64, base: u32, buf: &mut [u8; INT_SCRATCH]) -> &[u8] {
    let base = u64::from(base.clamp(2, 36));
    let mut pos = INT_SCRATCH;
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(value % base) as usize];
        value /= base;
        if value == 0 {
            break;
        }
    }
    &buf[pos..]
}

/// Renders `value` in base 10 with a leading `-` for negatives.
pub(crate) fn fmt_i64(value: i64, buf: &mut [u8; INT_SCRATCH]) -> &[u8] {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();
    let mut pos = INT_SCRATCH;
    let mut v = magnitude;
    loop {
        pos -= 1;
        buf[pos] = DIGITS[(v % 10) as usize];
        v /= 10;
        if v == 0 {
            break;
        }
    }
    if negative {
        pos -= 1;
        buf[pos] = b'-';
    }
    &buf[pos..]
}

/// Renders `value` as fixed-point decimal with `decimals` fraction digits,
/// rounded half-up. Non-finite values render as `nan` / `inf` / `-inf`, and
/// magnitudes whose integer part does not fit a `u64` render as `ovf`.
pub(crate) fn fmt_float(value: f64, decimals: u8, buf: &mut [u8; FLOAT_SCRATCH]) -> &[u8] {
    if value.is_nan() {
        buf[..3].copy_from_slice(b"nan");
        return &buf[..3];
    }
    let negative = value < 0.0;
    let mut v = if negative { -value } else { value };
    let mut at = 0;
    if negative {
        buf[at] = b'-';
        at += 1;
    }
    if value.is_infinite() {
        buf[at..at + 3].copy_from_slice(b"inf");
        return &buf[..at + 3];
    }

    let decimals = usize::from(decimals.min(MAX_DECIMALS));
    let mut rounding = 0.5;
    for _ in 0..decimals {
        rounding /= 10.0;
    }
    v += rounding;

    #[allow(clippy::cast_precision_loss)]
    if v >= u64::MAX as f64 {
        buf[at..at + 3].copy_from_slice(b"ovf");
        return &buf[..at + 3];
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let int_part = v as u64;
    let mut scratch = [0u8; INT_SCRATCH];
    let digits = fmt_u64(int_part, 10, &mut scratch);
    buf[at..at + digits.len()].copy_from_slice(digits);
    at += digits.len();

    if decimals > 0 {
        buf[at] = b'.';
        at += 1;
        #[allow(clippy::cast_precision_loss)]
        let mut frac = v - int_part as f64;
        for _ in 0..decimals {
            frac *= 10.0;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let digit = (frac as u64).min(9);
            buf[at] = b'0' + digit as u8;
            at += 1;
            #[allow(clippy::cast_precision_loss)]
            {
                frac -= digit as f64;
            }
        }
    }
    &buf[..at]
}

/// `atol`-style parse: leading ASCII whitespace, optional sign, then a digit
/// run up to the first non-digit. Saturates instead of wrapping; anything
/// unparseable yields 0.
pub(crate) fn parse_int(bytes: &[u8]) -> i64 {
    let mut i = skip_whitespace(bytes, 0);
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut acc: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        acc = acc
            .saturating_mul(10)
            .saturating_add(i64::from(bytes[i] - b'0'));
        i += 1;
    }
    if negative { -acc } else { acc }
}

/// `strtod`-style parse: sign, digit run, optional fraction, optional
/// `e`/`E` exponent. Stops at the first byte that fits none of those.
pub(crate) fn parse_float(bytes: &[u8]) -> f64 {
    let mut i = skip_whitespace(bytes, 0);
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut value = 0.0f64;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value * 10.0 + f64::from(bytes[i] - b'0');
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let mut scale = 0.1f64;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            value += f64::from(bytes[i] - b'0') * scale;
            scale /= 10.0;
            i += 1;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let mut exp_negative = false;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            exp_negative = bytes[i] == b'-';
            i += 1;
        }
        let mut exponent = 0u32;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            exponent = exponent.saturating_mul(10) + u32::from(bytes[i] - b'0');
            i += 1;
        }
        for _ in 0..exponent.min(400) {
            if exp_negative {
                value /= 10.0;
            } else {
                value *= 10.0;
            }
        }
    }
    if negative { -value } else { value }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}
