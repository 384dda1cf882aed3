//! Truncated ("special") encoding of 64-bit signed integers.
//!
//! A value is written as the low `n` bytes of its big-endian two's complement
//! form, for `n` in `1..=8`.  When the sign is preserved, the top bit of the
//! first byte is overwritten with the sign of the value, so that it can be
//! sign-extended on the way back.
//!
//! ```txt
//! 1234567890123456789  = 11 22 10 f4 7d e9 81 15
//!   n=3, signed        =                69 81 15
//! -1234567890123456789 = ee dd ef 0b 82 16 7e eb
//!   n=3, signed        =                96 7e eb
//! ```

/// Widest possible special encoding.
pub(crate) const MAX_SPECIAL_BYTES: usize = 8;

fn is_valid_width(num_bytes: usize) -> bool {
    (1..=MAX_SPECIAL_BYTES).contains(&num_bytes)
}

/// Encodes into the first `num_bytes` entries of the returned array.
///
/// Returns `None` if the width is out of range.
pub(crate) fn encode(value: i64, num_bytes: usize, preserve_sign: bool) -> Option<[u8; 8]> {
    if !is_valid_width(num_bytes) {
        return None;
    }

    let full = value.to_be_bytes();
    let mut out = [0; MAX_SPECIAL_BYTES];
    out[..num_bytes].copy_from_slice(&full[MAX_SPECIAL_BYTES - num_bytes..]);

    if preserve_sign {
        if value < 0 {
            out[0] |= 0x80;
        } else {
            out[0] &= 0x7f;
        }
    }

    Some(out)
}

/// Decodes a special encoded buf, which must be exactly as long as the width
/// it was written with.
///
/// Returns `None` if the width is out of range.
pub(crate) fn decode(buf: &[u8], preserve_sign: bool) -> Option<i64> {
    if !is_valid_width(buf.len()) {
        return None;
    }

    let mut v = buf.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b));

    let negative = buf[0] & 0x80 != 0;
    if preserve_sign && negative && buf.len() < MAX_SPECIAL_BYTES {
        v |= u64::MAX << (buf.len() * 8);
    }

    Some(v as i64)
}
