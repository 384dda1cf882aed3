//! Growable byte buffer that appends values in big-endian order.

use std::fmt::{self, Write as _};
use std::ops::Range;

use tracing::{trace, warn};

use crate::errors::{BuilderError, BuilderResult};
use crate::special;
use crate::types::{Appendable, ByteStructure};

/// Capacity of a builder constructed with [`ByteBuilder::new`].
pub const DEFAULT_CAPACITY: usize = 32;

/// Width of the length prefix written before text.
const LEN_PREFIX_BYTES: usize = 4;

/// How the buffer grows when an append needs more room than it has.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GrowthPolicy {
    /// Grow to exactly the requested capacity.
    ///
    /// Since [`ByteBuilder::to_byte_array`] exposes the whole buffer, this
    /// keeps it free of padding when the builder is filled by appends alone.
    #[default]
    Exact,

    /// Grow to `(capacity + 1) * 2`, or to the requested capacity if that is
    /// larger.
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity to grow to from `current` so that it holds at
    /// least `min` bytes.
    pub fn next_capacity(&self, current: usize, min: usize) -> usize {
        match self {
            GrowthPolicy::Exact => min,
            GrowthPolicy::Doubling => current.saturating_add(1).saturating_mul(2).max(min),
        }
    }
}

/// Mutable byte accumulator.
///
/// The buffer has a *capacity*, which is its full physical length, and a
/// *size*, which is the number of bytes written from the start.  Appends
/// write at `size` and grow the buffer first if needed.  Capacity never
/// shrinks.
#[derive(Clone, Debug)]
pub struct ByteBuilder {
    /// Physical buffer, its length is the capacity.
    buf: Vec<u8>,

    /// Logically written prefix of `buf`.
    size: usize,

    policy: GrowthPolicy,
}

impl ByteBuilder {
    /// Constructs an empty builder with [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty builder with a zero-filled buffer of exactly
    /// `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, GrowthPolicy::default())
    }

    /// Constructs an empty builder with an explicit growth policy.
    pub fn with_policy(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            buf: vec![0; capacity],
            size: 0,
            policy,
        }
    }

    /// Adopts an existing buffer.  Its whole length counts as written.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let buf = bytes.into();
        Self {
            size: buf.len(),
            buf,
            policy: GrowthPolicy::default(),
        }
    }

    /// Returns the length of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of bytes written.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the growth policy.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Makes sure the buffer is at least `min` bytes long.
    ///
    /// Written bytes are preserved and the new tail is zeroed.  Does nothing
    /// if the capacity already suffices.
    pub fn ensure_capacity(&mut self, min: usize) -> BuilderResult<()> {
        let old = self.capacity();
        if old >= min {
            return Ok(());
        }

        let new = self.policy.next_capacity(old, min);
        if let Err(e) = self.buf.try_reserve(new - old) {
            warn!(%old, %new, "failed to grow byte buffer");
            return Err(e.into());
        }

        self.buf.resize(new, 0);
        trace!(%old, %new, "grew byte buffer");
        Ok(())
    }

    /// Copies out the bytes in `[start, end)`.
    ///
    /// This indexes the whole buffer, not only the written prefix.
    pub fn sub_sequence(&self, start: usize, end: usize) -> BuilderResult<Vec<u8>> {
        let len = self.capacity();
        if start > end || end > len {
            return Err(BuilderError::OutOfRange { start, end, len });
        }

        Ok(self.buf[start..end].to_vec())
    }

    /// Copies out the whole buffer, including any unwritten tail past
    /// [`Self::size`].
    pub fn to_byte_array(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Returns the written prefix.
    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.size]
    }

    /// Consumes the builder, returning only the written prefix.
    pub fn into_written(mut self) -> Vec<u8> {
        self.buf.truncate(self.size);
        self.buf
    }

    /// Overwrites a single byte anywhere in the buffer.  Does not change the
    /// size.
    pub fn set_byte(&mut self, index: usize, value: u8) -> BuilderResult<()> {
        let len = self.capacity();
        match self.buf.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BuilderError::OutOfRange {
                start: index,
                end: index.saturating_add(1),
                len,
            }),
        }
    }

    /// Appends anything implementing [`Appendable`].
    pub fn append<T: Appendable + ?Sized>(&mut self, value: &T) -> BuilderResult<&mut Self> {
        value.append_to(self)?;
        Ok(self)
    }

    /// Appends a single raw byte.
    pub fn append_byte(&mut self, b: u8) -> BuilderResult<&mut Self> {
        self.write(&[b])
    }

    /// Appends all of `src`.
    pub fn append_bytes(&mut self, src: &[u8]) -> BuilderResult<&mut Self> {
        self.write(src)
    }

    /// Appends `len` bytes of `src` starting at `offset`.
    pub fn append_byte_range(
        &mut self,
        src: &[u8],
        offset: usize,
        len: usize,
    ) -> BuilderResult<&mut Self> {
        let range = source_range(src.len(), offset, len)?;
        self.write(&src[range])
    }

    /// Appends the low 8 bits of a char's code point.
    pub fn append_char(&mut self, c: char) -> BuilderResult<&mut Self> {
        self.write(&[low_byte(c)])
    }

    /// Appends the low 8 bits of every char in `src`.
    pub fn append_chars(&mut self, src: &[char]) -> BuilderResult<&mut Self> {
        self.append_char_range(src, 0, src.len())
    }

    /// Appends the low 8 bits of `len` chars of `src` starting at `offset`.
    pub fn append_char_range(
        &mut self,
        src: &[char],
        offset: usize,
        len: usize,
    ) -> BuilderResult<&mut Self> {
        let range = source_range(src.len(), offset, len)?;
        let end = self.reserve_tail(len)?;
        for (dst, c) in self.buf[self.size..end].iter_mut().zip(&src[range]) {
            *dst = low_byte(*c);
        }
        self.size = end;
        Ok(self)
    }

    /// Appends `1` for true and `0` for false.
    pub fn append_bool(&mut self, v: bool) -> BuilderResult<&mut Self> {
        self.write(&[u8::from(v)])
    }

    /// Appends 2 big-endian bytes.
    pub fn append_i16(&mut self, v: i16) -> BuilderResult<&mut Self> {
        self.write(&v.to_be_bytes())
    }

    /// Appends 4 big-endian bytes.
    pub fn append_i32(&mut self, v: i32) -> BuilderResult<&mut Self> {
        self.write(&v.to_be_bytes())
    }

    /// Appends 8 big-endian bytes.
    pub fn append_i64(&mut self, v: i64) -> BuilderResult<&mut Self> {
        self.write(&v.to_be_bytes())
    }

    /// Appends the IEEE-754 bit pattern, big-endian.
    pub fn append_f32(&mut self, v: f32) -> BuilderResult<&mut Self> {
        self.write(&v.to_be_bytes())
    }

    /// Appends the IEEE-754 bit pattern, big-endian.
    pub fn append_f64(&mut self, v: f64) -> BuilderResult<&mut Self> {
        self.write(&v.to_be_bytes())
    }

    /// Appends the written prefix of another builder.
    pub fn append_builder(&mut self, other: &ByteBuilder) -> BuilderResult<&mut Self> {
        self.write(other.as_written())
    }

    /// Appends whatever the value produces as its byte structure, with no
    /// length tagging.
    pub fn append_structure<T: ByteStructure + ?Sized>(
        &mut self,
        value: &T,
    ) -> BuilderResult<&mut Self> {
        self.write(&value.to_byte_structure())
    }

    /// Appends the textual form of the value as length-prefixed UTF-8.
    ///
    /// This is lossy for non-text types, eg. `123456` is written as the six
    /// digits and not as an integer.
    pub fn append_display<T: fmt::Display + ?Sized>(
        &mut self,
        value: &T,
    ) -> BuilderResult<&mut Self> {
        self.write_prefixed(value.to_string().as_bytes())
    }

    /// Appends a string as a 4 byte big-endian length followed by its UTF-8
    /// bytes.
    pub fn append_str(&mut self, s: &str) -> BuilderResult<&mut Self> {
        self.write_prefixed(s.as_bytes())
    }

    /// Appends the low `num_bytes` bytes of `value`.
    ///
    /// With `preserve_sign`, the top bit of the first emitted byte is set to
    /// the sign of `value`.  No check is made that `value` survives the
    /// truncation, callers pick a width wide enough for their values.
    pub fn append_special(
        &mut self,
        value: i64,
        num_bytes: usize,
        preserve_sign: bool,
    ) -> BuilderResult<&mut Self> {
        let bytes = special::encode(value, num_bytes, preserve_sign)
            .ok_or(BuilderError::InvalidSpecialWidth(num_bytes))?;
        self.write(&bytes[..num_bytes])
    }

    /// Grows the buffer to fit `width` more bytes past `size`, returning the
    /// new end.  Doesn't touch `size`.
    fn reserve_tail(&mut self, width: usize) -> BuilderResult<usize> {
        let end = self
            .size
            .checked_add(width)
            .ok_or(BuilderError::CapacityOverflow)?;
        self.ensure_capacity(end)?;
        Ok(end)
    }

    fn write(&mut self, bytes: &[u8]) -> BuilderResult<&mut Self> {
        let end = self.reserve_tail(bytes.len())?;
        self.buf[self.size..end].copy_from_slice(bytes);
        self.size = end;
        Ok(self)
    }

    fn write_prefixed(&mut self, bytes: &[u8]) -> BuilderResult<&mut Self> {
        let len =
            u32::try_from(bytes.len()).map_err(|_| BuilderError::LengthPrefixOverflow(bytes.len()))?;
        let width = bytes
            .len()
            .checked_add(LEN_PREFIX_BYTES)
            .ok_or(BuilderError::CapacityOverflow)?;

        // Reserve for the whole thing up front so nothing is half written.
        self.reserve_tail(width)?;
        self.write(&len.to_be_bytes())?;
        self.write(bytes)
    }
}

impl Default for ByteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for ByteBuilder {
    fn from(value: Vec<u8>) -> Self {
        Self::from_bytes(value)
    }
}

impl From<&[u8]> for ByteBuilder {
    fn from(value: &[u8]) -> Self {
        Self::from_bytes(value)
    }
}

impl<const N: usize> From<[u8; N]> for ByteBuilder {
    fn from(value: [u8; N]) -> Self {
        Self::from_bytes(value)
    }
}

/// Renders every byte of the buffer as the char with that code point.
impl fmt::Display for ByteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.buf.iter().try_for_each(|&b| f.write_char(char::from(b)))
    }
}

/// Checks `offset..offset + len` is inside a source of length `src_len`.
fn source_range(src_len: usize, offset: usize, len: usize) -> BuilderResult<Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= src_len => Ok(offset..end),
        _ => Err(BuilderError::OutOfRange {
            start: offset,
            end: offset.saturating_add(len),
            len: src_len,
        }),
    }
}

fn low_byte(c: char) -> u8 {
    (u32::from(c) & 0xff) as u8
}
