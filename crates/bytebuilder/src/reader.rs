//! Simple reader for the layout written by a [`crate::ByteBuilder`].

use crate::errors::{ReadError, ReadResult};
use crate::special;
use crate::types::Decodable;

/// Reader over an arbitrary [`AsRef`] on a byte slice.
///
/// Every read either consumes exactly the bytes of the value or fails with
/// [`ReadError::OverrunInput`] and leaves the position where it was.
#[derive(Debug)]
pub struct ByteReader<B> {
    buf: B,
    at: usize,
}

impl<B: AsRef<[u8]>> ByteReader<B> {
    /// Constructs a new instance by wrapping a buffer and starting at the
    /// beginning.
    pub fn new(buf: B) -> Self {
        Self { buf, at: 0 }
    }

    /// Returns the length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// Returns if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Returns how many bytes have been consumed so far.
    pub fn position(&self) -> usize {
        self.at
    }

    /// Returns the total number of remaining bytes that can be read.
    pub fn remaining(&self) -> usize {
        self.len() - self.at
    }

    /// Unwraps the underlying buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Reads a value of any [`Decodable`] type.
    pub fn read<T: Decodable>(&mut self) -> ReadResult<T> {
        T::read_from(self)
    }

    /// Reads `n` raw bytes.  This does NOT include length tagging.
    pub fn read_bytes(&mut self, n: usize) -> ReadResult<&[u8]> {
        if n > self.remaining() {
            return Err(ReadError::OverrunInput);
        }

        let start = self.at;
        self.at += n;
        Ok(&self.buf.as_ref()[start..self.at])
    }

    /// Reads a fixed size buf.  This does NOT include length tagging.
    pub fn read_arr<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut arr = [0; N];
        arr.copy_from_slice(self.read_bytes(N)?);
        Ok(arr)
    }

    /// Reads a single raw byte.
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let [b] = self.read_arr()?;
        Ok(b)
    }

    /// Reads a bool, which must be exactly `0` or `1`.
    pub fn read_bool(&mut self) -> ReadResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(ReadError::InvalidBool(b)),
        }
    }

    /// Reads a byte as the char with that code point.
    pub fn read_char(&mut self) -> ReadResult<char> {
        self.read_u8().map(char::from)
    }

    /// Reads 2 big-endian bytes.
    pub fn read_i16(&mut self) -> ReadResult<i16> {
        self.read_arr().map(i16::from_be_bytes)
    }

    /// Reads 4 big-endian bytes.
    pub fn read_i32(&mut self) -> ReadResult<i32> {
        self.read_arr().map(i32::from_be_bytes)
    }

    /// Reads 8 big-endian bytes.
    pub fn read_i64(&mut self) -> ReadResult<i64> {
        self.read_arr().map(i64::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 bit pattern.
    pub fn read_f32(&mut self) -> ReadResult<f32> {
        self.read_arr().map(f32::from_be_bytes)
    }

    /// Reads a big-endian IEEE-754 bit pattern.
    pub fn read_f64(&mut self) -> ReadResult<f64> {
        self.read_arr().map(f64::from_be_bytes)
    }

    /// Reads a 4 byte big-endian length and then that many bytes of UTF-8.
    pub fn read_string(&mut self) -> ReadResult<String> {
        let start = self.at;
        let len = u32::from_be_bytes(self.read_arr()?) as usize;
        if len > self.remaining() {
            self.at = start;
            return Err(ReadError::OverrunInput);
        }

        let bytes = self.read_bytes(len)?.to_vec();
        Ok(String::from_utf8(bytes)?)
    }

    /// Reads a value written with [`crate::ByteBuilder::append_special`].
    ///
    /// With `preserve_sign` the value is sign-extended from its top bit,
    /// otherwise zero-extended.
    pub fn read_special(&mut self, num_bytes: usize, preserve_sign: bool) -> ReadResult<i64> {
        if !(1..=special::MAX_SPECIAL_BYTES).contains(&num_bytes) {
            return Err(ReadError::InvalidSpecialWidth(num_bytes));
        }

        let buf = self.read_bytes(num_bytes)?;
        special::decode(buf, preserve_sign).ok_or(ReadError::InvalidSpecialWidth(num_bytes))
    }
}
