//! High-level util functions.

use crate::{Appendable, BuilderResult, ByteBuilder, ByteReader, Decodable, ReadError, ReadResult};

/// Encodes the value into a newly allocated vec holding only what was written.
pub fn encode_to_vec<T: Appendable + ?Sized>(v: &T) -> BuilderResult<Vec<u8>> {
    let mut builder = ByteBuilder::with_capacity(0);
    v.append_to(&mut builder)?;
    Ok(builder.into_written())
}

/// Decodes a value from a buffer, throwing an error if there's leftover bytes.
pub fn decode_buf_exact<T: Decodable>(buf: &[u8]) -> ReadResult<T> {
    let mut reader = ByteReader::new(buf);
    let v = T::read_from(&mut reader)?;
    if reader.remaining() > 0 {
        return Err(ReadError::ExtraInput);
    }
    Ok(v)
}
