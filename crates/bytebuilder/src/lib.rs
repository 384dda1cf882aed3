//! Growable byte buffer that serializes values with a fixed big-endian layout.

mod errors;
pub use errors::{BuilderError, BuilderResult, ReadError, ReadResult};

mod builder;
pub use builder::{ByteBuilder, DEFAULT_CAPACITY, GrowthPolicy};

mod reader;
pub use reader::ByteReader;

mod special;

mod types;
pub use types::{Appendable, ByteStructure, Decodable, Structured, Textual};

mod macros;

mod util;
pub use util::{decode_buf_exact, encode_to_vec};

#[cfg(test)]
mod tests;
