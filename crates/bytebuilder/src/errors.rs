use std::collections::TryReserveError;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors from appending to a [`crate::ByteBuilder`].
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A requested region fell outside the bounds of the buffer it indexes.
    #[error("range {start}..{end} out of bounds for length {len}")]
    OutOfRange {
        /// First index of the requested region.
        start: usize,

        /// One past the last index of the requested region.
        end: usize,

        /// Length of the buffer being indexed.
        len: usize,
    },

    /// Special encoding can only emit between 1 and 8 bytes.
    #[error("special encoding width {0} not in 1..=8")]
    InvalidSpecialWidth(usize),

    /// Encoded text was too long to describe with a 32-bit length prefix.
    #[error("length {0} does not fit a 32-bit prefix")]
    LengthPrefixOverflow(usize),

    /// The new size would not fit in a `usize`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator refused to grow the buffer.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

/// Errors from reading values back with a [`crate::ByteReader`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// If we tried to read past the end of the underlying buffer.
    #[error("would overrun end of input")]
    OverrunInput,

    /// If there was extra data in a buffer than we didn't consume reading a
    /// value.
    #[error("extra unnecessary input leftover")]
    ExtraInput,

    /// Bool bytes must be exactly 0 or 1.
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    /// Special encoding can only span between 1 and 8 bytes.
    #[error("special encoding width {0} not in 1..=8")]
    InvalidSpecialWidth(usize),

    /// Tag byte didn't match any variant of the named type.
    #[error("invalid variant for {0}")]
    InvalidVariant(&'static str),

    /// Length-prefixed text was not valid UTF-8.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

/// Wrapper result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Wrapper result type for reader operations.
pub type ReadResult<T> = Result<T, ReadError>;
