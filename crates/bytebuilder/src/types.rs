use std::fmt;

use crate::{BuilderResult, ByteBuilder, ByteReader, ReadResult};

/// Something that knows how to turn itself into a flat byte structure.
///
/// The structure is appended verbatim, with no length tagging, so the reader
/// must know where it ends.
pub trait ByteStructure {
    /// Returns the byte structure of self.
    fn to_byte_structure(&self) -> Vec<u8>;
}

/// Generic trait for values that can be appended to a [`ByteBuilder`].
pub trait Appendable {
    /// Appends self to the end of the builder.
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()>;
}

/// Generic trait for values that can be read back out of a [`ByteReader`].
///
/// Only implemented where the appended form is unambiguous, so chars (which
/// lose their high bits) and raw byte slices (which aren't length tagged)
/// don't get one.
pub trait Decodable: Sized {
    /// Reads self from the reader.
    fn read_from<B: AsRef<[u8]>>(reader: &mut ByteReader<B>) -> ReadResult<Self>;
}

/// Adapter that appends a value through its [`ByteStructure`].
#[derive(Copy, Clone, Debug)]
pub struct Structured<'a, T: ?Sized>(pub &'a T);

impl<T: ByteStructure + ?Sized> Appendable for Structured<'_, T> {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_structure(self.0).map(|_| ())
    }
}

/// Adapter that appends a value as its length-prefixed textual form.
#[derive(Copy, Clone, Debug)]
pub struct Textual<'a, T: ?Sized>(pub &'a T);

impl<T: fmt::Display + ?Sized> Appendable for Textual<'_, T> {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_display(self.0).map(|_| ())
    }
}

impl<T: Appendable + ?Sized> Appendable for &T {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        (**self).append_to(builder)
    }
}

/// Simple macro to wrap the fixed size types, not much to see.
macro_rules! impl_fixed_appendable {
    ( $ty:ident $append:ident $read:ident ) => {
        impl Appendable for $ty {
            fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
                builder.$append(*self).map(|_| ())
            }
        }

        impl Decodable for $ty {
            fn read_from<B: AsRef<[u8]>>(reader: &mut ByteReader<B>) -> ReadResult<Self> {
                reader.$read()
            }
        }
    };
}

impl_fixed_appendable!(u8 append_byte read_u8);
impl_fixed_appendable!(bool append_bool read_bool);
impl_fixed_appendable!(i16 append_i16 read_i16);
impl_fixed_appendable!(i32 append_i32 read_i32);
impl_fixed_appendable!(i64 append_i64 read_i64);
impl_fixed_appendable!(f32 append_f32 read_f32);
impl_fixed_appendable!(f64 append_f64 read_f64);

impl Appendable for char {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_char(*self).map(|_| ())
    }
}

impl Appendable for str {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_str(self).map(|_| ())
    }
}

impl Appendable for String {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_str(self).map(|_| ())
    }
}

impl Decodable for String {
    fn read_from<B: AsRef<[u8]>>(reader: &mut ByteReader<B>) -> ReadResult<Self> {
        reader.read_string()
    }
}

impl Appendable for [u8] {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_bytes(self).map(|_| ())
    }
}

impl<const N: usize> Appendable for [u8; N] {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_bytes(self).map(|_| ())
    }
}

impl<const N: usize> Decodable for [u8; N] {
    fn read_from<B: AsRef<[u8]>>(reader: &mut ByteReader<B>) -> ReadResult<Self> {
        reader.read_arr::<N>()
    }
}

impl Appendable for [char] {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_chars(self).map(|_| ())
    }
}

impl Appendable for ByteBuilder {
    fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
        builder.append_builder(self).map(|_| ())
    }
}
