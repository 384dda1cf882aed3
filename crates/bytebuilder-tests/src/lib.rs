//! Property testing macros and utilities for bytebuilder.
//!
//! This crate provides macros to generate comprehensive property tests for
//! types that implement both `Appendable` and `Decodable` from bytebuilder.
//! The main export is the `generate_append_tests!` macro.

// Re-export dependencies for macro usage
pub use bytebuilder;
pub use paste;
pub use proptest;

/// Generates property tests for a type that can be appended and read back,
/// using proptest.
///
/// This macro creates property-based tests to verify that:
/// 1. Appending then reading produces the original value (round-trip property)
/// 2. The encoding is deterministic (same input always produces same output)
/// 3. Different inputs produce different encodings (when feasible)
/// 4. Appending after existing bytes leaves those bytes alone and grows the
///    size by exactly the encoded length
///
/// # Requirements
///
/// The type must implement:
/// - `bytebuilder::Appendable` and `bytebuilder::Decodable`
/// - `proptest::arbitrary::Arbitrary` - for generating test values
/// - `Debug + PartialEq` - for test assertions
///
/// Floats are not a good fit, since NaN breaks the equality checks.
///
/// # Example
/// ```rust,ignore
/// use bytebuilder_tests::generate_append_tests;
/// use bytebuilder::{
///     Appendable, BuilderResult, ByteBuilder, ByteReader, Decodable, ReadResult,
/// };
/// use proptest::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct MyType {
///     field: i32,
/// }
///
/// impl Appendable for MyType {
///     fn append_to(&self, builder: &mut ByteBuilder) -> BuilderResult<()> {
///         self.field.append_to(builder)
///     }
/// }
///
/// impl Decodable for MyType {
///     fn read_from<B: AsRef<[u8]>>(reader: &mut ByteReader<B>) -> ReadResult<Self> {
///         Ok(MyType { field: reader.read_i32()? })
///     }
/// }
///
/// impl Arbitrary for MyType {
///     type Parameters = ();
///     type Strategy = BoxedStrategy<MyType>;
///
///     fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
///         any::<i32>().prop_map(|field| MyType { field }).boxed()
///     }
/// }
///
/// // Generate comprehensive property tests
/// generate_append_tests!(MyType, "my_type");
/// ```
#[macro_export]
macro_rules! generate_append_tests {
    ($type:ty, $name:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _append>] {
                use super::*;
                use $crate::proptest::prelude::{any, prop_assert_eq, prop_assert_ne, prop_assume};
                use $crate::bytebuilder::{ByteBuilder, encode_to_vec, decode_buf_exact};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_append_roundtrip>](value in any::<$type>()) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let decoded = decode_buf_exact::<$type>(&encoded).expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_append_deterministic>](value in any::<$type>()) {
                        let encoded1 = encode_to_vec(&value).expect("encoding should succeed");
                        let encoded2 = encode_to_vec(&value).expect("encoding should succeed");
                        prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                    }

                    #[test]
                    fn [<test_append_different_inputs>](
                        value1 in any::<$type>(),
                        value2 in any::<$type>()
                    ) {
                        prop_assume!(value1 != value2);
                        let encoded1 = encode_to_vec(&value1).expect("test: encoding should succeed");
                        let encoded2 = encode_to_vec(&value2).expect("test: encoding should succeed");
                        prop_assert_ne!(encoded1, encoded2, "test: unexpected equality");
                    }

                    #[test]
                    fn [<test_append_after_prefix>](
                        prefix in $crate::proptest::collection::vec(any::<u8>(), 0..32),
                        value in any::<$type>()
                    ) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let mut builder = ByteBuilder::from_bytes(prefix.clone());
                        builder.append(&value).expect("test: append should succeed");
                        prop_assert_eq!(builder.size(), prefix.len() + encoded.len());
                        prop_assert_eq!(&builder.as_written()[..prefix.len()], &prefix[..]);
                        prop_assert_eq!(&builder.as_written()[prefix.len()..], &encoded[..]);
                    }
                }
            }
        }
    };
}
