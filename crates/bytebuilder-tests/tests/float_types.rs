//! Float round-trips compare bit patterns, so NaN payloads are covered too.

#![expect(unused_crate_dependencies, reason = "macro hacks")]

use bytebuilder_tests::{
    bytebuilder::{ByteBuilder, ByteReader},
    proptest::prelude::*,
};

proptest! {
    #[test]
    fn test_f32_bits_roundtrip(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        let mut builder = ByteBuilder::with_capacity(0);
        builder.append_f32(v).expect("test: append");
        prop_assert_eq!(builder.to_byte_array(), bits.to_be_bytes().to_vec());

        let mut r = ByteReader::new(builder.to_byte_array());
        prop_assert_eq!(r.read_f32().expect("test: read").to_bits(), bits);
    }

    #[test]
    fn test_f64_bits_roundtrip(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        let mut builder = ByteBuilder::with_capacity(0);
        builder.append_f64(v).expect("test: append");
        prop_assert_eq!(builder.to_byte_array(), bits.to_be_bytes().to_vec());

        let mut r = ByteReader::new(builder.to_byte_array());
        prop_assert_eq!(r.read_f64().expect("test: read").to_bits(), bits);
    }
}
