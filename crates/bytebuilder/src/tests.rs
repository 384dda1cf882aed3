#![allow(unreachable_pub)] // testing the macro
#![expect(unused)] // testing the macro

use crate::{
    ByteBuilder, ByteReader, ReadError, decode_buf_exact, encode_to_vec,
    impl_appendable_flat_struct,
};

impl_appendable_flat_struct! {
    #[derive(Clone, Debug, PartialEq)]
    pub struct Record {
        id: i32,
        active: bool,
        theta: i16,
        name: String,
    }
}

/// Reinterprets signed byte literals, so expected outputs can be written the
/// way they look as signed bytes.
fn signed(bytes: &[i8]) -> Vec<u8> {
    bytes.iter().map(|b| *b as u8).collect()
}

#[test]
fn test_macro_gen() {
    let r = Record::new(1, true, 12345, "£".to_owned());

    let t1 = (12345u16 >> 8) as u8;
    let t2 = (12345u16 & 0xff) as u8;

    let f = format!("{r:?}");
    assert_eq!(
        f,
        "Record { id: 1, active: true, theta: 12345, name: \"£\" }"
    );

    let b = encode_to_vec(&r).expect("test: encode_to_vec");
    assert_eq!(&b, &[0, 0, 0, 1, 1, t1, t2, 0, 0, 0, 2, 0xc2, 0xa3]);

    let back: Record = decode_buf_exact(&b).expect("test: decode_buf_exact");
    assert_eq!(back, r);
    assert_eq!(back.name(), "£");
}

#[test]
fn test_decode_buf_exact_rejects_leftovers() {
    assert!(matches!(
        decode_buf_exact::<i16>(&[0, 1, 2]),
        Err(ReadError::ExtraInput)
    ));
    assert!(matches!(
        decode_buf_exact::<i32>(&[0, 1, 2]),
        Err(ReadError::OverrunInput)
    ));
}

#[test]
fn test_reference_scenarios() {
    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_byte(2).unwrap();
    assert_eq!(b.to_byte_array(), signed(&[4, 4, 2]));

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_i32(2).unwrap();
    assert_eq!(b.to_byte_array(), signed(&[4, 4, 0, 0, 0, 2]));

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_i64(1234567890123456789).unwrap();
    assert_eq!(
        b.to_byte_array(),
        signed(&[4, 4, 17, 34, 16, -12, 125, -23, -127, 21])
    );

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_str("FooBarBaz£$%^&*").unwrap();
    assert_eq!(
        b.to_byte_array(),
        signed(&[
            4, 4, 0, 0, 0, 16, 70, 111, 111, 66, 97, 114, 66, 97, 122, -62, -93, 36, 37, 94, 38,
            42
        ])
    );

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_special(1234567890123456789, 3, true).unwrap();
    assert_eq!(b.to_byte_array(), signed(&[4, 4, 105, -127, 21]));

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_special(-1234567890123456789, 3, true).unwrap();
    assert_eq!(b.to_byte_array(), signed(&[4, 4, -106, 126, -21]));

    let b = ByteBuilder::from_bytes(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    assert_eq!(b.sub_sequence(3, 6).unwrap(), vec![4, 5, 6]);
}

#[test]
fn test_float_scenarios() {
    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_f32(1234567890123456789.12).unwrap();
    assert_eq!(b.to_byte_array(), signed(&[4, 4, 93, -119, 16, -120]));

    let mut b = ByteBuilder::from(signed(&[4, 4]));
    b.append_f64(1234567890123456789.12).unwrap();
    assert_eq!(
        b.to_byte_array(),
        signed(&[4, 4, 67, -79, 34, 16, -12, 125, -23, -127])
    );
}

#[test]
fn test_i64_boundaries_roundtrip() {
    for v in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX] {
        let mut b = ByteBuilder::with_capacity(0);
        b.append_i64(v).unwrap();
        let mut r = ByteReader::new(b.to_byte_array());
        assert_eq!(r.read_i64().unwrap(), v);
    }
}

mod props {
    use proptest::prelude::*;

    use crate::{ByteBuilder, ByteReader};

    proptest! {
        #[test]
        fn proptest_i64_bits_roundtrip(v in any::<i64>()) {
            let mut b = ByteBuilder::new();
            b.append_i64(v).expect("test: append");
            let sub = b.sub_sequence(0, 8).expect("test: sub_sequence");
            let arr: [u8; 8] = sub.try_into().expect("test: 8 bytes");
            prop_assert_eq!(i64::from_be_bytes(arr), v);
        }

        #[test]
        fn proptest_append_byte_grows_by_one(prefix in prop::collection::vec(any::<u8>(), 0..64), b in any::<u8>()) {
            let mut builder = ByteBuilder::from_bytes(prefix.clone());
            let old = builder.size();
            builder.append_byte(b).expect("test: append");
            prop_assert_eq!(builder.size(), old + 1);
            prop_assert_eq!(builder.to_byte_array()[old], b);
            prop_assert_eq!(&builder.as_written()[..old], &prefix[..]);
        }

        #[test]
        fn proptest_ensure_capacity_preserves_prefix(
            prefix in prop::collection::vec(any::<u8>(), 0..64),
            first in 0usize..256,
            second in 0usize..256,
        ) {
            let mut builder = ByteBuilder::from_bytes(prefix.clone());
            builder.ensure_capacity(first).expect("test: ensure");
            let cap = builder.capacity();
            prop_assert!(cap >= first);

            builder.ensure_capacity(second).expect("test: ensure");
            if second <= cap {
                prop_assert_eq!(builder.capacity(), cap);
            } else {
                prop_assert!(builder.capacity() >= second);
            }
            prop_assert_eq!(builder.as_written(), &prefix[..]);
        }

        #[test]
        fn proptest_bad_range_leaves_size(
            src in prop::collection::vec(any::<u8>(), 0..16),
            offset in 0usize..32,
            len in 0usize..32,
        ) {
            let mut builder = ByteBuilder::with_capacity(0);
            let res = builder.append_byte_range(&src, offset, len);
            if offset + len > src.len() {
                prop_assert!(res.is_err());
                prop_assert_eq!(builder.size(), 0);
            } else {
                prop_assert!(res.is_ok());
                prop_assert_eq!(builder.as_written(), &src[offset..offset + len]);
            }
        }

        #[test]
        fn proptest_sub_sequence_bounds(cap in 0usize..32, start in 0usize..40, end in 0usize..40) {
            let builder = ByteBuilder::with_capacity(cap);
            let res = builder.sub_sequence(start, end);
            if start > end || end > cap {
                prop_assert!(res.is_err());
            } else {
                prop_assert_eq!(res.expect("test: in range").len(), end - start);
            }
        }

        #[test]
        fn proptest_string_roundtrip(s in ".*") {
            let mut builder = ByteBuilder::with_capacity(0);
            builder.append_str(&s).expect("test: append");
            prop_assert_eq!(builder.size(), 4 + s.len());
            let mut r = ByteReader::new(builder.to_byte_array());
            prop_assert_eq!(r.read_string().expect("test: read"), s);
        }
    }
}
