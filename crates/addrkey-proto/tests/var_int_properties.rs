//! Property-based tests for `var_int` encoding
//!
//! These tests verify that the encoding is canonical for ALL values, not just
//! the boundary examples in the unit tests. Address tags hash over these
//! bytes, so a second valid encoding of any value would split the network.

use addrkey_proto::{ProtocolError, encode_var_int, encoded_len, get_var_int, put_var_int};
use proptest::prelude::*;

/// Strategy biased towards the width boundaries
fn arbitrary_value() -> impl Strategy<Value = u64> {
    prop_oneof![
        any::<u64>(),
        0u64..0x200,
        0xff00u64..0x1_0100,
        0xffff_ff00u64..0x1_0000_0100,
    ]
}

#[test]
fn prop_var_int_decode_inverts_encode() {
    proptest!(|(value in arbitrary_value(), trailing in prop::collection::vec(any::<u8>(), 0..8))| {
        let mut buf = encode_var_int(value);
        let len = buf.len();
        buf.extend_from_slice(&trailing);

        // PROPERTY: Decoding consumes exactly the encoding and ignores the rest
        let decoded = get_var_int(&buf).expect("decode should succeed");
        prop_assert_eq!(decoded, (value, len));
    });
}

#[test]
fn prop_var_int_length_is_minimal() {
    proptest!(|(value in arbitrary_value())| {
        let encoded = encode_var_int(value);

        // PROPERTY: Encoded size is the advertised length
        prop_assert_eq!(encoded.len(), encoded_len(value));

        // PROPERTY: Values that fit a narrower width never use a wider one
        let expected = if value < 0xfd {
            1
        } else if value <= 0xffff {
            3
        } else if value <= 0xffff_ffff {
            5
        } else {
            9
        };
        prop_assert_eq!(encoded.len(), expected, "value {:#x}", value);
    });
}

#[test]
fn prop_var_int_concatenation_decodes_in_order() {
    proptest!(|(first in arbitrary_value(), second in arbitrary_value())| {
        let mut buf = Vec::new();
        put_var_int(&mut buf, first);
        put_var_int(&mut buf, second);

        let (a, used) = get_var_int(&buf).expect("first decode should succeed");
        let (b, rest) = get_var_int(&buf[used..]).expect("second decode should succeed");

        prop_assert_eq!(a, first);
        prop_assert_eq!(b, second);
        prop_assert_eq!(used + rest, buf.len());
    });
}

#[test]
fn prop_var_int_truncation_never_panics() {
    proptest!(|(value in arbitrary_value())| {
        let encoded = encode_var_int(value);

        // PROPERTY: Every strict prefix reports truncation instead of a value
        for cut in 0..encoded.len() {
            let result = get_var_int(&encoded[..cut]);
            prop_assert!(
                matches!(result, Err(ProtocolError::Truncated { .. })),
                "prefix of {} bytes decoded as {:?}",
                cut,
                result
            );
        }
    });
}

#[test]
fn prop_var_int_widened_encoding_rejected() {
    proptest!(|(value in 0u64..=0xffff_ffff)| {
        // Force the 9-byte form for a value that fits in 5 bytes or fewer
        let mut widened = vec![0xff];
        widened.extend_from_slice(&value.to_be_bytes());

        prop_assert_eq!(
            get_var_int(&widened),
            Err(ProtocolError::NonCanonicalVarInt { value, length: 9 })
        );
    });
}

#[test]
fn version_and_stream_prefix_bytes() {
    // The prefix hashed for a version 4, stream 1 address
    let mut buf = Vec::new();
    put_var_int(&mut buf, 4);
    put_var_int(&mut buf, 1);
    assert_eq!(hex::encode(buf), "0401");
}
