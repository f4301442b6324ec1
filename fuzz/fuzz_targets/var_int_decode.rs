//! Fuzz target for var_int decoding
//!
//! This fuzzer feeds arbitrary byte sequences to the decoder to find:
//! - Panics on truncated or oversized input
//! - Non-canonical encodings that decode successfully
//! - Values that do not re-encode to the bytes they came from
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use addrkey_proto::{encode_var_int, get_var_int};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((value, used)) = get_var_int(data) {
        // Canonical: the consumed prefix is the one and only encoding of value
        assert_eq!(encode_var_int(value), &data[..used]);
    }
});
