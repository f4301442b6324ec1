//! Canonical variable-length unsigned integers.
//!
//! Big-endian, prefix-tagged encoding used throughout the peer protocol:
//!
//! ```text
//! value < 0xfd            -> [value]                   (1 byte)
//! value <= 0xffff         -> [0xfd] ++ u16 big-endian  (3 bytes)
//! value <= 0xffff_ffff    -> [0xfe] ++ u32 big-endian  (5 bytes)
//! otherwise               -> [0xff] ++ u64 big-endian  (9 bytes)
//! ```
//!
//! # Invariants
//!
//! Encoding always picks the shortest form. Decoding rejects any longer form,
//! so every value has exactly one byte representation. Address tags are
//! hashed over these bytes, which makes the uniqueness load-bearing.

use bytes::BufMut;

use crate::errors::{ProtocolError, Result};

const PREFIX_U16: u8 = 0xfd;
const PREFIX_U32: u8 = 0xfe;
const PREFIX_U64: u8 = 0xff;

/// Number of bytes `value` occupies once encoded.
pub fn encoded_len(value: u64) -> usize {
    match value {
        0..0xfd => 1,
        0xfd..=0xffff => 3,
        0x1_0000..=0xffff_ffff => 5,
        _ => 9,
    }
}

/// Append the canonical encoding of `value` to `buf`.
pub fn put_var_int(buf: &mut impl BufMut, value: u64) {
    match encoded_len(value) {
        1 => buf.put_u8(value as u8),
        3 => {
            buf.put_u8(PREFIX_U16);
            buf.put_u16(value as u16);
        },
        5 => {
            buf.put_u8(PREFIX_U32);
            buf.put_u32(value as u32);
        },
        _ => {
            buf.put_u8(PREFIX_U64);
            buf.put_u64(value);
        },
    }
}

/// Encode `value` into a freshly allocated buffer.
pub fn encode_var_int(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(value));
    put_var_int(&mut buf, value);
    buf
}

/// Decode a `var_int` from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed. Trailing bytes are
/// left for the caller.
///
/// # Errors
///
/// - `ProtocolError::Truncated` if `bytes` ends inside the encoding
/// - `ProtocolError::NonCanonicalVarInt` if a shorter form exists
pub fn get_var_int(bytes: &[u8]) -> Result<(u64, usize)> {
    let Some(&prefix) = bytes.first() else {
        return Err(ProtocolError::Truncated { needed: 1, available: 0 });
    };

    let length = match prefix {
        PREFIX_U16 => 3,
        PREFIX_U32 => 5,
        PREFIX_U64 => 9,
        small => return Ok((u64::from(small), 1)),
    };

    let Some(body) = bytes.get(1..length) else {
        return Err(ProtocolError::Truncated { needed: length, available: bytes.len() });
    };

    let value = body.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b));

    if encoded_len(value) != length {
        return Err(ProtocolError::NonCanonicalVarInt { value, length });
    }

    Ok((value, length))
}
