//! Public fixed-size digests: the identity hash and the broadcast tag.

use std::{fmt, str::FromStr};

use addrkey_proto::{RIPE_SIZE, TAG_SIZE};

use crate::error::CryptoError;

/// 20-byte RIPEMD-160 identity hash naming an address owner.
///
/// Supplied by whoever generated or imported the address; this crate never
/// computes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RipeHash([u8; RIPE_SIZE]);

/// 32-byte public tag matched against incoming pubkey broadcasts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag([u8; TAG_SIZE]);

macro_rules! impl_digest {
    ($name:ident, $size:expr) => {
        impl $name {
            /// Size of the digest in bytes
            pub const SIZE: usize = $size;

            /// Wrap raw digest bytes.
            pub const fn new(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }

            /// Raw digest bytes.
            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Lowercase hex rendering.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// Parse from hex, with or without a `0x` or `0X` prefix.
            ///
            /// # Errors
            ///
            /// - `InvalidHex` if the string is not hexadecimal
            /// - `InvalidLength` if it decodes to the wrong number of bytes
            pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
                let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
                let decoded = hex::decode(s)?;
                Self::try_from(decoded.as_slice())
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = CryptoError;

            fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
                let bytes: [u8; $size] = bytes.try_into().map_err(|_| {
                    CryptoError::InvalidLength { expected: $size, actual: bytes.len() }
                })?;
                Ok(Self(bytes))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = CryptoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_hex(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }
    };
}

impl_digest!(RipeHash, RIPE_SIZE);
impl_digest!(Tag, TAG_SIZE);
