//! Fixed-size secret byte containers.
//!
//! # Security Properties
//!
//! - Zeroized on drop, including every clone
//! - Never printed: `Debug` shows only the length
//! - No `Copy`: duplicating a secret is always an explicit `clone()`
//! - Equality runs in constant time via `subtle`

use std::fmt;

use addrkey_proto::{PRIVATE_KEY_SIZE, TAG_SIZE};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Raw private scalar bytes of a curve key.
pub type PrivateKeyBytes = SecretBytes<PRIVATE_KEY_SIZE>;

/// Private half of an address tag, used to decrypt tagged pubkey broadcasts.
pub type TagPrivateKey = SecretBytes<TAG_SIZE>;

/// `N` secret bytes that are wiped when dropped.
#[derive(Clone)]
pub struct SecretBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> SecretBytes<N> {
    /// Take ownership of `bytes`.
    ///
    /// The caller's array is moved in by value; wipe any other copy the
    /// caller still holds.
    pub fn new(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Copy secret bytes out of a slice.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if `slice` is not exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self, CryptoError> {
        if slice.len() != N {
            return Err(CryptoError::InvalidLength { expected: N, actual: slice.len() });
        }

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    /// Borrow the secret bytes.
    pub fn expose(&self) -> &[u8; N] {
        &self.bytes
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> ConstantTimeEq for SecretBytes<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{N}>([REDACTED])")
    }
}

impl<const N: usize> Drop for SecretBytes<N> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
