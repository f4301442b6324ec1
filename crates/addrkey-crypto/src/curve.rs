//! Curve-key capability and its secp256k1 implementation.
//!
//! Address keys never touch curve arithmetic directly. They build key pairs
//! from raw bytes and duplicate them through [`CurveKey`], so the curve
//! library stays behind one seam.

use std::fmt;

use addrkey_proto::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
use k256::{PublicKey, SecretKey, elliptic_curve::sec1::ToEncodedPoint};
use zeroize::Zeroize;

use crate::{error::CryptoError, secret::PrivateKeyBytes};

/// SEC1 tag byte of an uncompressed point
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// An elliptic-curve key pair on the address curve.
///
/// # Invariants
///
/// Implementations MUST guarantee:
///
/// - A value only exists if its private scalar is in range and its public
///   point is on the curve and belongs to that scalar
/// - `duplicate()` returns an independently owned key with identical
///   private and public bytes, never a shared reference
/// - Private key material is zeroized when the value is dropped
pub trait CurveKey: Sized + Send + Sync {
    /// Build a key pair from a raw private scalar and an encoded public point.
    ///
    /// # Errors
    ///
    /// - `InvalidPrivateKey` if the scalar has the wrong length, is zero, or
    ///   is not below the curve order
    /// - `InvalidPublicKey` if the point has the wrong length or encoding, or
    ///   is not on the curve
    /// - `KeyMismatch` if the point does not belong to the scalar
    fn from_raw(private_key: &[u8], public_key: &[u8]) -> Result<Self, CryptoError>;

    /// Produce an independently owned copy carrying the same key material.
    ///
    /// # Errors
    ///
    /// - `DuplicationFailed` if the copy is not a valid key. This indicates a
    ///   defect, since `self` was validated at construction.
    fn duplicate(&self) -> Result<Self, CryptoError>;

    /// Raw private scalar (big-endian).
    fn private_key_bytes(&self) -> PrivateKeyBytes;

    /// Encoded public point (uncompressed SEC1).
    fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE];
}

/// secp256k1 key pair backed by `k256`.
///
/// Not `Clone`: copies go through [`CurveKey::duplicate`].
pub struct Secp256k1Key {
    secret: SecretKey,
    public: PublicKey,
}

impl Secp256k1Key {
    /// Build a key pair from a private scalar alone, deriving its public
    /// point.
    ///
    /// Used by address generation, where no public point exists yet.
    ///
    /// # Errors
    ///
    /// - `InvalidPrivateKey` if the scalar has the wrong length, is zero, or
    ///   is not below the curve order
    pub fn from_private(private_key: &[u8]) -> Result<Self, CryptoError> {
        let secret = parse_private(private_key)?;
        let public = secret.public_key();
        Ok(Self { secret, public })
    }
}

impl CurveKey for Secp256k1Key {
    fn from_raw(private_key: &[u8], public_key: &[u8]) -> Result<Self, CryptoError> {
        let secret = parse_private(private_key)?;
        let public = parse_public(public_key)?;

        if secret.public_key() != public {
            return Err(CryptoError::KeyMismatch);
        }

        Ok(Self { secret, public })
    }

    fn duplicate(&self) -> Result<Self, CryptoError> {
        // Rebuild from the encoded bytes so the copy shares no storage and is
        // revalidated against the curve.
        let private = self.private_key_bytes();
        Self::from_raw(private.expose(), &self.public_key_bytes())
            .map_err(|e| CryptoError::DuplicationFailed { reason: e.to_string() })
    }

    fn private_key_bytes(&self) -> PrivateKeyBytes {
        let mut bytes = self.secret.to_bytes();
        let secret = PrivateKeyBytes::from_slice(&bytes);
        bytes[..].zeroize();

        let Ok(secret) = secret else {
            unreachable!("secp256k1 field bytes are {PRIVATE_KEY_SIZE} bytes");
        };
        secret
    }

    fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let point = self.public.to_encoded_point(false);
        let mut bytes = [0u8; PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(point.as_bytes());
        bytes
    }
}

impl fmt::Debug for Secp256k1Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Key")
            .field("secret", &"[REDACTED]")
            .field("public", &hex::encode(self.public_key_bytes()))
            .finish()
    }
}

/// Parse a 32-byte big-endian scalar.
fn parse_private(bytes: &[u8]) -> Result<SecretKey, CryptoError> {
    // `SecretKey::from_slice` zero-pads short input; require the exact size.
    if bytes.len() != PRIVATE_KEY_SIZE {
        return Err(CryptoError::InvalidPrivateKey {
            reason: format!("expected {PRIVATE_KEY_SIZE} bytes, got {}", bytes.len()),
        });
    }

    SecretKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey {
        reason: "scalar is zero or not below the curve order".to_string(),
    })
}

/// Parse an uncompressed SEC1 point.
fn parse_public(bytes: &[u8]) -> Result<PublicKey, CryptoError> {
    if bytes.len() != PUBLIC_KEY_SIZE {
        return Err(CryptoError::InvalidPublicKey {
            reason: format!("expected {PUBLIC_KEY_SIZE} bytes, got {}", bytes.len()),
        });
    }

    if bytes[0] != SEC1_UNCOMPRESSED {
        return Err(CryptoError::InvalidPublicKey {
            reason: format!("expected uncompressed point tag 0x04, got {:#04x}", bytes[0]),
        });
    }

    PublicKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey {
        reason: "point is not on secp256k1".to_string(),
    })
}
