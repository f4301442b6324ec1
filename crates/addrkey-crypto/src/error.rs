//! Error types for cryptographic primitives

use thiserror::Error;

/// Errors from key construction, duplication and digest parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    /// Private scalar rejected by the curve (wrong length, zero, or out of
    /// range)
    #[error("invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Why the scalar was rejected
        reason: String,
    },

    /// Public point rejected by the curve (wrong length, wrong encoding, or
    /// not on the curve)
    #[error("invalid public key: {reason}")]
    InvalidPublicKey {
        /// Why the point was rejected
        reason: String,
    },

    /// Public point is valid but does not belong to the private scalar
    #[error("public key does not match private key")]
    KeyMismatch,

    /// Duplicating an existing curve key did not reproduce a valid key
    #[error("key duplication failed: {reason}")]
    DuplicationFailed {
        /// Underlying failure
        reason: String,
    },

    /// Digest had the wrong number of bytes
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected byte length
        expected: usize,
        /// Actual byte length
        actual: usize,
    },

    /// Digest string was not valid hexadecimal
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl CryptoError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors indicate a bug in a primitive that was handed valid key
    /// material. Everything else is rejected caller input.
    pub fn is_fatal(&self) -> bool {
        match self {
            // Defect in an already validated key
            Self::DuplicationFailed { .. } => true,

            // Bad input - caller can fix and retry
            Self::InvalidPrivateKey { .. }
            | Self::InvalidPublicKey { .. }
            | Self::KeyMismatch
            | Self::InvalidLength { .. }
            | Self::InvalidHex(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplication_failure_is_fatal() {
        let err = CryptoError::DuplicationFailed { reason: "bad point".to_string() };
        assert!(err.is_fatal());
    }

    #[test]
    fn invalid_input_is_not_fatal() {
        assert!(!CryptoError::KeyMismatch.is_fatal());
        assert!(!CryptoError::InvalidPrivateKey { reason: "zero".to_string() }.is_fatal());
        assert!(!CryptoError::InvalidLength { expected: 20, actual: 3 }.is_fatal());
    }

    #[test]
    fn error_display() {
        let err = CryptoError::InvalidLength { expected: 20, actual: 19 };
        assert_eq!(err.to_string(), "invalid length: expected 20, got 19");
    }
}
