//! Error types for address keys.
//!
//! Construction and duplication failures are returned to the caller; a
//! failed call never yields a partial key. Releasing a key more often than it
//! was acquired cannot be expressed: [`crate::Key::release`] consumes the
//! handle it releases.

use std::fmt;

use addrkey_crypto::CryptoError;
use thiserror::Error;

/// Which of an address's two key pairs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Key pair that signs objects sent from the address
    Signing,
    /// Key pair that decrypts messages sent to the address
    Encryption,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signing => f.write_str("signing"),
            Self::Encryption => f.write_str("encryption"),
        }
    }
}

/// Errors that can occur while building or copying an address key.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    /// Raw key bytes were rejected by the curve
    #[error("invalid {role} key material: {source}")]
    InvalidKeyMaterial {
        /// Key pair that was rejected
        role: KeyRole,
        /// Curve-level reason
        source: CryptoError,
    },

    /// Curve-key duplication did not reproduce a valid key
    #[error("failed to duplicate {role} key: {source}")]
    KeyDuplicationFailed {
        /// Key pair that failed to duplicate
        role: KeyRole,
        /// Curve-level reason
        source: CryptoError,
    },

    /// Tuning parameter outside what peers accept
    #[error("invalid key configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: String,
    },
}

impl KeyError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Duplication only fails if a key that was validated at construction
    /// can no longer be reproduced, which is a defect. Everything else is
    /// rejected caller input.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::KeyDuplicationFailed { .. } => true,
            Self::InvalidKeyMaterial { .. } | Self::InvalidConfig { .. } => false,
        }
    }

    /// Key pair the error refers to, if any.
    pub fn role(&self) -> Option<KeyRole> {
        match self {
            Self::InvalidKeyMaterial { role, .. } | Self::KeyDuplicationFailed { role, .. } => {
                Some(*role)
            },
            Self::InvalidConfig { .. } => None,
        }
    }
}
