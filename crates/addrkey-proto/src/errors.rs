//! Protocol decoding errors.

use thiserror::Error;

/// Convenience alias for protocol results
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while decoding wire encodings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Input ended before the encoding was complete
    #[error("truncated input: need {needed} bytes, have {available}")]
    Truncated {
        /// Bytes required by the encoding
        needed: usize,
        /// Bytes actually available
        available: usize,
    },

    /// Integer was encoded with more bytes than its value requires
    #[error("non-canonical var_int: {value} encoded in {length} bytes")]
    NonCanonicalVarInt {
        /// Decoded value
        value: u64,
        /// Length of the encoding that was used
        length: usize,
    },
}

impl ProtocolError {
    /// Returns true if more input could turn this error into a success.
    ///
    /// Truncation is recoverable by reading further bytes from the stream.
    /// A non-canonical encoding is a peer violation and never recovers.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_incomplete() {
        assert!(ProtocolError::Truncated { needed: 3, available: 1 }.is_incomplete());
    }

    #[test]
    fn non_canonical_is_not_incomplete() {
        assert!(!ProtocolError::NonCanonicalVarInt { value: 1, length: 3 }.is_incomplete());
    }

    #[test]
    fn error_display() {
        let err = ProtocolError::NonCanonicalVarInt { value: 252, length: 3 };
        assert_eq!(err.to_string(), "non-canonical var_int: 252 encoded in 3 bytes");
    }
}
