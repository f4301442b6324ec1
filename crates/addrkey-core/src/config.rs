//! Defaults applied to newly constructed keys.

use addrkey_proto::{MIN_EXTRA_BYTES, MIN_NONCE_TRIALS_PER_BYTE};

use crate::error::KeyError;

/// How long a pubkey announcement stays fresh before it is sent again
/// (28 days, in seconds).
pub const DEFAULT_PUBKEY_REBROADCAST_INTERVAL: u64 = 28 * 24 * 60 * 60;

/// Initial metadata for a key.
///
/// Only affects construction; duplicates copy the source key's current
/// values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    /// Proof-of-work nonce trials per byte demanded from senders
    pub nonce_trials_per_byte: u64,
    /// Extra payload bytes added to the proof-of-work target
    pub payload_length_extra_bytes: u64,
    /// Whether the address starts enabled
    pub enabled: bool,
    /// Whether the address is a decoy that never announces itself
    pub decoy: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            nonce_trials_per_byte: MIN_NONCE_TRIALS_PER_BYTE,
            payload_length_extra_bytes: MIN_EXTRA_BYTES,
            enabled: true,
            decoy: false,
        }
    }
}

impl KeyConfig {
    /// Check tuning parameters against the protocol minimums.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if either proof-of-work parameter is below the
    ///   minimum peers accept
    pub fn validate(&self) -> Result<(), KeyError> {
        check_nonce_trials(self.nonce_trials_per_byte)?;
        check_extra_bytes(self.payload_length_extra_bytes)
    }
}

pub(crate) fn check_nonce_trials(value: u64) -> Result<(), KeyError> {
    if value < MIN_NONCE_TRIALS_PER_BYTE {
        return Err(KeyError::InvalidConfig {
            reason: format!(
                "nonce_trials_per_byte {value} is below the minimum {MIN_NONCE_TRIALS_PER_BYTE}"
            ),
        });
    }
    Ok(())
}

pub(crate) fn check_extra_bytes(value: u64) -> Result<(), KeyError> {
    if value < MIN_EXTRA_BYTES {
        return Err(KeyError::InvalidConfig {
            reason: format!(
                "payload_length_extra_bytes {value} is below the minimum {MIN_EXTRA_BYTES}"
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_protocol_minimums() {
        let config = KeyConfig::default();
        assert_eq!(config.nonce_trials_per_byte, 1000);
        assert_eq!(config.payload_length_extra_bytes, 1000);
        assert!(config.enabled);
        assert!(!config.decoy);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_low_nonce_trials() {
        let config = KeyConfig { nonce_trials_per_byte: 999, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(KeyError::InvalidConfig { reason }) if reason.contains("nonce_trials_per_byte")
        ));
    }

    #[test]
    fn validate_rejects_low_extra_bytes() {
        let config = KeyConfig { payload_length_extra_bytes: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(KeyError::InvalidConfig { reason }) if reason.contains("payload_length_extra_bytes")
        ));
    }

    #[test]
    fn validate_accepts_higher_difficulty() {
        let config = KeyConfig {
            nonce_trials_per_byte: 4000,
            payload_length_extra_bytes: 2000,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
