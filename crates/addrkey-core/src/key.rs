//! Address identity keys.
//!
//! A [`Key`] bundles the two curve key pairs of an address with its identity
//! hash, its derived broadcast tag, and the metadata the owning subsystem
//! tunes at runtime.
//!
//! # Ownership
//!
//! ```text
//!  Key::new ──┐                      ┌── Key::release (not last) -> false
//!             ▼                      │
//!        Arc<KeyInner> ◄── acquire ──┤
//!             ▲                      │
//! duplicate ──┘ (new Arc)            └── Key::release (last) -> true
//!                                           │
//!                                           ▼
//!                                  curve keys + tag secret zeroized
//! ```
//!
//! Handles are atomically reference counted, so `acquire` and `release` may
//! race freely across threads. The payload is freed exactly once, by whichever
//! handle goes last. Metadata lives behind a per-key lock; mutations through
//! one handle are visible through every other handle to the same key.
//!
//! # Invariants
//!
//! - `tag` and `tag_private_key` are the tag derivation of
//!   `(version, stream, ripe)` and never change
//! - Both key pairs are valid for the whole lifetime of the key
//! - A duplicate shares no storage with its source

use std::{
    fmt,
    sync::{Arc, Weak},
};

use addrkey_crypto::{CurveKey, RipeHash, Secp256k1Key, Tag, TagPrivateKey, derive_tag};
use addrkey_proto::PUBLIC_KEY_SIZE;
use parking_lot::Mutex;

use crate::{
    config::{KeyConfig, check_extra_bytes, check_nonce_trials},
    error::{KeyError, KeyRole},
};

/// Raw inputs for constructing a key.
///
/// Produced by address generation or wallet import. Public keys are
/// uncompressed SEC1 points; private keys are 32-byte big-endian scalars.
#[derive(Clone, Copy)]
pub struct KeyMaterial<'a> {
    /// Human-readable name for the address
    pub label: &'a str,
    /// Identity hash of the address
    pub ripe: RipeHash,
    /// Address version
    pub version: u64,
    /// Network stream the address lives in
    pub stream: u64,
    /// Private scalar of the signing key pair
    pub signing_private: &'a [u8],
    /// Public point of the signing key pair
    pub signing_public: &'a [u8],
    /// Private scalar of the encryption key pair
    pub encryption_private: &'a [u8],
    /// Public point of the encryption key pair
    pub encryption_public: &'a [u8],
}

impl fmt::Debug for KeyMaterial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("label", &self.label)
            .field("ripe", &self.ripe)
            .field("version", &self.version)
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}

/// Mutable metadata of a key.
///
/// Returned by [`Key::settings`] as a snapshot; changes go through the
/// setters on [`Key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySettings {
    /// Human-readable name for the address
    pub label: String,
    /// Proof-of-work nonce trials per byte demanded from senders
    pub nonce_trials_per_byte: u64,
    /// Extra payload bytes added to the proof-of-work target
    pub payload_length_extra_bytes: u64,
    /// Unix time (seconds) of the last pubkey announcement, 0 if never
    pub last_broadcast_time: u64,
    /// Whether the address is in use
    pub enabled: bool,
    /// Whether the address is a decoy that never announces itself
    pub decoy: bool,
}

struct KeyInner<C: CurveKey> {
    ripe: RipeHash,
    version: u64,
    stream: u64,
    signing_key: C,
    encryption_key: C,
    tag_private_key: TagPrivateKey,
    tag: Tag,
    settings: Mutex<KeySettings>,
}

impl<C: CurveKey> Drop for KeyInner<C> {
    fn drop(&mut self) {
        // Curve keys and the tag secret zeroize themselves as fields drop.
        tracing::debug!(
            version = self.version,
            stream = self.stream,
            tag = %self.tag,
            "address key released"
        );
    }
}

/// Shared handle to an address identity key.
///
/// Cloning a `Key` is [`Key::acquire`]: both handles refer to the same key.
/// Use [`Key::duplicate`] for an independent copy.
pub struct Key<C: CurveKey = Secp256k1Key> {
    inner: Arc<KeyInner<C>>,
}

/// Non-owning handle to a key.
///
/// Does not keep the key alive; [`WeakKey::upgrade`] fails once every
/// [`Key`] handle has been released.
pub struct WeakKey<C: CurveKey = Secp256k1Key> {
    inner: Weak<KeyInner<C>>,
}

impl<C: CurveKey> Key<C> {
    /// Construct a key with default metadata.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyMaterial` if either key pair is rejected by the curve
    pub fn new(material: KeyMaterial<'_>) -> Result<Self, KeyError> {
        Self::with_config(material, &KeyConfig::default())
    }

    /// Construct a key with metadata taken from `config`.
    ///
    /// Builds both curve key pairs from the raw bytes, copies the identity
    /// hash, and derives the broadcast tag. Either everything succeeds or
    /// nothing is kept: a signing key built before the encryption key is
    /// rejected is dropped (and zeroized) before the error returns.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `config` fails validation
    /// - `InvalidKeyMaterial` if either key pair is rejected by the curve
    pub fn with_config(material: KeyMaterial<'_>, config: &KeyConfig) -> Result<Self, KeyError> {
        config.validate()?;

        let signing_key = C::from_raw(material.signing_private, material.signing_public)
            .map_err(|source| KeyError::InvalidKeyMaterial { role: KeyRole::Signing, source })?;
        let encryption_key = C::from_raw(material.encryption_private, material.encryption_public)
            .map_err(|source| KeyError::InvalidKeyMaterial { role: KeyRole::Encryption, source })?;

        let (tag_private_key, tag) =
            derive_tag(material.version, material.stream, &material.ripe).into_parts();

        tracing::debug!(
            version = material.version,
            stream = material.stream,
            %tag,
            "address key constructed"
        );

        let settings = KeySettings {
            label: material.label.to_owned(),
            nonce_trials_per_byte: config.nonce_trials_per_byte,
            payload_length_extra_bytes: config.payload_length_extra_bytes,
            last_broadcast_time: 0,
            enabled: config.enabled,
            decoy: config.decoy,
        };

        Ok(Self {
            inner: Arc::new(KeyInner {
                ripe: material.ripe,
                version: material.version,
                stream: material.stream,
                signing_key,
                encryption_key,
                tag_private_key,
                tag,
                settings: Mutex::new(settings),
            }),
        })
    }

    /// Create an independent copy of this key.
    ///
    /// The copy has its own reference count, its own label, and freshly
    /// duplicated curve keys with identical material. Everything else,
    /// including the current metadata, is copied by value. Later changes to
    /// either key are not seen by the other.
    ///
    /// # Errors
    ///
    /// - `KeyDuplicationFailed` if a curve key cannot be reproduced
    pub fn duplicate(&self) -> Result<Self, KeyError> {
        let inner = &self.inner;

        let signing_key = inner
            .signing_key
            .duplicate()
            .map_err(|source| KeyError::KeyDuplicationFailed { role: KeyRole::Signing, source })?;
        let encryption_key = inner.encryption_key.duplicate().map_err(|source| {
            KeyError::KeyDuplicationFailed { role: KeyRole::Encryption, source }
        })?;

        let settings = inner.settings.lock().clone();

        tracing::debug!(
            version = inner.version,
            stream = inner.stream,
            tag = %inner.tag,
            "address key duplicated"
        );

        Ok(Self {
            inner: Arc::new(KeyInner {
                ripe: inner.ripe,
                version: inner.version,
                stream: inner.stream,
                signing_key,
                encryption_key,
                tag_private_key: inner.tag_private_key.clone(),
                tag: inner.tag,
                settings: Mutex::new(settings),
            }),
        })
    }

    /// Take another owning handle to the same key.
    #[must_use]
    pub fn acquire(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }

    /// Give up this handle.
    ///
    /// Returns true if it was the last handle, in which case both curve keys,
    /// the tag secret, the label, and the key itself have been freed and all
    /// secret bytes zeroized. Concurrent releases from several threads agree:
    /// exactly one of them returns true.
    pub fn release(self) -> bool {
        Arc::into_inner(self.inner).is_some()
    }

    /// Number of live handles to this key.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether two handles refer to the same key (not merely equal keys).
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Non-owning handle to this key.
    pub fn downgrade(&self) -> WeakKey<C> {
        WeakKey { inner: Arc::downgrade(&self.inner) }
    }

    /// Identity hash of the address.
    pub fn ripe(&self) -> RipeHash {
        self.inner.ripe
    }

    /// Address version.
    pub fn version(&self) -> u64 {
        self.inner.version
    }

    /// Network stream of the address.
    pub fn stream(&self) -> u64 {
        self.inner.stream
    }

    /// Public tag matched against incoming pubkey broadcasts.
    pub fn tag(&self) -> Tag {
        self.inner.tag
    }

    /// Secret used to decrypt pubkey broadcasts carrying [`Key::tag`].
    pub fn tag_private_key(&self) -> &TagPrivateKey {
        &self.inner.tag_private_key
    }

    /// Whether a broadcast tag seen on the wire belongs to this address.
    pub fn matches_tag(&self, tag: &Tag) -> bool {
        self.inner.tag == *tag
    }

    /// Signing key pair.
    pub fn signing_key(&self) -> &C {
        &self.inner.signing_key
    }

    /// Encryption key pair.
    pub fn encryption_key(&self) -> &C {
        &self.inner.encryption_key
    }

    /// Encoded public point of the signing key pair.
    pub fn signing_public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.inner.signing_key.public_key_bytes()
    }

    /// Encoded public point of the encryption key pair.
    pub fn encryption_public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.inner.encryption_key.public_key_bytes()
    }

    /// Snapshot of the mutable metadata.
    pub fn settings(&self) -> KeySettings {
        self.inner.settings.lock().clone()
    }

    /// Human-readable name for the address.
    pub fn label(&self) -> String {
        self.inner.settings.lock().label.clone()
    }

    /// Replace the label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.inner.settings.lock().label = label.into();
    }

    /// Whether the address is in use.
    pub fn enabled(&self) -> bool {
        self.inner.settings.lock().enabled
    }

    /// Enable or disable the address.
    pub fn set_enabled(&self, enabled: bool) {
        self.inner.settings.lock().enabled = enabled;
    }

    /// Whether the address is a decoy.
    pub fn is_decoy(&self) -> bool {
        self.inner.settings.lock().decoy
    }

    /// Mark or unmark the address as a decoy.
    pub fn set_decoy(&self, decoy: bool) {
        self.inner.settings.lock().decoy = decoy;
    }

    /// Proof-of-work nonce trials per byte demanded from senders.
    pub fn nonce_trials_per_byte(&self) -> u64 {
        self.inner.settings.lock().nonce_trials_per_byte
    }

    /// Change the nonce trials per byte.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `value` is below the protocol minimum; the current
    ///   value is kept
    pub fn set_nonce_trials_per_byte(&self, value: u64) -> Result<(), KeyError> {
        check_nonce_trials(value).inspect_err(|e| {
            tracing::warn!(tag = %self.inner.tag, error = %e, "rejected nonce_trials_per_byte");
        })?;
        self.inner.settings.lock().nonce_trials_per_byte = value;
        Ok(())
    }

    /// Extra payload bytes added to the proof-of-work target.
    pub fn payload_length_extra_bytes(&self) -> u64 {
        self.inner.settings.lock().payload_length_extra_bytes
    }

    /// Change the extra payload bytes.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if `value` is below the protocol minimum; the current
    ///   value is kept
    pub fn set_payload_length_extra_bytes(&self, value: u64) -> Result<(), KeyError> {
        check_extra_bytes(value).inspect_err(|e| {
            tracing::warn!(tag = %self.inner.tag, error = %e, "rejected payload_length_extra_bytes");
        })?;
        self.inner.settings.lock().payload_length_extra_bytes = value;
        Ok(())
    }

    /// Unix time (seconds) of the last pubkey announcement, 0 if never.
    pub fn last_broadcast_time(&self) -> u64 {
        self.inner.settings.lock().last_broadcast_time
    }

    /// Record a pubkey announcement at `time` (unix seconds).
    pub fn set_last_broadcast_time(&self, time: u64) {
        self.inner.settings.lock().last_broadcast_time = time;
    }

    /// Whether the pubkey should be announced at `now` (unix seconds).
    ///
    /// True for an enabled, non-decoy key that has never announced itself, or
    /// whose last announcement is at least `interval` seconds old. An
    /// `interval` of 0 means always due, even if the recorded announcement
    /// lies after `now`. Callers normally pass
    /// [`crate::DEFAULT_PUBKEY_REBROADCAST_INTERVAL`].
    pub fn pubkey_broadcast_due(&self, now: u64, interval: u64) -> bool {
        let settings = self.inner.settings.lock();
        if !settings.enabled || settings.decoy {
            return false;
        }
        settings.last_broadcast_time == 0
            || now.saturating_sub(settings.last_broadcast_time) >= interval
    }
}

impl<C: CurveKey> Clone for Key<C> {
    fn clone(&self) -> Self {
        self.acquire()
    }
}

impl<C: CurveKey> fmt::Debug for Key<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("label", &self.label())
            .field("ripe", &self.inner.ripe)
            .field("version", &self.inner.version)
            .field("stream", &self.inner.stream)
            .field("tag", &self.inner.tag)
            .finish_non_exhaustive()
    }
}

impl<C: CurveKey> WeakKey<C> {
    /// Owning handle to the key, if it is still alive.
    pub fn upgrade(&self) -> Option<Key<C>> {
        self.inner.upgrade().map(|inner| Key { inner })
    }

    /// Whether the key has been freed.
    pub fn is_released(&self) -> bool {
        self.inner.strong_count() == 0
    }
}

impl<C: CurveKey> Clone for WeakKey<C> {
    fn clone(&self) -> Self {
        Self { inner: Weak::clone(&self.inner) }
    }
}

impl<C: CurveKey> fmt::Debug for WeakKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakKey").field("released", &self.is_released()).finish()
    }
}
