//! Addrkey Core
//!
//! Identity keys for peer-to-peer messaging addresses. A [`Key`] owns the
//! signing and encryption key pairs of one address together with its identity
//! hash, its broadcast tag, and the metadata the owning subsystem tunes at
//! runtime (label, proof-of-work parameters, announcement timer, flags).
//!
//! # Lifecycle
//!
//! ```text
//! KeyMaterial (raw bytes)
//!        │
//!        ▼ Key::new / Key::with_config
//! Key ── acquire ──► Key (same identity)
//!  │
//!  └─── duplicate ──► Key (independent copy)
//!
//! last handle released → key pairs + tag secret zeroized
//! ```
//!
//! # Example
//!
//! ```
//! use addrkey_core::{Key, KeyMaterial};
//! use addrkey_crypto::{CurveKey, RipeHash, Secp256k1Key};
//!
//! let mut signing_private = [0u8; 32];
//! signing_private[31] = 1;
//! let mut encryption_private = [0u8; 32];
//! encryption_private[31] = 2;
//! let signing_public = Secp256k1Key::from_private(&signing_private)?.public_key_bytes();
//! let encryption_public = Secp256k1Key::from_private(&encryption_private)?.public_key_bytes();
//!
//! let key: Key = Key::new(KeyMaterial {
//!     label: "inbox",
//!     ripe: RipeHash::new([0u8; 20]),
//!     version: 4,
//!     stream: 1,
//!     signing_private: &signing_private,
//!     signing_public: &signing_public,
//!     encryption_private: &encryption_private,
//!     encryption_public: &encryption_public,
//! })?;
//!
//! let shared = key.acquire();
//! assert!(shared.same_identity(&key));
//! assert!(!shared.release());
//! assert!(key.release());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod key;

pub use config::{DEFAULT_PUBKEY_REBROADCAST_INTERVAL, KeyConfig};
pub use error::{KeyError, KeyRole};
pub use key::{Key, KeyMaterial, KeySettings, WeakKey};
