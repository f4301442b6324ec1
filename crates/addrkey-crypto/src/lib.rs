//! Addrkey Cryptographic Primitives
//!
//! Cryptographic building blocks for address keys. Pure functions with
//! deterministic outputs; nothing in this crate draws randomness or performs
//! I/O. Key material always arrives from the caller as raw bytes.
//!
//! # Address Tag Derivation
//!
//! Every address owns a tag pair derived from its public metadata. Peers
//! filter pubkey broadcasts by `tag` and decrypt matching ones with the
//! `tag_private_key`, so the address itself never appears on the wire.
//!
//! ```text
//! var_int(version) || var_int(stream) || ripe[20]
//!        │
//!        ▼
//! SHA-512 → hash1
//!        │
//!        ▼
//! SHA-512 → hash2[64]
//!        │
//!        ├── hash2[0..32]  → tag private key
//!        └── hash2[32..64] → tag
//! ```
//!
//! # Security
//!
//! Secret Containment:
//! - Private scalars and tag private keys live in [`SecretBytes`], zeroized on
//!   drop and redacted in `Debug`
//! - secp256k1 scalars inside [`Secp256k1Key`] are zeroized by `k256` on drop
//! - Intermediate hash buffers are wiped before derivation returns
//!
//! Key Validity:
//! - Private scalars must be non-zero and below the curve order
//! - Public points must be valid uncompressed SEC1 points on secp256k1
//! - The public point must belong to the supplied private scalar

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curve;
pub mod error;
pub mod hashes;
pub mod secret;
pub mod tag;

pub use curve::{CurveKey, Secp256k1Key};
pub use error::CryptoError;
pub use hashes::{RipeHash, Tag};
pub use secret::{PrivateKeyBytes, SecretBytes, TagPrivateKey};
pub use tag::{AddressTag, derive_tag};
