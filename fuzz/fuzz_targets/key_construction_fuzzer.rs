//! Fuzz target for key construction from untrusted bytes
//!
//! Wallet import hands raw key material straight to `Key::new`.
//!
//! # Strategy
//!
//! - Raw: arbitrary private/public bytes of arbitrary length
//! - Derived: valid private scalars with matching public points, then a
//!   single corrupted byte in one of the four buffers
//!
//! # Invariants
//!
//! - Construction either returns a fully valid key or an error, NEVER panics
//! - A constructed key's tag equals the derivation of its metadata
//! - A constructed key duplicates successfully and releases exactly once

#![no_main]

use addrkey_core::{Key, KeyMaterial};
use addrkey_crypto::{CurveKey, RipeHash, Secp256k1Key, derive_tag};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzInput {
    Raw {
        ripe: [u8; 20],
        version: u64,
        stream: u64,
        signing_private: Vec<u8>,
        signing_public: Vec<u8>,
        encryption_private: Vec<u8>,
        encryption_public: Vec<u8>,
    },
    Derived {
        ripe: [u8; 20],
        version: u64,
        stream: u64,
        signing_private: [u8; 32],
        encryption_private: [u8; 32],
        corrupt: Option<(u8, u8, u8)>,
    },
}

fn exercise(material: KeyMaterial<'_>) {
    let Ok(key) = Key::<Secp256k1Key>::new(material) else {
        return;
    };

    let derived = derive_tag(material.version, material.stream, &material.ripe);
    assert_eq!(key.tag(), derived.tag());

    let copy = key.duplicate().expect("valid key must duplicate");
    assert_eq!(copy.signing_public_key(), key.signing_public_key());
    assert!(copy.release());
    assert!(key.release());
}

fuzz_target!(|input: FuzzInput| {
    match input {
        FuzzInput::Raw {
            ripe,
            version,
            stream,
            signing_private,
            signing_public,
            encryption_private,
            encryption_public,
        } => exercise(KeyMaterial {
            label: "fuzz",
            ripe: RipeHash::new(ripe),
            version,
            stream,
            signing_private: &signing_private,
            signing_public: &signing_public,
            encryption_private: &encryption_private,
            encryption_public: &encryption_public,
        }),
        FuzzInput::Derived {
            ripe,
            version,
            stream,
            mut signing_private,
            mut encryption_private,
            corrupt,
        } => {
            let (Ok(signing), Ok(encryption)) = (
                Secp256k1Key::from_private(&signing_private),
                Secp256k1Key::from_private(&encryption_private),
            ) else {
                return;
            };
            let mut signing_public = signing.public_key_bytes();
            let mut encryption_public = encryption.public_key_bytes();

            if let Some((buffer, offset, mask)) = corrupt {
                let target: &mut [u8] = match buffer % 4 {
                    0 => &mut signing_private,
                    1 => &mut signing_public,
                    2 => &mut encryption_private,
                    _ => &mut encryption_public,
                };
                let index = usize::from(offset) % target.len();
                target[index] ^= mask;
            }

            exercise(KeyMaterial {
                label: "fuzz",
                ripe: RipeHash::new(ripe),
                version,
                stream,
                signing_private: &signing_private,
                signing_public: &signing_public,
                encryption_private: &encryption_private,
                encryption_public: &encryption_public,
            });
        },
    }
});
