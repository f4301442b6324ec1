//! Property-based tests for address keys
//!
//! These tests verify the invariants of the key entity for arbitrary inputs:
//!
//! 1. **Tag binding**: A key's tag is the derivation of its own metadata
//! 2. **Duplication**: Duplicates are bit-identical yet independently owned
//! 3. **Reference counting**: n acquires and n releases free exactly once

use addrkey_core::{Key, KeyMaterial};
use addrkey_crypto::{CurveKey, RipeHash, Secp256k1Key, derive_tag};
use proptest::prelude::*;

/// Strategy for valid private scalars (non-zero, well below the curve order)
fn arbitrary_scalar() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 31]>().prop_map(|tail| {
        let mut scalar = [0u8; 32];
        scalar[1..].copy_from_slice(&tail);
        scalar[31] |= 0x01;
        scalar
    })
}

fn build_key(
    label: &str,
    ripe: [u8; 20],
    version: u64,
    stream: u64,
    signing: &[u8; 32],
    encryption: &[u8; 32],
) -> Key {
    let signing_public = Secp256k1Key::from_private(signing).unwrap().public_key_bytes();
    let encryption_public = Secp256k1Key::from_private(encryption).unwrap().public_key_bytes();

    Key::new(KeyMaterial {
        label,
        ripe: RipeHash::new(ripe),
        version,
        stream,
        signing_private: signing,
        signing_public: &signing_public,
        encryption_private: encryption,
        encryption_public: &encryption_public,
    })
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    #[test]
    fn prop_tag_bound_to_metadata(
        ripe in any::<[u8; 20]>(),
        version in any::<u64>(),
        stream in any::<u64>(),
        signing in arbitrary_scalar(),
        encryption in arbitrary_scalar(),
    ) {
        let key = build_key("prop", ripe, version, stream, &signing, &encryption);
        let derived = derive_tag(version, stream, &RipeHash::new(ripe));

        prop_assert_eq!(key.tag(), derived.tag());
        prop_assert_eq!(key.tag_private_key(), derived.private_key());
        prop_assert_eq!(key.version(), version);
        prop_assert_eq!(key.stream(), stream);
        prop_assert_eq!(key.ripe(), RipeHash::new(ripe));
    }

    #[test]
    fn prop_duplicate_is_bit_identical_and_independent(
        ripe in any::<[u8; 20]>(),
        stream in 1u64..1000,
        signing in arbitrary_scalar(),
        encryption in arbitrary_scalar(),
        label in "[a-z]{1,16}",
        new_label in "[A-Z]{1,16}",
    ) {
        let key = build_key(&label, ripe, 4, stream, &signing, &encryption);
        let copy = key.duplicate().unwrap();

        prop_assert!(!copy.same_identity(&key));
        prop_assert_eq!(copy.signing_public_key(), key.signing_public_key());
        prop_assert_eq!(copy.encryption_public_key(), key.encryption_public_key());
        prop_assert_eq!(copy.signing_key().private_key_bytes(), key.signing_key().private_key_bytes());
        prop_assert_eq!(copy.ripe(), key.ripe());
        prop_assert_eq!(copy.version(), key.version());
        prop_assert_eq!(copy.stream(), key.stream());
        prop_assert_eq!(copy.tag(), key.tag());
        prop_assert_eq!(copy.settings(), key.settings());

        // Relabelling the copy leaves the original untouched
        copy.set_label(new_label.clone());
        prop_assert_eq!(copy.label(), new_label);
        prop_assert_eq!(key.label(), label);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_release_frees_only_after_last_handle(
        acquires in 1usize..32,
        signing in arbitrary_scalar(),
        encryption in arbitrary_scalar(),
    ) {
        let key = build_key("counted", [0; 20], 4, 1, &signing, &encryption);
        let weak = key.downgrade();

        let handles: Vec<Key> = (0..acquires).map(|_| key.acquire()).collect();
        prop_assert_eq!(key.ref_count(), acquires + 1);

        let mut freed = 0usize;
        for handle in handles {
            prop_assert!(!weak.is_released());
            freed += usize::from(handle.release());
        }

        prop_assert_eq!(freed, 0);
        prop_assert_eq!(key.ref_count(), 1);
        prop_assert!(key.release());
        prop_assert!(weak.is_released());
    }
}
