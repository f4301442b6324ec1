//! Address tag derivation
//!
//! # Security Properties
//!
//! - Determinism: same (version, stream, ripe) always produces the same pair
//! - Unlinkability: the tag reveals nothing about the ripe without a preimage
//!   search over SHA-512
//! - Intermediate digests are wiped before returning

use addrkey_proto::{TAG_SIZE, encoded_len, put_var_int};
use sha2::{Digest, Sha512};
use zeroize::Zeroize;

use crate::{
    hashes::{RipeHash, Tag},
    secret::TagPrivateKey,
};

/// Tag pair derived from an address's public metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTag {
    private_key: TagPrivateKey,
    tag: Tag,
}

impl AddressTag {
    /// Secret half, used to decrypt tagged pubkey broadcasts.
    pub fn private_key(&self) -> &TagPrivateKey {
        &self.private_key
    }

    /// Public half, matched against broadcasts on the wire.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Split into (private key, tag).
    pub fn into_parts(self) -> (TagPrivateKey, Tag) {
        (self.private_key, self.tag)
    }
}

/// Derive the tag pair for an address.
///
/// Computes `SHA-512(SHA-512(var_int(version) || var_int(stream) || ripe))`
/// and splits the 64-byte result: the first 32 bytes are the tag private key,
/// the last 32 bytes are the tag.
///
/// This must match every peer implementing the address scheme byte for byte.
/// Any change to the integer encoding or to the hash chaining breaks address
/// compatibility.
pub fn derive_tag(version: u64, stream: u64, ripe: &RipeHash) -> AddressTag {
    let mut prefix = Vec::with_capacity(encoded_len(version) + encoded_len(stream));
    put_var_int(&mut prefix, version);
    put_var_int(&mut prefix, stream);

    let mut hasher = Sha512::new();
    hasher.update(&prefix);
    hasher.update(ripe.as_bytes());
    let mut first = hasher.finalize();

    let mut second = Sha512::digest(&first);
    first[..].zeroize();

    let mut private_key = [0u8; TAG_SIZE];
    private_key.copy_from_slice(&second[..TAG_SIZE]);
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&second[TAG_SIZE..]);
    second[..].zeroize();

    let secret = TagPrivateKey::new(private_key);
    private_key.zeroize();

    AddressTag { private_key: secret, tag: Tag::new(tag) }
}
