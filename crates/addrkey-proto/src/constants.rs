//! Protocol constants shared by every address implementation.

/// Size of a private scalar on the address curve (32 bytes)
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of an uncompressed SEC1 public point: `0x04 || X || Y` (65 bytes)
pub const PUBLIC_KEY_SIZE: usize = 65;

/// Size of the RIPEMD-160 identity hash (20 bytes)
pub const RIPE_SIZE: usize = 20;

/// Size of the broadcast tag and of the tag private key (32 bytes each)
pub const TAG_SIZE: usize = 32;

/// Minimum proof-of-work nonce trials per byte a peer will accept
pub const MIN_NONCE_TRIALS_PER_BYTE: u64 = 1000;

/// Minimum extra payload bytes added to the proof-of-work target
pub const MIN_EXTRA_BYTES: u64 = 1000;

/// Current address version (tagged pubkey broadcasts)
pub const ADDRESS_VERSION: u64 = 4;

/// Stream new addresses are created in
pub const DEFAULT_STREAM: u64 = 1;
