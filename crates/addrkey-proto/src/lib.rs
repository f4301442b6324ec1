//! Addrkey Protocol Encodings
//!
//! The small slice of the peer protocol that address keys depend on: the
//! canonical variable-length integer encoding and the proof-of-work tuning
//! minimums every address advertises.
//!
//! Everything here is wire-visible. Changing an encoding or a constant breaks
//! compatibility with every peer that implements the same address scheme.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constants;
pub mod errors;
pub mod var_int;

pub use constants::{
    ADDRESS_VERSION, DEFAULT_STREAM, MIN_EXTRA_BYTES, MIN_NONCE_TRIALS_PER_BYTE, PRIVATE_KEY_SIZE,
    PUBLIC_KEY_SIZE, RIPE_SIZE, TAG_SIZE,
};
pub use errors::{ProtocolError, Result};
pub use var_int::{encode_var_int, encoded_len, get_var_int, put_var_int};
