//! Canonical byte encoding.
//!
//! Every payload that is hashed or signed goes through [`encode`]. The format
//! is bincode with fixed-width little-endian integers: struct fields are
//! written in declaration order, sequences carry a `u64` length prefix and
//! keep their element order, and `Option` is a one-byte tag. The same value
//! therefore always produces the same bytes on every node.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::CodecError;

/// Upper bound on an encoded payload, applied on both encode and decode.
pub const MAX_ENCODED_SIZE: u64 = 16 * 1024 * 1024; // 16 MiB

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .with_limit(MAX_ENCODED_SIZE)
}

/// Encode `value` into its canonical bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    options().serialize(value).map_err(|e| CodecError::Encode {
        kind: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}

/// Decode canonical bytes. Trailing bytes are rejected.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    options().deserialize(bytes).map_err(|e| CodecError::Decode {
        kind: std::any::type_name::<T>(),
        reason: e.to_string(),
    })
}
