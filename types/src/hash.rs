//! Fixed-size hash values.
//!
//! [`Hash32`] is the full output of the protocol hash function. [`Hash20`] is
//! its truncation to the first 20 bytes and is what ballot, proposal and block
//! identifiers are made of.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bytes kept by a short (truncated) hash.
pub const HASH20_LEN: usize = 20;

/// Number of bytes in a full hash.
pub const HASH32_LEN: usize = 32;

/// Number of leading bytes rendered by `short_string`.
const SHORT_BYTES: usize = 5;

/// A 20-byte truncated hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash20([u8; HASH20_LEN]);

/// A 32-byte hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash32([u8; HASH32_LEN]);

impl Hash20 {
    pub const ZERO: Self = Self([0u8; HASH20_LEN]);

    pub fn new(bytes: [u8; HASH20_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH20_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH20_LEN]
    }

    /// Widen to a [`Hash32`]: the 20 bytes come first, the tail is zero.
    pub fn to_hash32(self) -> Hash32 {
        let mut out = [0u8; HASH32_LEN];
        out[..HASH20_LEN].copy_from_slice(&self.0);
        Hash32(out)
    }

    /// Hex of the first few bytes, for logs.
    pub fn short_string(&self) -> String {
        hex::encode(&self.0[..SHORT_BYTES])
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Hash32 {
    pub const ZERO: Self = Self([0u8; HASH32_LEN]);

    pub fn new(bytes: [u8; HASH32_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH32_LEN] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH32_LEN]
    }

    /// Truncate to the first 20 bytes.
    pub fn to_hash20(self) -> Hash20 {
        let mut out = [0u8; HASH20_LEN];
        out.copy_from_slice(&self.0[..HASH20_LEN]);
        Hash20(out)
    }

    pub fn short_string(&self) -> String {
        hex::encode(&self.0[..SHORT_BYTES])
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Hash20 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Hash32 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH20_LEN]> for Hash20 {
    fn from(bytes: [u8; HASH20_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; HASH32_LEN]> for Hash32 {
    fn from(bytes: [u8; HASH32_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Hash20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash20({}\u{2026})", self.short_string())
    }
}

impl fmt::Display for Hash20 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_string())
    }
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32({}\u{2026})", self.short_string())
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_string())
    }
}
