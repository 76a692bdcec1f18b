//! SHA-256 hashing for content identities.

use meshvote_types::{Hash20, Hash32};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Hash canonical bytes to a [`Hash32`].
pub fn calc_hash32(data: &[u8]) -> Hash32 {
    Hash32::new(sha256(data))
}

/// Hash canonical bytes and keep the leading 20 bytes.
///
/// This is the identity of ballots, proposals and blocks.
pub fn hash20(data: &[u8]) -> Hash20 {
    calc_hash32(data).to_hash20()
}
