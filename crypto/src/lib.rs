//! Cryptographic primitives for meshvote.
//!
//! - **SHA-256** for content identities (32-byte hash, truncated to 20 bytes)
//! - **Ed25519** for signing, with a recoverable signature layout that lets a
//!   verifier obtain the signer's public key from `(message, signature)` alone

pub mod error;
pub mod hash;
pub mod keys;
pub mod sign;

pub use error::CryptoError;
pub use hash::{calc_hash32, hash20, sha256, sha256_multi};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{
    recover_public_key, sign_message, sign_recoverable, verify_signature,
    RECOVERABLE_SIGNATURE_LEN,
};
