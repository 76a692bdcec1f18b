use thiserror::Error;

/// Errors from signature recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("embedded public key is not a valid curve point")]
    InvalidPublicKey,

    #[error("signature does not verify against the embedded public key")]
    VerificationFailed,
}
