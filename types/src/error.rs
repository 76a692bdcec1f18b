//! Errors raised by the shared types.

use thiserror::Error;

/// Failure of the canonical codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode {kind}: {reason}")]
    Encode { kind: &'static str, reason: String },

    #[error("failed to decode {kind}: {reason}")]
    Decode { kind: &'static str, reason: String },
}
