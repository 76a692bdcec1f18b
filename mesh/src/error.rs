use meshvote_crypto::CryptoError;
use meshvote_types::{BlockId, CodecError, LayerId, PublicKey};
use thiserror::Error;

use crate::ballot::BallotId;

/// Errors from ballot and proposal initialization and reconstruction.
///
/// None of these are transient: each one means either misuse (initializing
/// twice) or an untrustworthy object that should be rejected.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("{0} already initialized")]
    AlreadyInitialized(&'static str),

    #[error("{0} is not initialized")]
    NotInitialized(&'static str),

    #[error("{object} extract key: {source}")]
    SignatureRecovery {
        object: &'static str,
        #[source]
        source: CryptoError,
    },

    #[error("inconsistent smesher in proposal {proposal} and ballot {ballot}")]
    SignerMismatch { proposal: PublicKey, ballot: PublicKey },

    #[error("block {block} appears in more than one vote set")]
    ConflictingVotes { block: BlockId },

    #[error("ballot without a reference ballot must carry epoch data")]
    MissingEpochData,

    #[error("ballot referencing {ref_ballot} must not carry epoch data")]
    UnexpectedEpochData { ref_ballot: BallotId },

    #[error("projection expects ballot {expected}, got {actual}")]
    BallotMismatch { expected: BallotId, actual: BallotId },

    #[error("projection expects layer {expected}, ballot is in layer {actual}")]
    LayerMismatch { expected: LayerId, actual: LayerId },

    #[error(transparent)]
    Codec(#[from] CodecError),
}
