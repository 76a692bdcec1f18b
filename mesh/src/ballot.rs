//! Ballots: a smesher's signed vote on mesh history.

use meshvote_crypto::{hash20, recover_public_key, sign_recoverable};
use meshvote_types::{codec, AtxId, Hash20, Hash32, LayerId, PrivateKey, PublicKey};
use serde::{Deserialize, Serialize};

use crate::epoch::{EpochData, VotingEligibilityProof};
use crate::votes::Votes;
use crate::MeshError;

meshvote_types::hash_id!(
    /// First 20 bytes of the SHA-256 of a ballot's canonical bytes.
    BallotId,
    Hash20,
    20
);

impl BallotId {
    /// The identifier widened to 32 bytes, right-padded with zeros.
    pub fn as_hash32(&self) -> Hash32 {
        self.as_hash().to_hash32()
    }
}

/// Everything a smesher signs when casting a ballot.
///
/// Field order is the canonical encoding order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerBallot {
    /// The smesher's ATX in the epoch this ballot is cast in.
    pub atx_id: AtxId,
    /// Proof of the smesher's eligibility to vote and propose in this epoch.
    pub eligibility_proof: VotingEligibilityProof,
    /// Opinion on mesh history relative to the base ballot.
    pub votes: Votes,
    /// The first ballot the smesher cast in the epoch; empty on that ballot itself.
    pub ref_ballot: BallotId,
    /// Present only on the epoch's reference ballot.
    pub epoch_data: Option<EpochData>,
    /// The layer this ballot is eligible for, validated through the eligibility proof.
    pub layer_index: LayerId,
}

impl InnerBallot {
    /// Canonical bytes: what is hashed into the id and what the smesher signs.
    pub fn bytes(&self) -> Result<Vec<u8>, MeshError> {
        Ok(codec::encode(self)?)
    }

    /// Whether this is the smesher's first ballot of the epoch.
    pub fn is_ref_ballot(&self) -> bool {
        self.ref_ballot.is_empty()
    }

    /// Check the structural invariants of the payload.
    ///
    /// The vote sets must be disjoint, and epoch data must be present exactly
    /// when the ballot is its own reference ballot.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.votes.validate()?;
        match (&self.epoch_data, self.is_ref_ballot()) {
            (Some(_), true) | (None, false) => Ok(()),
            (None, true) => Err(MeshError::MissingEpochData),
            (Some(_), false) => Err(MeshError::UnexpectedEpochData {
                ref_ballot: self.ref_ballot,
            }),
        }
    }
}

/// Identity derived once by [`Ballot::initialize`]; never serialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BallotIdentity {
    id: BallotId,
    smesher: PublicKey,
}

/// A smesher's signed vote on the mesh history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    inner: InnerBallot,
    /// Recoverable signature over the canonical bytes of `inner`.
    signature: Vec<u8>,
    #[serde(skip)]
    identity: Option<BallotIdentity>,
}

impl Ballot {
    /// An uninitialized ballot from a populated payload and its signature.
    pub fn new(inner: InnerBallot, signature: Vec<u8>) -> Self {
        Self {
            inner,
            signature,
            identity: None,
        }
    }

    /// Sign `inner` with `key`, producing an uninitialized ballot.
    pub fn sign(inner: InnerBallot, key: &PrivateKey) -> Result<Self, MeshError> {
        let signature = sign_recoverable(&inner.bytes()?, key);
        Ok(Self::new(inner, signature))
    }

    /// Rebuild an initialized ballot from already-derived identity fields.
    pub(crate) fn from_parts(
        inner: InnerBallot,
        signature: Vec<u8>,
        id: BallotId,
        smesher: PublicKey,
    ) -> Self {
        Self {
            inner,
            signature,
            identity: Some(BallotIdentity { id, smesher }),
        }
    }

    /// Derive and cache the ballot id and the smesher's public key.
    ///
    /// Call once all other fields are set. On failure nothing is cached and
    /// the ballot stays uninitialized.
    pub fn initialize(&mut self) -> Result<(), MeshError> {
        if self.identity.is_some() {
            return Err(MeshError::AlreadyInitialized("ballot"));
        }
        self.inner.validate()?;

        let data = self.inner.bytes()?;
        let id = BallotId::from(hash20(&data));
        let smesher = recover_public_key(&data, &self.signature).map_err(|source| {
            MeshError::SignatureRecovery {
                object: "ballot",
                source,
            }
        })?;

        self.identity = Some(BallotIdentity { id, smesher });
        tracing::debug!(
            ballot = %id,
            smesher = %smesher,
            layer = %self.inner.layer_index,
            "ballot initialized"
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.identity.is_some()
    }

    /// The ballot id, or [`BallotId::EMPTY`] before initialization.
    pub fn id(&self) -> BallotId {
        self.identity.map_or(BallotId::EMPTY, |identity| identity.id)
    }

    /// The smesher recovered from the signature, once initialized.
    pub fn smesher_id(&self) -> Option<&PublicKey> {
        self.identity.as_ref().map(|identity| &identity.smesher)
    }

    pub fn inner(&self) -> &InnerBallot {
        &self.inner
    }

    /// Mutable access to the payload, refused once the identity is fixed.
    pub fn inner_mut(&mut self) -> Result<&mut InnerBallot, MeshError> {
        if self.identity.is_some() {
            return Err(MeshError::AlreadyInitialized("ballot"));
        }
        Ok(&mut self.inner)
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Replace the signature, refused once the identity is fixed.
    pub fn set_signature(&mut self, signature: Vec<u8>) -> Result<(), MeshError> {
        if self.identity.is_some() {
            return Err(MeshError::AlreadyInitialized("ballot"));
        }
        self.signature = signature;
        Ok(())
    }

    /// Canonical bytes of the signed payload.
    pub fn bytes(&self) -> Result<Vec<u8>, MeshError> {
        self.inner.bytes()
    }

    pub fn layer_index(&self) -> LayerId {
        self.inner.layer_index
    }

    pub fn votes(&self) -> &Votes {
        &self.inner.votes
    }
}

/// The ids of `ballots`, in order.
pub fn to_ballot_ids(ballots: &[Ballot]) -> Vec<BallotId> {
    ballots.iter().map(Ballot::id).collect()
}

/// Widen ballot ids to their 32-byte hash form.
pub fn ballot_ids_to_hashes(ids: &[BallotId]) -> Vec<Hash32> {
    ids.iter().map(BallotId::as_hash32).collect()
}
