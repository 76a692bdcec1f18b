//! Proposals: a smesher's signed content proposal for a layer.
//!
//! A proposal is ephemeral and is discarded once the layer's block is built;
//! the ballot inside it stays in the mesh.

use meshvote_crypto::{hash20, recover_public_key, sign_recoverable};
use meshvote_types::{
    codec, sort_ids, BlockId, Hash20, Hash32, LayerId, PrivateKey, PublicKey, TransactionId,
};
use serde::{Deserialize, Serialize};

use crate::ballot::Ballot;
use crate::MeshError;

meshvote_types::hash_id!(
    /// First 20 bytes of the SHA-256 of a proposal's canonical bytes.
    ProposalId,
    Hash20,
    20
);

impl ProposalId {
    /// The identifier widened to 32 bytes, right-padded with zeros.
    pub fn as_hash32(&self) -> Hash32 {
        self.as_hash().to_hash32()
    }
}

/// Everything a smesher signs when proposing content for a layer.
///
/// The embedded ballot is encoded in full (payload and signature), so the
/// proposal signature also covers the vote it carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InnerProposal {
    /// The smesher's votes on mesh history.
    pub ballot: Ballot,
    /// The smesher's content proposal for the layer.
    pub tx_ids: Vec<TransactionId>,
}

impl InnerProposal {
    /// Canonical bytes: what is hashed into the id and what the smesher signs.
    pub fn bytes(&self) -> Result<Vec<u8>, MeshError> {
        Ok(codec::encode(self)?)
    }
}

/// A smesher's signed content proposal plus its vote on mesh history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    inner: InnerProposal,
    /// Recoverable signature over the canonical bytes of `inner`.
    signature: Vec<u8>,
    #[serde(skip)]
    id: Option<ProposalId>,
}

impl Proposal {
    pub fn new(inner: InnerProposal, signature: Vec<u8>) -> Self {
        Self {
            inner,
            signature,
            id: None,
        }
    }

    /// Sign `inner` with `key`, producing an uninitialized proposal.
    pub fn sign(inner: InnerProposal, key: &PrivateKey) -> Result<Self, MeshError> {
        let signature = sign_recoverable(&inner.bytes()?, key);
        Ok(Self::new(inner, signature))
    }

    pub(crate) fn from_parts(inner: InnerProposal, signature: Vec<u8>, id: ProposalId) -> Self {
        Self {
            inner,
            signature,
            id: Some(id),
        }
    }

    /// Derive and cache the proposal id.
    ///
    /// Initializes the embedded ballot first if needed, then checks that the
    /// proposal was signed by the same smesher as its ballot. On failure the
    /// proposal id stays unset.
    pub fn initialize(&mut self) -> Result<(), MeshError> {
        if self.id.is_some() {
            return Err(MeshError::AlreadyInitialized("proposal"));
        }
        if !self.inner.ballot.is_initialized() {
            self.inner.ballot.initialize()?;
        }

        let data = self.inner.bytes()?;
        let signer = recover_public_key(&data, &self.signature).map_err(|source| {
            MeshError::SignatureRecovery {
                object: "proposal",
                source,
            }
        })?;
        let ballot_signer = *self
            .inner
            .ballot
            .smesher_id()
            .ok_or(MeshError::NotInitialized("ballot"))?;
        if signer != ballot_signer {
            return Err(MeshError::SignerMismatch {
                proposal: signer,
                ballot: ballot_signer,
            });
        }

        let id = ProposalId::from(hash20(&data));
        self.id = Some(id);
        tracing::debug!(
            proposal = %id,
            ballot = %self.inner.ballot.id(),
            num_tx = self.inner.tx_ids.len(),
            "proposal initialized"
        );
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.id.is_some()
    }

    /// The proposal id, or [`ProposalId::EMPTY`] before initialization.
    pub fn id(&self) -> ProposalId {
        self.id.unwrap_or(ProposalId::EMPTY)
    }

    /// The smesher, as recovered through the embedded ballot.
    pub fn smesher_id(&self) -> Option<&PublicKey> {
        self.inner.ballot.smesher_id()
    }

    pub fn ballot(&self) -> &Ballot {
        &self.inner.ballot
    }

    pub fn tx_ids(&self) -> &[TransactionId] {
        &self.inner.tx_ids
    }

    pub fn inner(&self) -> &InnerProposal {
        &self.inner
    }

    /// Mutable access to the payload, refused once the id is fixed.
    pub fn inner_mut(&mut self) -> Result<&mut InnerProposal, MeshError> {
        if self.id.is_some() {
            return Err(MeshError::AlreadyInitialized("proposal"));
        }
        Ok(&mut self.inner)
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    pub fn set_signature(&mut self, signature: Vec<u8>) -> Result<(), MeshError> {
        if self.id.is_some() {
            return Err(MeshError::AlreadyInitialized("proposal"));
        }
        self.signature = signature;
        Ok(())
    }

    pub fn bytes(&self) -> Result<Vec<u8>, MeshError> {
        self.inner.bytes()
    }

    pub fn layer_index(&self) -> LayerId {
        self.inner.ballot.layer_index()
    }
}

/// The ids of `proposals`, in order.
pub fn to_proposal_ids(proposals: &[Proposal]) -> Vec<ProposalId> {
    proposals.iter().map(Proposal::id).collect()
}

/// Reinterpret proposal ids as block ids (a block built from a single
/// proposal shares its id).
pub fn proposal_ids_to_block_ids(ids: &[ProposalId]) -> Vec<BlockId> {
    ids.iter().map(|id| BlockId::from(*id.as_hash())).collect()
}

/// Sort proposal ids in place into lexicographic order.
pub fn sort_proposal_ids(ids: &mut [ProposalId]) {
    sort_ids(ids);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ballot::{BallotId, InnerBallot};
    use crate::epoch::EpochData;
    use crate::votes::Votes;
    use meshvote_crypto::{keypair_from_seed, sign_recoverable};
    use meshvote_types::{AtxId, Beacon, KeyPair};

    fn signed_ballot(kp: &KeyPair, layer: u32) -> Ballot {
        let inner = InnerBallot {
            atx_id: AtxId::new([1; 32]),
            votes: Votes::new(BallotId::new([2; 20])),
            epoch_data: Some(EpochData::new(vec![AtxId::new([1; 32])], Beacon::new([9; 4]))),
            layer_index: LayerId::new(layer),
            ..InnerBallot::default()
        };
        Ballot::sign(inner, &kp.private).unwrap()
    }

    fn tx(n: u8) -> TransactionId {
        TransactionId::new([n; 32])
    }

    fn signed_proposal(ballot_key: &KeyPair, proposal_key: &KeyPair) -> Proposal {
        let inner = InnerProposal {
            ballot: signed_ballot(ballot_key, 5),
            tx_ids: vec![tx(1), tx(2)],
        };
        Proposal::sign(inner, &proposal_key.private).unwrap()
    }

    #[test]
    fn uninitialized_proposal_has_empty_id() {
        let kp = keypair_from_seed(&[1; 32]);
        let p = signed_proposal(&kp, &kp);
        assert_eq!(p.id(), ProposalId::EMPTY);
        assert!(p.smesher_id().is_none());
    }

    #[test]
    fn initialize_also_initializes_ballot() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.initialize().unwrap();

        assert!(p.ballot().is_initialized());
        assert_ne!(p.id(), ProposalId::EMPTY);
        assert_eq!(p.id(), ProposalId::from(hash20(&p.inner().bytes().unwrap())));
        assert_eq!(p.smesher_id(), Some(&kp.public));
    }

    #[test]
    fn already_initialized_ballot_is_accepted() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut ballot = signed_ballot(&kp, 5);
        ballot.initialize().unwrap();
        let inner = InnerProposal {
            ballot,
            tx_ids: vec![tx(1)],
        };
        let mut p = Proposal::sign(inner, &kp.private).unwrap();
        assert!(p.initialize().is_ok());
    }

    #[test]
    fn proposal_and_ballot_ids_differ() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.initialize().unwrap();
        assert_ne!(p.id().as_bytes(), p.ballot().id().as_bytes());
    }

    #[test]
    fn second_initialize_fails() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.initialize().unwrap();
        let id = p.id();
        assert!(matches!(
            p.initialize(),
            Err(MeshError::AlreadyInitialized("proposal"))
        ));
        assert_eq!(p.id(), id);
    }

    #[test]
    fn different_signer_is_rejected() {
        let k1 = keypair_from_seed(&[1; 32]);
        let k2 = keypair_from_seed(&[2; 32]);
        let mut p = signed_proposal(&k1, &k2);

        match p.initialize() {
            Err(MeshError::SignerMismatch { proposal, ballot }) => {
                assert_eq!(proposal, k2.public);
                assert_eq!(ballot, k1.public);
            }
            other => panic!("expected signer mismatch, got {other:?}"),
        }
        assert_eq!(p.id(), ProposalId::EMPTY);
    }

    #[test]
    fn ballot_errors_propagate() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        let unsigned = Ballot::new(signed_ballot(&kp, 5).inner().clone(), vec![0; 3]);
        p.inner_mut().unwrap().ballot = unsigned;
        assert!(matches!(
            p.initialize(),
            Err(MeshError::SignatureRecovery { object: "ballot", .. })
        ));
        assert!(!p.is_initialized());
    }

    #[test]
    fn malformed_proposal_signature() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.set_signature(sign_recoverable(b"something else", &kp.private))
            .unwrap();
        assert!(matches!(
            p.initialize(),
            Err(MeshError::SignatureRecovery { object: "proposal", .. })
        ));
    }

    #[test]
    fn tx_list_is_covered_by_signature() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.inner_mut().unwrap().tx_ids.push(tx(3));
        assert!(p.initialize().is_err());
    }

    #[test]
    fn sort_and_convert_ids() {
        let mut ids = vec![
            ProposalId::new([3; 20]),
            ProposalId::new([1; 20]),
            ProposalId::new([2; 20]),
        ];
        sort_proposal_ids(&mut ids);
        assert_eq!(
            ids,
            vec![
                ProposalId::new([1; 20]),
                ProposalId::new([2; 20]),
                ProposalId::new([3; 20]),
            ]
        );

        let blocks = proposal_ids_to_block_ids(&ids);
        assert_eq!(blocks[0], BlockId::new([1; 20]));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn to_proposal_ids_keeps_order() {
        let kp = keypair_from_seed(&[1; 32]);
        let mut p = signed_proposal(&kp, &kp);
        p.initialize().unwrap();
        let q = signed_proposal(&kp, &kp);
        assert_eq!(to_proposal_ids(&[p.clone(), q]), vec![p.id(), ProposalId::EMPTY]);
    }
}
