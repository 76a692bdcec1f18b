//! Compact projections of ballots and proposals, as stored by a database.
//!
//! Projections carry the already-derived identifier next to the payload so a
//! load never re-hashes. A stored ballot may also carry its smesher, which
//! skips signature recovery on load; when absent the smesher is recovered
//! from the stored signature. A stored proposal references its ballot by id;
//! the ballot lives in its own table and is re-attached on reconstruction.

use meshvote_crypto::recover_public_key;
use meshvote_types::{LayerId, PublicKey, TransactionId};
use serde::{Deserialize, Serialize};

use crate::ballot::{Ballot, BallotId, InnerBallot};
use crate::proposal::{InnerProposal, Proposal, ProposalId};
use crate::MeshError;

/// A ballot as it is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbBallot {
    pub inner: InnerBallot,
    // Redundant with the storage key, but survives a change of key scheme.
    pub id: BallotId,
    pub signature: Vec<u8>,
    /// Recovered when the ballot was received; `None` forces recovery on load.
    pub smesher_id: Option<PublicKey>,
}

/// A proposal as it is stored. Skips signature checks on load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbProposal {
    pub id: ProposalId,
    pub ballot_id: BallotId,
    pub layer_index: LayerId,
    pub tx_ids: Vec<TransactionId>,
    pub signature: Vec<u8>,
}

impl Ballot {
    /// Project an initialized ballot for storage.
    pub fn to_db(&self) -> Result<DbBallot, MeshError> {
        let smesher = self
            .smesher_id()
            .copied()
            .ok_or(MeshError::NotInitialized("ballot"))?;
        Ok(DbBallot {
            inner: self.inner().clone(),
            id: self.id(),
            signature: self.signature().to_vec(),
            smesher_id: Some(smesher),
        })
    }
}

impl DbBallot {
    /// Rebuild the in-memory ballot, trusting the stored id.
    pub fn to_ballot(&self) -> Result<Ballot, MeshError> {
        let smesher = match self.smesher_id {
            Some(smesher) => smesher,
            None => recover_public_key(&self.inner.bytes()?, &self.signature).map_err(
                |source| MeshError::SignatureRecovery {
                    object: "stored ballot",
                    source,
                },
            )?,
        };
        Ok(Ballot::from_parts(
            self.inner.clone(),
            self.signature.clone(),
            self.id,
            smesher,
        ))
    }
}

impl Proposal {
    /// Project an initialized proposal for storage. The ballot is stored
    /// separately via [`Ballot::to_db`].
    pub fn to_db(&self) -> Result<DbProposal, MeshError> {
        if !self.is_initialized() {
            return Err(MeshError::NotInitialized("proposal"));
        }
        Ok(DbProposal {
            id: self.id(),
            ballot_id: self.ballot().id(),
            layer_index: self.layer_index(),
            tx_ids: self.tx_ids().to_vec(),
            signature: self.signature().to_vec(),
        })
    }
}

impl DbProposal {
    /// Rebuild the in-memory proposal around a separately loaded ballot.
    ///
    /// The ballot must match the stored ballot id and layer.
    pub fn to_proposal(&self, ballot: Ballot) -> Result<Proposal, MeshError> {
        if ballot.id() != self.ballot_id {
            return Err(MeshError::BallotMismatch {
                expected: self.ballot_id,
                actual: ballot.id(),
            });
        }
        if ballot.layer_index() != self.layer_index {
            return Err(MeshError::LayerMismatch {
                expected: self.layer_index,
                actual: ballot.layer_index(),
            });
        }
        let inner = InnerProposal {
            ballot,
            tx_ids: self.tx_ids.clone(),
        };
        Ok(Proposal::from_parts(inner, self.signature.clone(), self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::EpochData;
    use crate::votes::Votes;
    use meshvote_crypto::keypair_from_seed;
    use meshvote_types::{AtxId, Beacon, BlockId, KeyPair};

    fn initialized_ballot(kp: &KeyPair, layer: u32) -> Ballot {
        let inner = InnerBallot {
            atx_id: AtxId::new([4; 32]),
            votes: Votes {
                base: BallotId::new([1; 20]),
                support: vec![BlockId::new([2; 20])],
                ..Votes::default()
            },
            epoch_data: Some(EpochData::new(vec![AtxId::new([4; 32])], Beacon::new([7; 4]))),
            layer_index: LayerId::new(layer),
            ..InnerBallot::default()
        };
        let mut ballot = Ballot::sign(inner, &kp.private).unwrap();
        ballot.initialize().unwrap();
        ballot
    }

    fn initialized_proposal(kp: &KeyPair) -> Proposal {
        let inner = InnerProposal {
            ballot: initialized_ballot(kp, 12),
            tx_ids: vec![TransactionId::new([5; 32])],
        };
        let mut proposal = Proposal::sign(inner, &kp.private).unwrap();
        proposal.initialize().unwrap();
        proposal
    }

    #[test]
    fn ballot_projection_restores_ballot() {
        let kp = keypair_from_seed(&[3; 32]);
        let ballot = initialized_ballot(&kp, 12);
        let restored = ballot.to_db().unwrap().to_ballot().unwrap();
        assert_eq!(restored, ballot);
        assert!(restored.is_initialized());
    }

    #[test]
    fn missing_smesher_is_recovered_from_signature() {
        let kp = keypair_from_seed(&[3; 32]);
        let ballot = initialized_ballot(&kp, 12);
        let mut db = ballot.to_db().unwrap();
        db.smesher_id = None;
        let restored = db.to_ballot().unwrap();
        assert_eq!(restored.smesher_id(), Some(&kp.public));
        assert_eq!(restored, ballot);
    }

    #[test]
    fn missing_smesher_with_bad_signature_fails() {
        let kp = keypair_from_seed(&[3; 32]);
        let mut db = initialized_ballot(&kp, 12).to_db().unwrap();
        db.smesher_id = None;
        db.signature.truncate(10);
        assert!(matches!(
            db.to_ballot(),
            Err(MeshError::SignatureRecovery { .. })
        ));
    }

    #[test]
    fn stored_id_is_trusted() {
        let kp = keypair_from_seed(&[3; 32]);
        let mut db = initialized_ballot(&kp, 12).to_db().unwrap();
        db.id = BallotId::new([0xAA; 20]);
        assert_eq!(db.to_ballot().unwrap().id(), BallotId::new([0xAA; 20]));
    }

    #[test]
    fn uninitialized_objects_cannot_be_projected() {
        let kp = keypair_from_seed(&[3; 32]);
        let ballot = Ballot::sign(InnerBallot::default(), &kp.private).unwrap();
        assert!(matches!(
            ballot.to_db(),
            Err(MeshError::NotInitialized("ballot"))
        ));

        let proposal = Proposal::sign(
            InnerProposal {
                ballot,
                tx_ids: vec![],
            },
            &kp.private,
        )
        .unwrap();
        assert!(matches!(
            proposal.to_db(),
            Err(MeshError::NotInitialized("proposal"))
        ));
    }

    #[test]
    fn proposal_projection_restores_proposal() {
        let kp = keypair_from_seed(&[3; 32]);
        let proposal = initialized_proposal(&kp);
        let db = proposal.to_db().unwrap();
        assert_eq!(db.ballot_id, proposal.ballot().id());
        assert_eq!(db.layer_index, LayerId::new(12));

        let ballot = proposal.ballot().to_db().unwrap().to_ballot().unwrap();
        let restored = db.to_proposal(ballot).unwrap();
        assert_eq!(restored, proposal);
        assert_eq!(restored.smesher_id(), Some(&kp.public));
    }

    #[test]
    fn proposal_rejects_foreign_ballot() {
        let kp = keypair_from_seed(&[3; 32]);
        let db = initialized_proposal(&kp).to_db().unwrap();
        let other = initialized_ballot(&kp, 13);
        assert!(matches!(
            db.to_proposal(other),
            Err(MeshError::BallotMismatch { .. })
        ));
    }

    #[test]
    fn proposal_rejects_ballot_from_another_layer() {
        let kp = keypair_from_seed(&[3; 32]);
        let proposal = initialized_proposal(&kp);
        let mut db = proposal.to_db().unwrap();
        db.layer_index = LayerId::new(99);

        let ballot = proposal.ballot().to_db().unwrap().to_ballot().unwrap();
        match db.to_proposal(ballot) {
            Err(MeshError::LayerMismatch { expected, actual }) => {
                assert_eq!(expected, LayerId::new(99));
                assert_eq!(actual, LayerId::new(12));
            }
            other => panic!("expected layer mismatch, got {other:?}"),
        }
    }
}
