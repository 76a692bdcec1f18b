//! Nullable store: thread-safe in-memory ballot and proposal storage for testing.

use meshvote_mesh::{BallotId, DbBallot, DbProposal, ProposalId};
use meshvote_store::{BallotStore, ProposalStore, StoreError};
use meshvote_types::{codec, sort_ids, LayerId};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory ballot + proposal store for testing.
///
/// Records are kept as canonical bytes, exactly as a persistent backend
/// would hold them.
pub struct NullStore {
    ballots: Mutex<HashMap<BallotId, Vec<u8>>>,
    proposals: Mutex<HashMap<ProposalId, Vec<u8>>>,
    ballot_layers: Mutex<HashMap<LayerId, Vec<BallotId>>>,
    proposal_layers: Mutex<HashMap<LayerId, Vec<ProposalId>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            ballots: Mutex::new(HashMap::new()),
            proposals: Mutex::new(HashMap::new()),
            ballot_layers: Mutex::new(HashMap::new()),
            proposal_layers: Mutex::new(HashMap::new()),
        }
    }

    pub fn ballot_count(&self) -> usize {
        self.ballots.lock().unwrap().len()
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.lock().unwrap().len()
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BallotStore for NullStore {
    fn put_ballot(&self, ballot: &DbBallot) -> Result<(), StoreError> {
        let bytes = codec::encode(ballot)?;
        let mut ballots = self.ballots.lock().unwrap();
        if ballots.contains_key(&ballot.id) {
            return Err(StoreError::Duplicate(format!("ballot {}", ballot.id)));
        }
        ballots.insert(ballot.id, bytes);
        self.ballot_layers
            .lock()
            .unwrap()
            .entry(ballot.inner.layer_index)
            .or_default()
            .push(ballot.id);
        Ok(())
    }

    fn get_ballot(&self, id: &BallotId) -> Result<DbBallot, StoreError> {
        let ballots = self.ballots.lock().unwrap();
        let bytes = ballots
            .get(id)
            .ok_or_else(|| StoreError::NotFound(format!("ballot {id}")))?;
        Ok(codec::decode(bytes)?)
    }

    fn has_ballot(&self, id: &BallotId) -> Result<bool, StoreError> {
        Ok(self.ballots.lock().unwrap().contains_key(id))
    }

    fn layer_ballots(&self, layer: LayerId) -> Result<Vec<BallotId>, StoreError> {
        let mut ids = self
            .ballot_layers
            .lock()
            .unwrap()
            .get(&layer)
            .cloned()
            .unwrap_or_default();
        sort_ids(&mut ids);
        Ok(ids)
    }
}

impl ProposalStore for NullStore {
    fn put_proposal(&self, proposal: &DbProposal) -> Result<(), StoreError> {
        let bytes = codec::encode(proposal)?;
        let mut proposals = self.proposals.lock().unwrap();
        if proposals.contains_key(&proposal.id) {
            return Err(StoreError::Duplicate(format!("proposal {}", proposal.id)));
        }
        proposals.insert(proposal.id, bytes);
        self.proposal_layers
            .lock()
            .unwrap()
            .entry(proposal.layer_index)
            .or_default()
            .push(proposal.id);
        Ok(())
    }

    fn get_proposal(&self, id: &ProposalId) -> Result<DbProposal, StoreError> {
        let proposals = self.proposals.lock().unwrap();
        let bytes = proposals
            .get(id)
            .ok_or_else(|| StoreError::NotFound(format!("proposal {id}")))?;
        Ok(codec::decode(bytes)?)
    }

    fn has_proposal(&self, id: &ProposalId) -> Result<bool, StoreError> {
        Ok(self.proposals.lock().unwrap().contains_key(id))
    }

    fn layer_proposals(&self, layer: LayerId) -> Result<Vec<ProposalId>, StoreError> {
        let mut ids = self
            .proposal_layers
            .lock()
            .unwrap()
            .get(&layer)
            .cloned()
            .unwrap_or_default();
        sort_ids(&mut ids);
        Ok(ids)
    }
}
