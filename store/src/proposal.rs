//! Proposal storage trait.
//!
//! A stored proposal references its ballot by id; the ballot itself lives in
//! the ballot store, so both traits are needed to save or load a proposal.

use crate::{load_ballot, save_ballot, BallotStore, StoreError};
use meshvote_mesh::{DbProposal, Proposal, ProposalId};
use meshvote_types::LayerId;

/// Trait for proposal storage operations.
pub trait ProposalStore {
    /// Store a proposal projection. Writing an id twice is a
    /// [`StoreError::Duplicate`].
    fn put_proposal(&self, proposal: &DbProposal) -> Result<(), StoreError>;

    fn get_proposal(&self, id: &ProposalId) -> Result<DbProposal, StoreError>;

    fn has_proposal(&self, id: &ProposalId) -> Result<bool, StoreError>;

    /// Ids of all proposals stored for `layer`, in lexicographic order.
    fn layer_proposals(&self, layer: LayerId) -> Result<Vec<ProposalId>, StoreError>;
}

/// Store an initialized proposal together with its ballot.
///
/// The ballot may already be stored, having arrived on its own or with
/// another proposal. Ballot ids are content-addressed, so a duplicate
/// ballot write is the same ballot and counts as stored.
pub fn save_proposal<S>(store: &S, proposal: &Proposal) -> Result<(), StoreError>
where
    S: BallotStore + ProposalStore + ?Sized,
{
    let record = proposal.to_db()?;
    match save_ballot(store, proposal.ballot()) {
        Ok(()) | Err(StoreError::Duplicate(_)) => {}
        Err(e) => return Err(e),
    }
    store.put_proposal(&record)
}

/// Load a proposal, then its ballot, and re-attach them.
pub fn load_proposal<S>(store: &S, id: &ProposalId) -> Result<Proposal, StoreError>
where
    S: BallotStore + ProposalStore + ?Sized,
{
    let record = store.get_proposal(id)?;
    let ballot = load_ballot(store, &record.ballot_id)?;
    Ok(record.to_proposal(ballot)?)
}
