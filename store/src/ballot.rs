//! Ballot storage trait.

use crate::StoreError;
use meshvote_mesh::{Ballot, BallotId, DbBallot};
use meshvote_types::LayerId;

/// Trait for ballot storage operations.
///
/// Ballots are keyed by id and indexed by layer. A ballot is immutable once
/// stored: writing an id twice is a [`StoreError::Duplicate`].
pub trait BallotStore {
    fn put_ballot(&self, ballot: &DbBallot) -> Result<(), StoreError>;

    /// Retrieve a ballot projection, or [`StoreError::NotFound`].
    fn get_ballot(&self, id: &BallotId) -> Result<DbBallot, StoreError>;

    fn has_ballot(&self, id: &BallotId) -> Result<bool, StoreError>;

    /// Ids of all ballots stored for `layer`, in lexicographic order.
    fn layer_ballots(&self, layer: LayerId) -> Result<Vec<BallotId>, StoreError>;
}

/// Store an initialized ballot.
pub fn save_ballot<S: BallotStore + ?Sized>(store: &S, ballot: &Ballot) -> Result<(), StoreError> {
    store.put_ballot(&ballot.to_db()?)
}

/// Load a ballot and rebuild it as an initialized [`Ballot`].
pub fn load_ballot<S: BallotStore + ?Sized>(store: &S, id: &BallotId) -> Result<Ballot, StoreError> {
    Ok(store.get_ballot(id)?.to_ballot()?)
}
