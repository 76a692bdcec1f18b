//! Abstract storage traits for ballots and proposals.
//!
//! Every storage backend implements these traits over the compact
//! projections from `meshvote-mesh`. The helpers in this crate convert
//! between live objects and projections, so callers never handle
//! [`DbBallot`](meshvote_mesh::DbBallot) or
//! [`DbProposal`](meshvote_mesh::DbProposal) directly.

pub mod ballot;
pub mod error;
pub mod proposal;

pub use ballot::{load_ballot, save_ballot, BallotStore};
pub use error::StoreError;
pub use proposal::{load_proposal, save_proposal, ProposalStore};
