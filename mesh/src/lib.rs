//! Ballot and proposal model for the mesh.
//!
//! A **ballot** is a smesher's signed vote on mesh history, expressed as a
//! differential against a previously cast base ballot. A **proposal** is a
//! smesher's signed content proposal for a layer and embeds a ballot.
//!
//! Both go through the same two-phase lifecycle:
//!
//! 1. An external builder populates the payload and attaches a signature.
//! 2. [`Ballot::initialize`] / [`Proposal::initialize`] derive and cache the
//!    content identifier and the recovered signer. This happens exactly once.
//!
//! ## Module overview
//!
//! - [`votes`]: vote differential (support / against / abstain).
//! - [`epoch`]: epoch anchor data and eligibility proofs.
//! - [`ballot`]: `Ballot`, `InnerBallot`, `BallotId`.
//! - [`proposal`]: `Proposal`, `InnerProposal`, `ProposalId`.
//! - [`db`]: compact projections persisted by stores.
//! - [`spans`]: `tracing` spans carrying ballot/proposal fields.
//! - [`error`]: mesh error types.

pub mod ballot;
pub mod db;
pub mod epoch;
pub mod error;
pub mod proposal;
pub mod spans;
pub mod votes;

pub use ballot::{ballot_ids_to_hashes, to_ballot_ids, Ballot, BallotId, InnerBallot};
pub use db::{DbBallot, DbProposal};
pub use epoch::{EpochData, VotingEligibilityProof};
pub use error::MeshError;
pub use proposal::{
    proposal_ids_to_block_ids, sort_proposal_ids, to_proposal_ids, InnerProposal, Proposal,
    ProposalId,
};
pub use spans::{ballot_span, proposal_span};
pub use votes::{Opinion, Votes};
