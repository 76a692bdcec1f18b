//! [`tracing::Span`] constructors carrying ballot and proposal fields.
//!
//! Validation pipelines enter these spans around per-object work so every
//! event is tagged with the same field set.

use meshvote_types::{Beacon, MeshParams};
use tracing::{info_span, Span};

use crate::ballot::Ballot;
use crate::proposal::Proposal;

/// Span describing a single ballot.
pub fn ballot_span(ballot: &Ballot, params: &MeshParams) -> Span {
    let inner = ballot.inner();
    let (active_set_size, beacon) = inner
        .epoch_data
        .as_ref()
        .map_or((0, Beacon::EMPTY), |data| (data.active_set.len(), data.beacon));

    info_span!(
        "ballot",
        id = %ballot.id(),
        layer = inner.layer_index.value(),
        epoch = inner.layer_index.epoch(params.layers_per_epoch).value(),
        smesher = %smesher_field(ballot),
        base_ballot = %inner.votes.base,
        supports = inner.votes.support.len(),
        againsts = inner.votes.against.len(),
        abstains = inner.votes.abstain.len(),
        atx = %inner.atx_id,
        eligibility_counter = inner.eligibility_proof.j,
        ref_ballot = %inner.ref_ballot,
        active_set_size,
        beacon = %beacon,
    )
}

/// Span describing a proposal, nested under its ballot's fields.
pub fn proposal_span(proposal: &Proposal, params: &MeshParams) -> Span {
    let parent = ballot_span(proposal.ballot(), params);
    info_span!(
        parent: &parent,
        "proposal",
        proposal_id = %proposal.id(),
        num_tx = proposal.tx_ids().len(),
    )
}

fn smesher_field(ballot: &Ballot) -> String {
    ballot
        .smesher_id()
        .map_or_else(|| "unknown".to_string(), |key| key.short_string())
}
