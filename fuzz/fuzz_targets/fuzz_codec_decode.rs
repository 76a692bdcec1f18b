#![no_main]

use libfuzzer_sys::fuzz_target;

use meshvote_mesh::{Ballot, DbBallot, DbProposal, Proposal};
use meshvote_types::codec;

// Decoding and initializing wire objects must never panic on malformed input.
fuzz_target!(|data: &[u8]| {
    if let Ok(mut ballot) = codec::decode::<Ballot>(data) {
        let _ = ballot.initialize();
    }

    if let Ok(mut proposal) = codec::decode::<Proposal>(data) {
        let _ = proposal.initialize();
    }

    if let Ok(stored) = codec::decode::<DbBallot>(data) {
        let _ = stored.to_ballot();
    }

    let _ = codec::decode::<DbProposal>(data);
});
