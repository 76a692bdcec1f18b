//! Epoch-scoped ballot data.

use meshvote_types::{sort_ids, AtxId, Beacon};
use serde::{Deserialize, Serialize};

/// Information that cannot change mid-epoch.
///
/// Carried only by the first ballot a smesher casts in an epoch (its
/// reference ballot). Every later ballot in the epoch points at that ballot
/// through `ref_ballot` instead of repeating the active set and beacon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochData {
    /// From the smesher's view, the ATXs eligible to vote and propose in this epoch.
    pub active_set: Vec<AtxId>,
    /// The beacon value the smesher recorded for this epoch.
    pub beacon: Beacon,
}

impl EpochData {
    pub fn new(mut active_set: Vec<AtxId>, beacon: Beacon) -> Self {
        sort_ids(&mut active_set);
        active_set.dedup();
        Self { active_set, beacon }
    }

    /// Sort the active set canonically and drop duplicates.
    pub fn normalize(&mut self) {
        sort_ids(&mut self.active_set);
        self.active_set.dedup();
    }
}

/// Proof that a smesher may cast its `j`-th ballot of the epoch.
///
/// Together with the smesher's VRF public key this allows non-interactive
/// eligibility validation for both voting and proposing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingEligibilityProof {
    /// The eligibility counter: `j == 3` proves the smesher's third ballot in the epoch.
    pub j: u32,
    /// VRF signature over epoch-specific data and `j`; the ballot's layer derives from it.
    pub sig: Vec<u8>,
}
