//! Vote differentials.
//!
//! A smesher votes in three steps:
//! - select a ballot from the past as its base ballot;
//! - compute the difference between its own opinion on history and the base
//!   ballot's opinion;
//! - encode that difference in three lists.
//!
//! `support` holds blocks the smesher supports that the base ballot did not
//! (including supported blocks in layers newer than the base ballot).
//! `against` holds blocks the base ballot supported that the smesher now
//! opposes. `abstain` holds blocks the base ballot had an opinion on that the
//! smesher retracts to neutral.
//!
//! A base ballot is implicitly neutral on every layer after its own, so there
//! is never a need to list abstentions for newer layers.
//!
//! ```text
//! layer | ballot
//! ------+------------------------------------------------------------
//!   N   | A (genesis)
//!  N+1  | B  base:A  support:[A]  against:[]  abstain:[]
//!  N+2  | C  base:B  support:[B]  against:[]  abstain:[]
//!       | (hare has not terminated for N+2)
//!  N+3  | D  base:B  support:[B]  against:[]  abstain:[C]
//!       | (hare succeeded for N+2, failed for N+3)
//!  N+4  | E  base:C  support:[C]  against:[]  abstain:[]
//! ```

use std::collections::HashSet;

use meshvote_types::{is_sorted_unique, sort_ids, BlockId};
use serde::{Deserialize, Serialize};

use crate::ballot::BallotId;
use crate::MeshError;

/// A resolved opinion on a single block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opinion {
    Support,
    Against,
    Abstain,
}

/// A ballot's opinion on mesh history relative to its base ballot.
///
/// Field order is part of the canonical encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    /// The ballot this differential is relative to.
    pub base: BallotId,
    pub against: Vec<BlockId>,
    pub support: Vec<BlockId>,
    pub abstain: Vec<BlockId>,
}

impl Votes {
    pub fn new(base: BallotId) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// The opinion this differential states explicitly for `block`, if any.
    pub fn explicit(&self, block: &BlockId) -> Option<Opinion> {
        if self.support.contains(block) {
            Some(Opinion::Support)
        } else if self.against.contains(block) {
            Some(Opinion::Against)
        } else if self.abstain.contains(block) {
            Some(Opinion::Abstain)
        } else {
            None
        }
    }

    /// The full opinion on `block` given the base ballot's opinion.
    ///
    /// An explicit entry wins. Otherwise the base opinion is inherited, and a
    /// block the base ballot never resolved is neutral.
    pub fn resolve(&self, block: &BlockId, base_opinion: Option<Opinion>) -> Opinion {
        self.explicit(block)
            .or(base_opinion)
            .unwrap_or(Opinion::Abstain)
    }

    /// Sort each list canonically and drop duplicates within a list.
    pub fn normalize(&mut self) {
        for list in [&mut self.against, &mut self.support, &mut self.abstain] {
            sort_ids(list);
            list.dedup();
        }
    }

    /// Whether every list is already in canonical order without duplicates.
    pub fn is_normalized(&self) -> bool {
        is_sorted_unique(&self.against)
            && is_sorted_unique(&self.support)
            && is_sorted_unique(&self.abstain)
    }

    /// Reject a block listed in more than one set.
    pub fn validate(&self) -> Result<(), MeshError> {
        let mut seen: HashSet<&BlockId> = HashSet::with_capacity(self.len());
        for list in [&self.against, &self.support, &self.abstain] {
            // only earlier sets are in `seen`, so repeats inside one list pass
            if let Some(block) = list.iter().find(|b| seen.contains(b)) {
                return Err(MeshError::ConflictingVotes { block: *block });
            }
            seen.extend(list.iter());
        }
        Ok(())
    }

    /// Total number of explicit entries.
    pub fn len(&self) -> usize {
        self.against.len() + self.support.len() + self.abstain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(n: u8) -> BlockId {
        BlockId::new([n; 20])
    }

    fn votes() -> Votes {
        Votes {
            base: BallotId::new([9; 20]),
            against: vec![block(2)],
            support: vec![block(1)],
            abstain: vec![block(3)],
        }
    }

    #[test]
    fn explicit_opinions() {
        let v = votes();
        assert_eq!(v.explicit(&block(1)), Some(Opinion::Support));
        assert_eq!(v.explicit(&block(2)), Some(Opinion::Against));
        assert_eq!(v.explicit(&block(3)), Some(Opinion::Abstain));
        assert_eq!(v.explicit(&block(4)), None);
    }

    #[test]
    fn explicit_entry_overrides_base() {
        let v = votes();
        assert_eq!(v.resolve(&block(2), Some(Opinion::Support)), Opinion::Against);
        assert_eq!(v.resolve(&block(3), Some(Opinion::Against)), Opinion::Abstain);
        assert_eq!(v.resolve(&block(1), None), Opinion::Support);
    }

    #[test]
    fn unlisted_block_inherits_base_or_is_neutral() {
        let v = votes();
        assert_eq!(v.resolve(&block(7), Some(Opinion::Support)), Opinion::Support);
        assert_eq!(v.resolve(&block(7), Some(Opinion::Against)), Opinion::Against);
        assert_eq!(v.resolve(&block(7), None), Opinion::Abstain);
    }

    #[test]
    fn normalize_sorts_and_dedups() {
        let mut v = Votes::new(BallotId::EMPTY);
        v.support = vec![block(5), block(1), block(5), block(3)];
        assert!(!v.is_normalized());
        v.normalize();
        assert_eq!(v.support, vec![block(1), block(3), block(5)]);
        assert!(v.is_normalized());
    }

    #[test]
    fn disjoint_sets_validate() {
        assert!(votes().validate().is_ok());
        assert!(Votes::default().validate().is_ok());
    }

    #[test]
    fn duplicate_within_one_set_is_not_a_conflict() {
        let mut v = votes();
        v.support.push(block(1));
        assert!(v.validate().is_ok());
    }

    #[test]
    fn overlapping_sets_are_rejected() {
        let mut v = votes();
        v.abstain.push(block(1));
        let err = v.validate().unwrap_err();
        assert!(matches!(err, MeshError::ConflictingVotes { block: b } if b == block(1)));
    }

    #[test]
    fn len_counts_all_sets() {
        assert_eq!(votes().len(), 3);
        assert!(Votes::default().is_empty());
    }
}
