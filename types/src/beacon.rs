//! Per-epoch random beacon value.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BEACON_LEN: usize = 4;

/// The beacon a smesher recorded for an epoch, used to derive eligibility.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beacon([u8; BEACON_LEN]);

impl Beacon {
    pub const EMPTY: Self = Self([0u8; BEACON_LEN]);

    pub fn new(bytes: [u8; BEACON_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BEACON_LEN] {
        &self.0
    }

    pub fn short_string(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Beacon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beacon({})", self.short_string())
    }
}

impl fmt::Display for Beacon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_string())
    }
}
