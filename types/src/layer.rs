//! Layers and epochs: the mesh's units of time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A layer index, analogous to a block height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(u32);

/// An epoch: a fixed run of `layers_per_epoch` consecutive layers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EpochId(u32);

impl LayerId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The epoch containing this layer.
    ///
    /// A zero `layers_per_epoch` is rejected by `MeshParams::validate`; here it
    /// maps every layer to epoch 0.
    pub fn epoch(&self, layers_per_epoch: u32) -> EpochId {
        EpochId(self.0.checked_div(layers_per_epoch).unwrap_or(0))
    }
}

impl EpochId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EpochId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
