//! Mesh parameters shared by every node.

use serde::{Deserialize, Serialize};

/// Mainnet epoch length in layers.
pub const DEFAULT_LAYERS_PER_EPOCH: u32 = 4032;

/// Parameters needed to interpret ballots and proposals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshParams {
    /// Number of layers in one epoch. Must be non-zero.
    #[serde(default = "default_layers_per_epoch")]
    pub layers_per_epoch: u32,
}

fn default_layers_per_epoch() -> u32 {
    DEFAULT_LAYERS_PER_EPOCH
}

impl MeshParams {
    /// Check internal consistency; returns a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.layers_per_epoch == 0 {
            return Err("layers_per_epoch must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            layers_per_epoch: default_layers_per_epoch(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = MeshParams::default();
        assert_eq!(params.layers_per_epoch, 4032);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_epoch_length_is_invalid() {
        let params = MeshParams { layers_per_epoch: 0 };
        assert!(params.validate().is_err());
    }
}
