//! Fundamental types for the meshvote ballot and proposal model.
//!
//! This crate defines the primitives shared across every other crate in the
//! workspace: fixed-size hashes and the identifiers built on them, layers and
//! epochs, smesher keys, the canonical codec, and mesh parameters.

pub mod beacon;
pub mod codec;
pub mod error;
pub mod hash;
pub mod ids;
pub mod keys;
pub mod layer;
pub mod order;
pub mod params;

pub use beacon::Beacon;
pub use error::CodecError;
pub use hash::{Hash20, Hash32};
pub use ids::{AtxId, BlockId, TransactionId};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use layer::{EpochId, LayerId};
pub use order::{compare, is_sorted_unique, sort_ids};
pub use params::MeshParams;
