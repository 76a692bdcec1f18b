//! Hash-based identifiers.
//!
//! Every identifier is a distinct newtype over [`Hash20`] or [`Hash32`]: a
//! [`BlockId`] cannot be passed where an [`AtxId`] is expected. The all-zero
//! value is the canonical empty identifier.

use crate::hash::{Hash20, Hash32};

/// Define an identifier newtype over one of the hash types.
///
/// The generated type orders lexicographically over its raw bytes, displays as
/// a short hex prefix, and encodes exactly like the wrapped hash.
#[macro_export]
macro_rules! hash_id {
    ($(#[$meta:meta])* $name:ident, $hash:ty, $len:literal) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name($hash);

        impl $name {
            /// The canonical empty identifier (all zero bytes).
            pub const EMPTY: Self = Self(<$hash>::ZERO);

            pub fn new(bytes: [u8; $len]) -> Self {
                Self(<$hash>::new(bytes))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                self.0.as_bytes()
            }

            pub fn as_hash(&self) -> &$hash {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_zero()
            }

            pub fn short_string(&self) -> String {
                self.0.short_string()
            }
        }

        impl From<$hash> for $name {
            fn from(hash: $hash) -> Self {
                Self(hash)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({}\u{2026})", stringify!($name), self.0.short_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0.short_string())
            }
        }
    };
}

hash_id!(
    /// Identifies a smesher's activation (ATX) for an epoch.
    AtxId,
    Hash32,
    32
);

hash_id!(
    /// Identifies a block in the mesh. Vote differentials are lists of these.
    BlockId,
    Hash20,
    20
);

hash_id!(
    /// Identifies a transaction referenced by a proposal.
    TransactionId,
    Hash32,
    32
);

impl BlockId {
    /// The block identifier widened to 32 bytes, right-padded with zeros.
    pub fn as_hash32(&self) -> Hash32 {
        self.0.to_hash32()
    }
}
