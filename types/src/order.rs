//! Canonical ordering of identifiers.
//!
//! Identifier lists that feed into hashing or signing must serialize the same
//! way on every honest node, so they are sorted by raw bytes before encoding.

use std::cmp::Ordering;

/// Lexicographic comparison over raw identifier bytes.
pub fn compare<T: AsRef<[u8]>>(a: &T, b: &T) -> Ordering {
    a.as_ref().cmp(b.as_ref())
}

/// Sort identifiers in place into canonical (lexicographic) order.
pub fn sort_ids<T: AsRef<[u8]>>(ids: &mut [T]) {
    ids.sort_unstable_by(|a, b| compare(a, b));
}

/// Whether `ids` is strictly increasing, i.e. sorted with no duplicates.
pub fn is_sorted_unique<T: AsRef<[u8]>>(ids: &[T]) -> bool {
    ids.windows(2).all(|w| compare(&w[0], &w[1]) == Ordering::Less)
}
