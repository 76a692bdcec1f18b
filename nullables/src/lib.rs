//! Nullable infrastructure for deterministic testing.
//!
//! Storage is abstracted behind the `meshvote-store` traits. This crate
//! provides a test-friendly implementation that keeps everything in memory,
//! never touches the filesystem, and still round-trips every record through
//! the canonical codec so encoding bugs surface in tests.

pub mod store;

pub use store::NullStore;
