//! Persistence layer.
//!
//! Maps the in-memory vault and configuration to durable storage as
//! whole-document snapshots.

mod vault;

pub use vault::{InitOutcome, VaultStorage};
