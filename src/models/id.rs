//! Deterministic short-id generation.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Length of a generated id in hex characters.
pub const ID_LENGTH: usize = 8;

/// Generates a short hex id from prompt content and a creation timestamp.
///
/// The id is a SHA-256 digest of the content concatenated with the RFC 3339
/// rendering of the timestamp, truncated to [`ID_LENGTH`] hex characters.
/// Pure function: identical inputs always yield identical output. The id is
/// a human-referenceable handle, not a security token; collisions are
/// accepted as negligible at catalog scale and are never re-checked.
#[must_use]
pub fn generate_id(content: &str, timestamp: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.update(timestamp.to_rfc3339().as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..ID_LENGTH / 2])
}
