//! # Promptvault
//!
//! A personal catalog for reusable AI prompts.
//!
//! Promptvault stores named, tagged, categorized pieces of text in a single
//! JSON document and exposes them through a small CLI: save a prompt once,
//! then retrieve it by name or short id whenever you need it again.
//!
//! ## Design
//!
//! - Whole-document persistence: every operation is a full load, an
//!   in-memory mutation, and an atomic rewrite of the vault file
//! - Names are case-insensitively unique and are the primary lookup key;
//!   the short hex id is an alternate key
//! - Single-user, single-machine; no locking between concurrent processes
//!
//! ## Example
//!
//! ```rust,ignore
//! use promptvault::{NewPrompt, PromptStore};
//!
//! let store = PromptStore::open_default()?;
//! store.add(NewPrompt::new("code-review", "Review this diff for bugs."))?;
//! let prompt = store.retrieve_for_use("code-review")?;
//! println!("{}", prompt.content);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use io::{ExportResult, ImportOptions, ImportResult, export_to_file, import_from_file};
pub use models::{Prompt, PromptId, Vault, VaultConfig, generate_id};
pub use services::{CategoryCount, NewPrompt, PromptFilter, PromptPatch, PromptStore, VaultStats};
pub use storage::VaultStorage;

/// Error type for promptvault operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `NotFound` | A lookup key matches no record |
/// | `DuplicateName` | Creating or renaming to an existing name |
/// | `StorageCorrupt` | The vault or config document cannot be read or parsed |
/// | `StorageWriteFailed` | Writing a document to disk fails |
/// | `ImportFormatInvalid` | An import source is malformed or wrongly shaped |
/// | `MissingRequiredInput` | A required value (name, content) was not supplied |
#[derive(Debug, ThisError)]
pub enum Error {
    /// No record matched the given name or id.
    #[error("prompt '{0}' not found")]
    NotFound(String),

    /// A record with this name already exists (names are compared
    /// case-insensitively).
    #[error("prompt '{0}' already exists")]
    DuplicateName(String),

    /// A persisted document could not be read or parsed.
    ///
    /// This is propagated rather than silently replaced with an empty
    /// collection, so a damaged vault never causes data loss on the next
    /// save.
    #[error("storage corrupt at {path}: {cause}")]
    StorageCorrupt {
        /// Path of the unreadable document.
        path: String,
        /// The underlying cause.
        cause: String,
    },

    /// A document could not be written to disk.
    ///
    /// The in-memory change is not considered durable until the write
    /// succeeds.
    #[error("failed to write {path}: {cause}")]
    StorageWriteFailed {
        /// Path of the document that failed to write.
        path: String,
        /// The underlying cause.
        cause: String,
    },

    /// An import source was malformed or wrongly shaped.
    #[error("invalid import file: {0}")]
    ImportFormatInvalid(String),

    /// A required input was missing or empty.
    #[error("missing required input: {0}")]
    MissingRequiredInput(String),
}

impl Error {
    /// Returns the process exit code for this error.
    ///
    /// The convention is deterministic across all commands: `1` for
    /// not-found, validation, and duplicate errors; `2` for storage I/O
    /// failures.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::StorageCorrupt { .. } | Self::StorageWriteFailed { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for promptvault operations.
pub type Result<T> = std::result::Result<T, Error>;
