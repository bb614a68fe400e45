//! Bulk transfer of prompts.
//!
//! Export writes a filtered snapshot of the vault to a standalone JSON
//! document; import merges such a document (or any compatible record list)
//! back into the vault.

mod export;
mod import;

pub use export::{ExportDocument, ExportResult, export_to_file};
pub use import::{ImportOptions, ImportResult, import_from_file};
