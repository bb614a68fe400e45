//! Record store operations.
//!
//! [`PromptStore`] is the single entry point for catalog mutations and
//! lookups. Every operation is a self-contained load-mutate-save cycle over
//! the whole vault document; there is no cache between calls.

mod stats;
mod store;

pub use stats::{CategoryCount, VaultStats};
pub use store::{NewPrompt, PromptFilter, PromptPatch, PromptStore};
