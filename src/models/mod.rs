//! Data models for the prompt vault.
//!
//! Defines the prompt record, the persisted collection and configuration
//! documents, and deterministic short-id generation.

mod id;
mod prompt;

pub use id::{ID_LENGTH, generate_id};
pub use prompt::{
    DEFAULT_CATEGORY, Prompt, PromptId, STARTER_CATEGORIES, VAULT_SCHEMA_VERSION, Vault,
    VaultConfig,
};
