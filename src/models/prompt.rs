//! Prompt record and persisted document types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Schema version written into the vault document.
pub const VAULT_SCHEMA_VERSION: &str = "1.0.0";

/// Category assigned when none is supplied.
pub const DEFAULT_CATEGORY: &str = "general";

/// Categories seeded into a fresh configuration document.
pub const STARTER_CATEGORIES: [&str; 9] = [
    "coding",
    "writing",
    "analysis",
    "creative",
    "debugging",
    "refactoring",
    "documentation",
    "testing",
    "general",
];

/// Short hex identifier for a prompt.
///
/// Assigned once at creation from the content and creation timestamp and
/// never recomputed. Matched exactly (case-sensitive) on lookup, unlike
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    /// Creates a new prompt id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PromptId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PromptId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A stored prompt record.
///
/// The serialized field names `created` and `updated` are part of the
/// export/import contract and must not change; previously exported files
/// round-trip through them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Short hex id, an alternate lookup key.
    pub id: PromptId,
    /// User-chosen name, case-insensitively unique across the vault.
    pub name: String,
    /// The prompt text itself.
    pub content: String,
    /// Free-form category label. Never validated against the configured
    /// category list.
    #[serde(default = "default_category")]
    pub category: String,
    /// Free-text labels, compared case-insensitively for filtering.
    /// Insertion order is preserved for display.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional human-readable description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp. Immutable after creation.
    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,
    /// Last-mutation timestamp. Refreshed on every update.
    #[serde(rename = "updated")]
    pub updated_at: DateTime<Utc>,
    /// Number of times this prompt was retrieved for use.
    #[serde(default)]
    pub uses: u64,
}

impl Prompt {
    /// Returns whether `name` matches this record's name, ignoring case.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Returns whether `key` resolves to this record: a case-insensitive
    /// name match or an exact id match.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        self.name_matches(key) || self.id.as_str() == key
    }

    /// Returns whether this record carries `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }
}

/// The persisted prompt collection.
///
/// Serialized as `{ "prompts": [...], "version": "1.0.0" }`. Records keep
/// insertion order; updates never reorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    /// All records, in insertion order.
    pub prompts: Vec<Prompt>,
    /// Schema version tag.
    pub version: String,
}

impl Default for Vault {
    fn default() -> Self {
        Self {
            prompts: Vec::new(),
            version: VAULT_SCHEMA_VERSION.to_string(),
        }
    }
}

impl Vault {
    /// Finds the first record matching `key` (name or id).
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.matches_key(key))
    }

    /// Returns the index of the first record matching `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.prompts.iter().position(|p| p.matches_key(key))
    }

    /// Returns whether any record holds `name`, ignoring case.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.prompts.iter().any(|p| p.name_matches(name))
    }
}

/// The persisted configuration document.
///
/// Informational only: the category list is never enforced when creating or
/// updating records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Recognized category labels.
    pub categories: Vec<String>,
    /// Category offered as the default in interactive flows.
    pub default_category: String,
    /// When the configuration document was first created.
    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,
}

impl VaultConfig {
    /// Builds the configuration written on first use.
    #[must_use]
    pub fn starter() -> Self {
        Self {
            categories: STARTER_CATEGORIES.iter().map(ToString::to_string).collect(),
            default_category: DEFAULT_CATEGORY.to_string(),
            created_at: Utc::now(),
        }
    }
}
