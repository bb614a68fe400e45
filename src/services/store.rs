//! The prompt record store.

use crate::models::{Prompt, PromptId, generate_id};
use crate::storage::VaultStorage;
use crate::{Error, Result};
use chrono::Utc;

/// Input for creating a new prompt record.
#[derive(Debug, Clone)]
pub struct NewPrompt {
    /// User-chosen name, unique across the vault (case-insensitive).
    pub name: String,
    /// The prompt text.
    pub content: String,
    /// Category label. Any string is accepted.
    pub category: String,
    /// Initial tags.
    pub tags: Vec<String>,
    /// Optional description.
    pub description: String,
}

impl NewPrompt {
    /// Creates a new-prompt request with the default category and no tags.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            category: crate::models::DEFAULT_CATEGORY.to_string(),
            tags: Vec::new(),
            description: String::new(),
        }
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update for an existing record.
///
/// Each field is an explicit present-vs-absent `Option`: `None` leaves the
/// stored value untouched, `Some` replaces it. `Some(vec![])` for tags is a
/// real value that clears the tag list, distinct from omitting tags.
#[derive(Debug, Clone, Default)]
pub struct PromptPatch {
    /// Replacement content.
    pub content: Option<String>,
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

impl PromptPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets replacement content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets a replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets a replacement tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Returns whether the patch carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.name.is_none()
            && self.category.is_none()
            && self.tags.is_none()
    }
}

/// Filters for listing records. Supplied filters are ANDed together;
/// omitted filters impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Case-insensitive tag membership test.
    pub tag: Option<String>,
    /// Case-insensitive substring match against name, content, or
    /// description.
    pub search: Option<String>,
}

impl PromptFilter {
    /// Creates an empty filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters by tag membership.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Filters by search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns whether `prompt` satisfies every supplied filter.
    #[must_use]
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(category) = &self.category {
            if prompt.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }

        if let Some(tag) = &self.tag {
            if !prompt.has_tag(tag) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = prompt.name.to_lowercase().contains(&needle)
                || prompt.content.to_lowercase().contains(&needle)
                || prompt.description.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }
}

/// The record store.
///
/// Owns a [`VaultStorage`] and performs one full load-mutate-save cycle per
/// operation. No mutation is visible until the rewritten document lands on
/// disk.
pub struct PromptStore {
    storage: VaultStorage,
}

impl PromptStore {
    /// Creates a store over the given storage.
    #[must_use]
    pub const fn new(storage: VaultStorage) -> Self {
        Self { storage }
    }

    /// Opens a store over the per-user default vault location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(VaultStorage::open_default()?))
    }

    /// Returns the underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &VaultStorage {
        &self.storage
    }

    /// Adds a new record.
    ///
    /// Fails with [`Error::DuplicateName`] on a case-insensitive name
    /// collision, without touching storage. Returns the created record.
    pub fn add(&self, new: NewPrompt) -> Result<Prompt> {
        if new.name.trim().is_empty() {
            return Err(Error::MissingRequiredInput("name".to_string()));
        }
        if new.content.is_empty() {
            return Err(Error::MissingRequiredInput("content".to_string()));
        }

        let mut vault = self.storage.load()?;
        if vault.contains_name(&new.name) {
            return Err(Error::DuplicateName(new.name));
        }

        let now = Utc::now();
        let prompt = Prompt {
            id: PromptId::new(generate_id(&new.content, now)),
            name: new.name,
            content: new.content,
            category: new.category,
            tags: new.tags,
            description: new.description,
            created_at: now,
            updated_at: now,
            uses: 0,
        };

        vault.prompts.push(prompt.clone());
        self.storage.save(&vault)?;
        tracing::debug!(name = %prompt.name, id = %prompt.id, "added prompt");
        Ok(prompt)
    }

    /// Looks up a record by name (case-insensitive) or id (exact).
    ///
    /// Never touches the use counter; see [`Self::retrieve_for_use`] for
    /// the counting variant.
    pub fn get(&self, key: &str) -> Result<Prompt> {
        let vault = self.storage.load()?;
        vault
            .find(key)
            .cloned()
            .ok_or_else(|| Error::NotFound(key.to_string()))
    }

    /// Looks up a record, increments its use counter, and persists.
    ///
    /// Returns the record as it was after the increment. Performs no write
    /// when the key resolves to nothing.
    pub fn retrieve_for_use(&self, key: &str) -> Result<Prompt> {
        let mut vault = self.storage.load()?;
        let idx = vault
            .position(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;

        vault.prompts[idx].uses = vault.prompts[idx].uses.saturating_add(1);
        self.storage.save(&vault)?;
        Ok(vault.prompts[idx].clone())
    }

    /// Applies a partial update to the record matching `key`.
    ///
    /// Only supplied fields change; `id` and `created_at` are immutable and
    /// `updated_at` is refreshed. Renaming to a name held by a *different*
    /// record fails with [`Error::DuplicateName`]; renaming a record to a
    /// case variant of its own name is allowed.
    pub fn update(&self, key: &str, patch: PromptPatch) -> Result<Prompt> {
        let mut vault = self.storage.load()?;
        let idx = vault
            .position(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;

        if let Some(name) = &patch.name {
            let clash = vault
                .prompts
                .iter()
                .enumerate()
                .any(|(i, p)| i != idx && p.name_matches(name));
            if clash {
                return Err(Error::DuplicateName(name.clone()));
            }
        }

        let prompt = &mut vault.prompts[idx];
        if let Some(content) = patch.content {
            prompt.content = content;
        }
        if let Some(name) = patch.name {
            prompt.name = name;
        }
        if let Some(category) = patch.category {
            prompt.category = category;
        }
        if let Some(tags) = patch.tags {
            prompt.tags = tags;
        }
        prompt.updated_at = Utc::now();

        let updated = prompt.clone();
        self.storage.save(&vault)?;
        tracing::debug!(name = %updated.name, id = %updated.id, "updated prompt");
        Ok(updated)
    }

    /// Removes the first record matching `key` and persists.
    ///
    /// Returns the removed record; the name becomes available for reuse
    /// immediately.
    pub fn delete(&self, key: &str) -> Result<Prompt> {
        let mut vault = self.storage.load()?;
        let idx = vault
            .position(key)
            .ok_or_else(|| Error::NotFound(key.to_string()))?;

        let removed = vault.prompts.remove(idx);
        self.storage.save(&vault)?;
        tracing::debug!(name = %removed.name, id = %removed.id, "deleted prompt");
        Ok(removed)
    }

    /// Lists records satisfying every supplied filter, in insertion order.
    pub fn list(&self, filter: &PromptFilter) -> Result<Vec<Prompt>> {
        let vault = self.storage.load()?;
        Ok(vault
            .prompts
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect())
    }
}
