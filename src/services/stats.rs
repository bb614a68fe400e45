//! Vault statistics and category summaries.

use crate::models::Vault;
use crate::services::PromptStore;
use crate::{PromptFilter, Result};

/// A category label with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label.
    pub name: String,
    /// Number of records in the category (case-insensitive match).
    pub prompts: usize,
}

/// Aggregate statistics over the whole vault.
#[derive(Debug, Clone, Default)]
pub struct VaultStats {
    /// Total number of records.
    pub total_prompts: usize,
    /// Sum of all use counters.
    pub total_uses: u64,
    /// Name and use count of the most-used record, if any.
    pub most_used: Option<(String, u64)>,
    /// Records per category, most populous first.
    pub by_category: Vec<CategoryCount>,
}

impl VaultStats {
    /// Computes statistics from a loaded vault.
    #[must_use]
    pub fn compute(vault: &Vault) -> Self {
        let total_prompts = vault.prompts.len();
        let total_uses = vault.prompts.iter().map(|p| p.uses).sum();
        let most_used = vault
            .prompts
            .iter()
            .max_by_key(|p| p.uses)
            .map(|p| (p.name.clone(), p.uses));

        let mut by_category: Vec<CategoryCount> = Vec::new();
        for prompt in &vault.prompts {
            let label = prompt.category.to_lowercase();
            match by_category.iter_mut().find(|c| c.name == label) {
                Some(entry) => entry.prompts += 1,
                None => by_category.push(CategoryCount {
                    name: label,
                    prompts: 1,
                }),
            }
        }
        by_category.sort_by(|a, b| b.prompts.cmp(&a.prompts).then_with(|| a.name.cmp(&b.name)));

        Self {
            total_prompts,
            total_uses,
            most_used,
            by_category,
        }
    }
}

impl PromptStore {
    /// Computes statistics over the current vault contents.
    pub fn stats(&self) -> Result<VaultStats> {
        let vault = self.storage().load()?;
        Ok(VaultStats::compute(&vault))
    }

    /// Returns the configured categories with their record counts.
    ///
    /// The list comes from the configuration document; counts are computed
    /// against the live collection. Categories used by records but absent
    /// from the configuration are not listed, matching the informational
    /// nature of the config.
    pub fn categories(&self) -> Result<Vec<CategoryCount>> {
        let config = self.storage().load_config()?;
        let mut counts = Vec::with_capacity(config.categories.len());
        for category in config.categories {
            let prompts = self
                .list(&PromptFilter::new().with_category(&category))?
                .len();
            counts.push(CategoryCount {
                name: category,
                prompts,
            });
        }
        Ok(counts)
    }
}
