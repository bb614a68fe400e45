//! Whole-document vault persistence.
//!
//! The vault and its configuration are each one JSON document, read in full
//! and rewritten in full on every change. Writes go to a sibling temp file
//! followed by an atomic rename, so a crashed write leaves the previous
//! document intact rather than a truncated one.

use crate::models::{Vault, VaultConfig};
use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the collection document.
const VAULT_FILE: &str = "prompts.json";

/// File name of the configuration document.
const CONFIG_FILE: &str = "config.json";

/// What `ensure_initialized` created, if anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitOutcome {
    /// A fresh collection document was written.
    pub created_vault: bool,
    /// A fresh configuration document was written.
    pub created_config: bool,
}

/// Filesystem-backed storage for the vault and configuration documents.
///
/// Constructed with an explicit base directory, so tests can run over
/// isolated temp dirs instead of sharing a process-global path.
#[derive(Debug, Clone)]
pub struct VaultStorage {
    /// Directory holding both documents.
    base_dir: PathBuf,
}

impl VaultStorage {
    /// Creates storage rooted at `base_dir`. The directory is created
    /// lazily on first initialization, not here.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the per-user default vault directory, `~/.prompt-vault`.
    #[must_use]
    pub fn default_user_dir() -> Option<PathBuf> {
        directories::BaseDirs::new().map(|d| d.home_dir().join(".prompt-vault"))
    }

    /// Opens storage at the per-user default location.
    pub fn open_default() -> Result<Self> {
        Self::default_user_dir()
            .map(Self::new)
            .ok_or_else(|| Error::StorageCorrupt {
                path: "~".to_string(),
                cause: "could not resolve a home directory".to_string(),
            })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the path of the collection document.
    #[must_use]
    pub fn vault_path(&self) -> PathBuf {
        self.base_dir.join(VAULT_FILE)
    }

    /// Returns the path of the configuration document.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Idempotently creates the vault directory and any missing documents.
    ///
    /// Existing documents are never overwritten; calling this repeatedly is
    /// safe and cheap.
    pub fn ensure_initialized(&self) -> Result<InitOutcome> {
        fs::create_dir_all(&self.base_dir).map_err(|e| Error::StorageWriteFailed {
            path: self.base_dir.display().to_string(),
            cause: e.to_string(),
        })?;

        let mut outcome = InitOutcome::default();

        if !self.vault_path().exists() {
            self.write_document(&self.vault_path(), &Vault::default())?;
            outcome.created_vault = true;
            tracing::debug!(path = %self.vault_path().display(), "created vault document");
        }

        if !self.config_path().exists() {
            self.write_document(&self.config_path(), &VaultConfig::starter())?;
            outcome.created_config = true;
            tracing::debug!(path = %self.config_path().display(), "created config document");
        }

        Ok(outcome)
    }

    /// Loads the full collection, initializing storage first if missing.
    ///
    /// A document that exists but cannot be parsed is a hard
    /// [`Error::StorageCorrupt`]; it is never silently replaced with an
    /// empty collection.
    pub fn load(&self) -> Result<Vault> {
        self.ensure_initialized()?;
        self.read_document(&self.vault_path())
    }

    /// Serializes the collection and atomically replaces the on-disk
    /// document.
    pub fn save(&self, vault: &Vault) -> Result<()> {
        self.write_document(&self.vault_path(), vault)
    }

    /// Loads the configuration document, initializing storage first if
    /// missing.
    pub fn load_config(&self) -> Result<VaultConfig> {
        self.ensure_initialized()?;
        self.read_document(&self.config_path())
    }

    /// Serializes the configuration and atomically replaces the on-disk
    /// document.
    pub fn save_config(&self, config: &VaultConfig) -> Result<()> {
        self.write_document(&self.config_path(), config)
    }

    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let text = fs::read_to_string(path).map_err(|e| Error::StorageCorrupt {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| Error::StorageCorrupt {
            path: path.display().to_string(),
            cause: e.to_string(),
        })
    }

    /// Write-then-rename so the document either fully lands or the old one
    /// remains.
    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| Error::StorageWriteFailed {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| Error::StorageWriteFailed {
            path: tmp.display().to_string(),
            cause: e.to_string(),
        })?;

        fs::rename(&tmp, path).map_err(|e| Error::StorageWriteFailed {
            path: path.display().to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage() -> (TempDir, VaultStorage) {
        let dir = TempDir::new().unwrap();
        let storage = VaultStorage::new(dir.path());
        (dir, storage)
    }

    #[test]
    fn test_initialize_creates_both_documents() {
        let (_dir, storage) = storage();

        let outcome = storage.ensure_initialized().unwrap();
        assert!(outcome.created_vault);
        assert!(outcome.created_config);
        assert!(storage.vault_path().exists());
        assert!(storage.config_path().exists());
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let (_dir, storage) = storage();

        storage.ensure_initialized().unwrap();
        let second = storage.ensure_initialized().unwrap();
        assert_eq!(second, InitOutcome::default());
    }

    #[test]
    fn test_initialize_never_overwrites_existing_vault() {
        let (_dir, storage) = storage();

        let mut vault = storage.load().unwrap();
        vault.prompts.push(crate::models::Prompt {
            id: crate::models::PromptId::new("0a1b2c3d"),
            name: "keep-me".to_string(),
            content: "x".to_string(),
            category: "general".to_string(),
            tags: vec![],
            description: String::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            uses: 0,
        });
        storage.save(&vault).unwrap();

        storage.ensure_initialized().unwrap();
        let reloaded = storage.load().unwrap();
        assert_eq!(reloaded.prompts.len(), 1);
        assert_eq!(reloaded.prompts[0].name, "keep-me");
    }

    #[test]
    fn test_load_auto_initializes_empty_vault() {
        let (_dir, storage) = storage();

        let vault = storage.load().unwrap();
        assert!(vault.prompts.is_empty());
        assert_eq!(vault.version, crate::models::VAULT_SCHEMA_VERSION);
    }

    #[test]
    fn test_corrupt_vault_is_propagated() {
        let (_dir, storage) = storage();

        storage.ensure_initialized().unwrap();
        fs::write(storage.vault_path(), "{ not json").unwrap();

        let err = storage.load().unwrap_err();
        assert!(matches!(err, Error::StorageCorrupt { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_corrupt_vault_is_not_replaced_on_load() {
        let (_dir, storage) = storage();

        storage.ensure_initialized().unwrap();
        fs::write(storage.vault_path(), "{ not json").unwrap();
        let _ = storage.load();

        let on_disk = fs::read_to_string(storage.vault_path()).unwrap();
        assert_eq!(on_disk, "{ not json");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (_dir, storage) = storage();

        storage.save(&Vault::default()).unwrap();
        assert!(!storage.vault_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_config_round_trip() {
        let (_dir, storage) = storage();

        let mut config = storage.load_config().unwrap();
        config.categories.push("experiments".to_string());
        storage.save_config(&config).unwrap();

        let reloaded = storage.load_config().unwrap();
        assert!(reloaded.categories.iter().any(|c| c == "experiments"));
        assert_eq!(reloaded.default_category, "general");
    }
}
