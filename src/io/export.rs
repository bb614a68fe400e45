//! Prompt export.

use crate::models::Prompt;
use crate::services::{PromptFilter, PromptStore};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The standalone export document.
///
/// Field names are part of the export/import contract; files written by
/// earlier versions of the catalog round-trip through this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    /// When the export was taken.
    pub exported: DateTime<Utc>,
    /// Number of records in `prompts`.
    pub count: usize,
    /// The exported records.
    pub prompts: Vec<Prompt>,
}

/// Result of an export operation.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Number of records written.
    pub exported: usize,
    /// Destination file.
    pub path: PathBuf,
}

/// Exports prompts to `path`, optionally restricted to one category.
///
/// The destination is a user-chosen file outside the vault, so a plain
/// write is used; failure surfaces as [`Error::StorageWriteFailed`].
pub fn export_to_file(
    store: &PromptStore,
    path: &Path,
    category: Option<&str>,
) -> Result<ExportResult> {
    let mut filter = PromptFilter::new();
    if let Some(category) = category {
        filter = filter.with_category(category);
    }
    let prompts = store.list(&filter)?;

    let document = ExportDocument {
        exported: Utc::now(),
        count: prompts.len(),
        prompts,
    };

    let text = serde_json::to_string_pretty(&document).map_err(|e| Error::StorageWriteFailed {
        path: path.display().to_string(),
        cause: e.to_string(),
    })?;
    fs::write(path, text).map_err(|e| Error::StorageWriteFailed {
        path: path.display().to_string(),
        cause: e.to_string(),
    })?;

    tracing::debug!(count = document.count, path = %path.display(), "exported prompts");
    Ok(ExportResult {
        exported: document.count,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::NewPrompt;
    use crate::storage::VaultStorage;
    use tempfile::TempDir;

    fn store() -> (TempDir, PromptStore) {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::new(VaultStorage::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn test_export_all() {
        let (dir, store) = store();
        store.add(NewPrompt::new("a", "x")).unwrap();
        store.add(NewPrompt::new("b", "y")).unwrap();

        let out = dir.path().join("out.json");
        let result = export_to_file(&store, &out, None).unwrap();
        assert_eq!(result.exported, 2);

        let text = fs::read_to_string(&out).unwrap();
        let document: ExportDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(document.count, 2);
        assert_eq!(document.prompts.len(), 2);
    }

    #[test]
    fn test_export_filters_by_category() {
        let (dir, store) = store();
        store
            .add(NewPrompt::new("a", "x").with_category("coding"))
            .unwrap();
        store
            .add(NewPrompt::new("b", "y").with_category("writing"))
            .unwrap();

        let out = dir.path().join("coding.json");
        let result = export_to_file(&store, &out, Some("coding")).unwrap();
        assert_eq!(result.exported, 1);

        let document: ExportDocument =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(document.prompts[0].name, "a");
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let (dir, store) = store();
        store.add(NewPrompt::new("a", "x")).unwrap();

        let out = dir.path().join("no-such-dir").join("out.json");
        let err = export_to_file(&store, &out, None).unwrap_err();
        assert!(matches!(err, Error::StorageWriteFailed { .. }));
    }
}
