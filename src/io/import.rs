//! Prompt import.

use crate::models::DEFAULT_CATEGORY;
use crate::services::{NewPrompt, PromptPatch, PromptStore};
use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Options for an import run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Replace content, category, and tags of records whose name already
    /// exists. When `false`, such entries are skipped.
    pub overwrite: bool,
}

impl ImportOptions {
    /// Creates default options (no overwrite).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets overwrite behavior.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Result of an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Entries created or (with overwrite) updated.
    pub imported: usize,
    /// Entries skipped: missing name/content, non-record entries, or
    /// existing names without overwrite.
    pub skipped: usize,
}

/// One candidate record pulled out of the source document.
struct ImportEntry {
    name: String,
    content: String,
    category: String,
    tags: Vec<String>,
    description: String,
}

impl ImportEntry {
    /// Extracts a usable entry from a JSON value, or `None` when the value
    /// is not a record with a non-empty name and content.
    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?.to_string();
        let content = object.get("content")?.as_str()?.to_string();
        if name.trim().is_empty() || content.is_empty() {
            return None;
        }

        let category = object
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string();
        let tags = object
            .get("tags")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let description = object
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            name,
            content,
            category,
            tags,
            description,
        })
    }
}

/// Pulls the record array out of the source document.
///
/// Accepts a bare array, or an object with a `prompts` (or `records`)
/// array. Any other shape is [`Error::ImportFormatInvalid`].
fn record_array(document: &Value) -> Result<&Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(map) => map
            .get("prompts")
            .or_else(|| map.get("records"))
            .and_then(Value::as_array)
            .ok_or_else(|| {
                Error::ImportFormatInvalid(
                    "expected a 'prompts' or 'records' array".to_string(),
                )
            }),
        _ => Err(Error::ImportFormatInvalid(
            "expected a JSON array or object".to_string(),
        )),
    }
}

/// Imports prompts from `path` into the store.
///
/// The document is parsed and shape-checked before the first write, so a
/// malformed source has zero side effects. Per-entry failures after that
/// point are best-effort: entries already committed stay committed (a hard
/// storage error mid-run does not roll them back).
pub fn import_from_file(
    store: &PromptStore,
    path: &Path,
    options: ImportOptions,
) -> Result<ImportResult> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::ImportFormatInvalid(format!("{}: {e}", path.display())))?;
    let document: Value = serde_json::from_str(&text)
        .map_err(|e| Error::ImportFormatInvalid(format!("{}: {e}", path.display())))?;
    let entries = record_array(&document)?;

    let mut result = ImportResult::default();

    for value in entries {
        let Some(entry) = ImportEntry::from_value(value) else {
            result.skipped += 1;
            continue;
        };

        match store.get(&entry.name) {
            Ok(_) if !options.overwrite => {
                result.skipped += 1;
            }
            Ok(_) => {
                store.update(
                    &entry.name,
                    PromptPatch::new()
                        .with_content(entry.content)
                        .with_category(entry.category)
                        .with_tags(entry.tags),
                )?;
                result.imported += 1;
            }
            Err(Error::NotFound(_)) => {
                store.add(
                    NewPrompt::new(entry.name, entry.content)
                        .with_category(entry.category)
                        .with_tags(entry.tags)
                        .with_description(entry.description),
                )?;
                result.imported += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::debug!(
        imported = result.imported,
        skipped = result.skipped,
        path = %path.display(),
        "import finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PromptFilter;
    use crate::storage::VaultStorage;
    use tempfile::TempDir;

    fn store() -> (TempDir, PromptStore) {
        let dir = TempDir::new().unwrap();
        let store = PromptStore::new(VaultStorage::new(dir.path()));
        (dir, store)
    }

    fn write_source(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("source.json");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_import_bare_array() {
        let (dir, store) = store();
        let source = write_source(
            &dir,
            r#"[
                {"name": "a", "content": "x", "tags": ["t"]},
                {"name": "b", "content": "y", "category": "coding"}
            ]"#,
        );

        let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
        assert_eq!(result, ImportResult { imported: 2, skipped: 0 });
        assert_eq!(store.get("b").unwrap().category, "coding");
        assert_eq!(store.get("a").unwrap().tags, vec!["t".to_string()]);
    }

    #[test]
    fn test_import_wrapped_document() {
        let (dir, store) = store();
        let source = write_source(
            &dir,
            r#"{"exported": "2024-01-01T00:00:00Z", "count": 1,
                "prompts": [{"name": "a", "content": "x"}]}"#,
        );

        let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
        assert_eq!(result.imported, 1);
    }

    #[test]
    fn test_import_skips_entries_missing_fields() {
        let (dir, store) = store();
        let source = write_source(
            &dir,
            r#"[
                {"name": "ok", "content": "x"},
                {"name": "no-content"},
                {"content": "no name"},
                "not even an object"
            ]"#,
        );

        let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
        assert_eq!(result, ImportResult { imported: 1, skipped: 3 });
    }

    #[test]
    fn test_import_existing_without_overwrite_skips() {
        let (dir, store) = store();
        store.add(NewPrompt::new("existing", "original")).unwrap();
        let source = write_source(
            &dir,
            r#"[
                {"name": "existing", "content": "replacement"},
                {"name": "fresh", "content": "new"}
            ]"#,
        );

        let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
        assert_eq!(result, ImportResult { imported: 1, skipped: 1 });
        assert_eq!(store.get("existing").unwrap().content, "original");
        assert_eq!(store.get("fresh").unwrap().content, "new");
    }

    #[test]
    fn test_import_existing_with_overwrite_updates() {
        let (dir, store) = store();
        let created = store.add(NewPrompt::new("existing", "original")).unwrap();
        let source = write_source(
            &dir,
            r#"[{"name": "existing", "content": "replacement", "tags": ["new"]}]"#,
        );

        let result =
            import_from_file(&store, &source, ImportOptions::new().with_overwrite(true)).unwrap();
        assert_eq!(result.imported, 1);

        let updated = store.get("existing").unwrap();
        assert_eq!(updated.content, "replacement");
        assert_eq!(updated.tags, vec!["new".to_string()]);
        // Overwrite is an update, not a re-create.
        assert_eq!(updated.id, created.id);
    }

    #[test]
    fn test_malformed_document_has_no_side_effects() {
        let (dir, store) = store();
        store.add(NewPrompt::new("existing", "x")).unwrap();

        for bad in [r#""just a string""#, "42", "{ broken"] {
            let source = write_source(&dir, bad);
            let err = import_from_file(&store, &source, ImportOptions::new()).unwrap_err();
            assert!(matches!(err, Error::ImportFormatInvalid(_)));
        }

        let all = store.list(&PromptFilter::new()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_missing_source_file_is_format_invalid() {
        let (dir, store) = store();
        let err = import_from_file(
            &store,
            &dir.path().join("nope.json"),
            ImportOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ImportFormatInvalid(_)));
    }
}
