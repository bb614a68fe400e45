//! Round-trip tests for bulk export and import.
#![allow(clippy::unwrap_used, clippy::panic)]

use promptvault::{
    ImportOptions, NewPrompt, PromptFilter, PromptStore, VaultStorage, export_to_file,
    import_from_file,
};
use tempfile::TempDir;

fn store() -> (TempDir, PromptStore) {
    let dir = TempDir::new().unwrap();
    let store = PromptStore::new(VaultStorage::new(dir.path()));
    (dir, store)
}

#[test]
fn test_export_then_import_reproduces_records() {
    let (source_dir, source) = store();
    source
        .add(
            NewPrompt::new("one", "first content")
                .with_category("coding")
                .with_tags(vec!["a".to_string(), "b".to_string()]),
        )
        .unwrap();
    source
        .add(NewPrompt::new("two", "second content").with_category("writing"))
        .unwrap();

    let exported = source_dir.path().join("export.json");
    export_to_file(&source, &exported, None).unwrap();

    let (_target_dir, target) = store();
    let result = import_from_file(&target, &exported, ImportOptions::new()).unwrap();
    assert_eq!(result.imported, 2);
    assert_eq!(result.skipped, 0);

    // Same {name, content, category, tags} tuples; ids and timestamps are
    // newly assigned by the re-creating import.
    let originals = source.list(&PromptFilter::new()).unwrap();
    let copies = target.list(&PromptFilter::new()).unwrap();
    assert_eq!(originals.len(), copies.len());
    for (original, copy) in originals.iter().zip(&copies) {
        assert_eq!(original.name, copy.name);
        assert_eq!(original.content, copy.content);
        assert_eq!(original.category, copy.category);
        assert_eq!(original.tags, copy.tags);
        assert_eq!(copy.uses, 0);
    }
}

#[test]
fn test_category_scoped_export() {
    let (dir, source) = store();
    source
        .add(NewPrompt::new("kept", "x").with_category("coding"))
        .unwrap();
    source
        .add(NewPrompt::new("dropped", "y").with_category("writing"))
        .unwrap();

    let exported = dir.path().join("coding.json");
    let result = export_to_file(&source, &exported, Some("coding")).unwrap();
    assert_eq!(result.exported, 1);

    let (_target_dir, target) = store();
    import_from_file(&target, &exported, ImportOptions::new()).unwrap();
    assert!(target.get("kept").is_ok());
    assert!(target.get("dropped").is_err());
}

#[test]
fn test_import_mixed_existing_and_new() {
    let (dir, store) = store();
    store.add(NewPrompt::new("existing", "original")).unwrap();

    let source = dir.path().join("mixed.json");
    std::fs::write(
        &source,
        r#"[
            {"name": "existing", "content": "replacement"},
            {"name": "brand-new", "content": "fresh"}
        ]"#,
    )
    .unwrap();

    let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
    assert_eq!(result.imported, 1);
    assert_eq!(result.skipped, 1);

    assert_eq!(store.get("existing").unwrap().content, "original");
    assert_eq!(store.get("brand-new").unwrap().content, "fresh");
    assert_eq!(store.list(&PromptFilter::new()).unwrap().len(), 2);
}

#[test]
fn test_import_accepts_foreign_record_lists() {
    // Files exported by other tools may use a `records` field and carry
    // extra metadata on each entry.
    let (dir, store) = store();
    let source = dir.path().join("foreign.json");
    std::fs::write(
        &source,
        r#"{"records": [
            {"name": "foreign", "content": "text", "author": "someone", "extra": 42}
        ]}"#,
    )
    .unwrap();

    let result = import_from_file(&store, &source, ImportOptions::new()).unwrap();
    assert_eq!(result.imported, 1);
    assert_eq!(store.get("foreign").unwrap().category, "general");
}
