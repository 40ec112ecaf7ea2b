//! On-disk behaviour: the preferences database and asset directory scans.

use std::sync::Arc;

use bento_core::{load_assets, AssetManifest, FieldPair, FieldStore, PopupError, RedbStore, Suffix};
use tempfile::tempdir;

// ============================================================================
// Preferences database
// ============================================================================

#[test]
fn test_fields_outlive_the_store_handle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prefs.redb");

    {
        let store = RedbStore::open(&path).unwrap();
        let fields = FieldStore::new(Arc::new(store));
        fields.save("Search", &FieldPair::new("kagi", Suffix::Com));
        fields.save("Code", &FieldPair::new("codeberg", Suffix::Org));
    }

    let fields = FieldStore::new(Arc::new(RedbStore::open(&path).unwrap()));
    assert_eq!(fields.load("Search"), FieldPair::new("kagi", Suffix::Com));
    assert_eq!(fields.load("Code"), FieldPair::new("codeberg", Suffix::Org));
    assert_eq!(fields.load("Never"), FieldPair::default());
}

#[test]
fn test_fresh_database_gives_defaults() {
    let dir = tempdir().unwrap();
    let fields = FieldStore::new(Arc::new(
        RedbStore::open(dir.path().join("prefs.redb")).unwrap(),
    ));

    let pair = fields.load("Anything");
    assert_eq!(pair.fragment, "");
    assert_eq!(pair.suffix, Suffix::Com);
}

// ============================================================================
// Asset directory scans
// ============================================================================

#[test]
fn test_scan_dir_sorted_images_only() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("castle.png"), [0x89, b'P', b'N', b'G']).unwrap();
    std::fs::write(dir.path().join("archer.svg"), "<svg/>").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
    std::fs::create_dir(dir.path().join("nested.png")).unwrap();

    let manifest = AssetManifest::scan_dir(dir.path()).unwrap();
    assert_eq!(manifest.len(), 2);

    let assets = load_assets(&manifest);
    let titles: Vec<&str> = assets.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, ["archer", "castle"]);
    assert_eq!(assets[0].source, "data:image/svg+xml;base64,PHN2Zy8+");
    assert!(assets[1].source.starts_with("data:image/png;base64,"));
}

#[test]
fn test_scan_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    let manifest = AssetManifest::scan_dir(dir.path().join("icons")).unwrap();
    assert!(manifest.is_empty());
}

#[test]
fn test_scan_file_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("icons.png");
    std::fs::write(&file, "x").unwrap();

    let err = AssetManifest::scan_dir(&file).unwrap_err();
    assert!(matches!(err, PopupError::NotADirectory(_)));
}

#[test]
fn test_manifest_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    std::fs::write(
        &path,
        r#"[
            {"source": "https://example.org/a.webp", "filename": "a.webp"},
            {"source": "https://example.org/readme", "filename": "readme"}
        ]"#,
    )
    .unwrap();

    let assets = load_assets(&AssetManifest::from_json_file(&path).unwrap());
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].title, "a");
}
