//! Asset inventory: the images a card's gallery can show.
//!
//! The inventory is resolved once, from an explicit [`AssetManifest`], and is
//! never mutated afterwards. A manifest can be built three ways:
//! - by hand, from `(source, filename)` pairs
//! - by scanning a directory once at startup ([`AssetManifest::scan_dir`])
//! - from a JSON file of `{ "source": ..., "filename": ... }` records

use std::path::Path;

use base64::Engine;
use serde::Deserialize;

use crate::error::{PopupError, PopupResult};

/// File extensions accepted into the inventory (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "webp"];

/// Title used when a filename yields no usable stem
pub const UNKNOWN_TITLE: &str = "Unknown";

/// One image with its display title.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Asset {
    /// URI an `img` element can load (URL or `data:` URI)
    pub source: String,
    /// Filename stem, fixed at load time
    pub title: String,
}

/// A manifest line: where the image lives and what its file was called.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct ManifestEntry {
    pub source: String,
    pub filename: String,
}

/// Ordered list of candidate assets. Order is enumeration order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AssetManifest {
    entries: Vec<ManifestEntry>,
}

impl AssetManifest {
    /// Build a manifest from `(source, filename)` pairs.
    pub fn from_pairs<S, F>(pairs: impl IntoIterator<Item = (S, F)>) -> Self
    where
        S: Into<String>,
        F: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(source, filename)| ManifestEntry {
                source: source.into(),
                filename: filename.into(),
            })
            .collect();
        Self { entries }
    }

    /// Parse a JSON array of manifest entries.
    pub fn from_json(json: &str) -> PopupResult<Self> {
        let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Read and parse a JSON manifest file.
    pub fn from_json_file(path: impl AsRef<Path>) -> PopupResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Enumerate the image files directly inside `dir`.
    ///
    /// Files are sorted by filename and embedded as base64 `data:` URIs so
    /// the webview needs no file access. A missing directory gives an empty
    /// manifest.
    pub fn scan_dir(dir: impl AsRef<Path>) -> PopupResult<Self> {
        let dir = dir.as_ref();

        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "asset directory not found, gallery will be empty");
            return Ok(Self::default());
        }
        if !dir.is_dir() {
            return Err(PopupError::NotADirectory(dir.display().to_string()));
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && extension_of(&file_name_of(&path)).and_then(mime_type).is_some() {
                paths.push(path);
            }
        }
        paths.sort_by_key(|p| file_name_of(p));

        let mut entries = Vec::with_capacity(paths.len());
        for path in paths {
            let filename = file_name_of(&path);
            let mime = extension_of(&filename)
                .and_then(mime_type)
                .unwrap_or("application/octet-stream");
            let bytes = std::fs::read(&path)?;
            let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
            entries.push(ManifestEntry {
                source: format!("data:{};base64,{}", mime, encoded),
                filename,
            });
        }

        tracing::debug!(dir = %dir.display(), count = entries.len(), "scanned asset directory");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turn a manifest into the inventory.
///
/// Keeps entries with an image extension, in manifest order, and derives
/// each title from the filename.
pub fn load_assets(manifest: &AssetManifest) -> Vec<Asset> {
    manifest
        .entries
        .iter()
        .filter(|entry| is_image_filename(&entry.filename))
        .map(|entry| Asset {
            source: entry.source.clone(),
            title: title_from_filename(&entry.filename),
        })
        .collect()
}

/// Display title for a filename or path: the last path segment up to its
/// first `.`, or [`UNKNOWN_TITLE`] when that is empty.
///
/// `"icons/castle.png"` gives `"castle"`; `"tower.old.webp"` gives `"tower"`.
pub fn title_from_filename(filename: &str) -> String {
    let last = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    match last.split('.').next() {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => UNKNOWN_TITLE.to_string(),
    }
}

/// Whether the filename ends in one of [`IMAGE_EXTENSIONS`]
pub fn is_image_filename(filename: &str) -> bool {
    extension_of(filename)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Lowercased text after the last `.`
fn extension_of(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

fn mime_type(ext: String) -> Option<&'static str> {
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "svg" => Some("image/svg+xml"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_from_filenames() {
        assert_eq!(title_from_filename("castle.png"), "castle");
        assert_eq!(title_from_filename("../aoe3_icons/archer.svg"), "archer");
        assert_eq!(title_from_filename("tower.old.webp"), "tower");
        assert_eq!(title_from_filename("icons\\knight.jpg"), "knight");
    }

    #[test]
    fn unparseable_names_are_unknown() {
        assert_eq!(title_from_filename(".png"), UNKNOWN_TITLE);
        assert_eq!(title_from_filename(""), UNKNOWN_TITLE);
        assert_eq!(title_from_filename("icons/"), UNKNOWN_TITLE);
    }

    #[test]
    fn image_extensions() {
        assert!(is_image_filename("a.png"));
        assert!(is_image_filename("a.JPEG"));
        assert!(is_image_filename("a.webp"));
        assert!(!is_image_filename("a.gif"));
        assert!(!is_image_filename("notes.txt"));
        assert!(!is_image_filename("png"));
    }

    #[test]
    fn load_keeps_manifest_order() {
        let manifest = AssetManifest::from_pairs([
            ("/castle.png", "castle.png"),
            ("/readme.md", "readme.md"),
            ("/archer.svg", "archer.svg"),
        ]);

        let assets = load_assets(&manifest);
        let titles: Vec<&str> = assets.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["castle", "archer"]);
        assert_eq!(assets[1].source, "/archer.svg");
    }

    #[test]
    fn load_is_repeatable() {
        let manifest = AssetManifest::from_pairs([("a", "a.png"), ("b", "b.jpg")]);
        assert_eq!(load_assets(&manifest), load_assets(&manifest));
    }

    #[test]
    fn manifest_from_json() {
        let manifest = AssetManifest::from_json(
            r#"[{"source": "https://cdn/x.png", "filename": "x.png"}]"#,
        )
        .unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.entries()[0].filename, "x.png");
    }

    #[test]
    fn manifest_from_bad_json() {
        assert!(matches!(
            AssetManifest::from_json("{"),
            Err(PopupError::Manifest(_))
        ));
    }
}
