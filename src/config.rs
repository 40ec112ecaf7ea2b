//! Command line configuration.
//!
//! Parsed once in `main` and resolved into a [`PopupConfig`], which knows how
//! to open the preferences store and the asset manifest it points at.

use std::path::PathBuf;
use std::sync::Arc;

use bento_core::{AssetManifest, KeyValueStore, MemoryStore, PopupResult, RedbStore};
use clap::Parser;

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Bento Popup - link builder cards with an image gallery
#[derive(Parser, Debug)]
#[command(name = "bento-popup")]
#[command(about = "Bento Popup - link builder cards with an image gallery")]
pub struct Args {
    /// Directory holding prefs.redb
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Directory scanned once at startup for gallery images
    #[arg(short, long, conflicts_with = "manifest")]
    pub assets_dir: Option<PathBuf>,

    /// JSON manifest of {source, filename} records, instead of a scan
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Keep card fields in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Tracing filter, e.g. "debug" or "bento_core=debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Where the gallery images come from
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssetSource {
    Directory(PathBuf),
    Manifest(PathBuf),
}

/// Resolved startup configuration
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PopupConfig {
    pub data_dir: PathBuf,
    pub assets: AssetSource,
    pub ephemeral: bool,
    /// Explicit filter from the command line, overrides `RUST_LOG`
    pub log_level: Option<String>,
}

impl PopupConfig {
    /// Path of the preferences database
    pub fn prefs_path(&self) -> PathBuf {
        self.data_dir.join("prefs.redb")
    }

    /// Open the storage medium for card fields
    pub fn open_store(&self) -> PopupResult<Arc<dyn KeyValueStore>> {
        if self.ephemeral {
            tracing::info!("using in-memory preferences, nothing will be saved");
            return Ok(Arc::new(MemoryStore::new()));
        }
        Ok(Arc::new(RedbStore::open(self.prefs_path())?))
    }

    /// Build the asset manifest the cards' galleries load from
    pub fn load_manifest(&self) -> PopupResult<AssetManifest> {
        match &self.assets {
            AssetSource::Directory(dir) => AssetManifest::scan_dir(dir),
            AssetSource::Manifest(path) => AssetManifest::from_json_file(path),
        }
    }
}

impl From<Args> for PopupConfig {
    fn from(args: Args) -> Self {
        let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
        let assets = match (args.manifest, args.assets_dir) {
            (Some(manifest), _) => AssetSource::Manifest(manifest),
            (None, Some(dir)) => AssetSource::Directory(dir),
            (None, None) => AssetSource::Directory(data_dir.join("icons")),
        };

        Self {
            data_dir,
            assets,
            ephemeral: args.ephemeral,
            log_level: args.log_level,
        }
    }
}

/// `<platform data dir>/bento-popup`, or `./bento-popup` without one
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bento-popup")
}
