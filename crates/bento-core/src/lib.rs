//! Bento Popup Core Library
//!
//! Everything the popup's cards do that is not drawing:
//!
//! - **Persisted fields**: each card's URL fragment and suffix, stored under
//!   `input-<name>` / `suffix-<name>` in an injected [`KeyValueStore`]
//! - **Asset inventory**: images resolved once from an [`AssetManifest`],
//!   titled by filename stem
//! - **Filtering**: case-insensitive title search
//! - **Presentation state**: gallery open/search state and grid hover state
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use bento_core::{filter_assets, load_assets, AssetManifest, FieldPair, FieldStore, MemoryStore, Suffix};
//!
//! let fields = FieldStore::new(Arc::new(MemoryStore::new()));
//! fields.save("Search", &FieldPair::new("example", Suffix::Io));
//! assert_eq!(fields.load("Search").href(), "https://example.io");
//!
//! let assets = load_assets(&AssetManifest::from_pairs([
//!     ("castle.png", "castle.png"),
//!     ("archer.svg", "archer.svg"),
//! ]));
//! assert_eq!(filter_assets(&assets, "arc").len(), 1);
//! ```

pub mod assets;
pub mod card;
pub mod error;
pub mod fields;
pub mod filter;
pub mod gallery;
pub mod hover;
pub mod storage;
pub mod suffix;

// Re-exports
pub use assets::{load_assets, title_from_filename, Asset, AssetManifest, ManifestEntry};
pub use card::CardState;
pub use error::{PopupError, PopupResult};
pub use fields::{derive_link, FieldPair, FieldStore};
pub use filter::filter_assets;
pub use gallery::GalleryState;
pub use hover::{HoverState, TileEmphasis};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use suffix::Suffix;
