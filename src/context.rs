//! Shared popup state provided to every component via `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In main
//! dioxus::LaunchBuilder::desktop().with_context(PopupContext::new(fields, manifest))
//!
//! // In a card
//! let fields = use_field_store();
//! ```

use std::sync::Arc;

use bento_core::{AssetManifest, FieldStore};
use dioxus::prelude::*;

/// The collaborators the popup's cards depend on.
///
/// Built once before launch; cloning only bumps reference counts.
#[derive(Clone, Debug)]
pub struct PopupContext {
    /// Persistence for every card's URL form
    pub fields: FieldStore,
    /// Images available to every card's gallery
    pub manifest: Arc<AssetManifest>,
}

impl PopupContext {
    pub fn new(fields: FieldStore, manifest: AssetManifest) -> Self {
        Self {
            fields,
            manifest: Arc::new(manifest),
        }
    }
}

/// Hook to access the field store from context.
pub fn use_field_store() -> FieldStore {
    use_context::<PopupContext>().fields
}

/// Hook to access the asset manifest from context.
pub fn use_asset_manifest() -> Arc<AssetManifest> {
    use_context::<PopupContext>().manifest
}
