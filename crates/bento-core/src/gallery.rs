//! Open/closed and search state of a card's gallery overlay.

use crate::assets::Asset;
use crate::filter::filter_assets;

/// State owned by one gallery overlay.
///
/// Closing keeps the search term, so reopening resumes the last search.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct GalleryState {
    open: bool,
    search: String,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Assets matching the current search term
    pub fn visible(&self, assets: &[Asset]) -> Vec<Asset> {
        filter_assets(assets, &self.search)
    }
}
