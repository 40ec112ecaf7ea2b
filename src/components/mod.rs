//! UI Components for Bento Popup.

mod bento_grid;
mod gallery_overlay;
mod url_form;

pub use bento_grid::{BentoCard, BentoGrid};
pub use gallery_overlay::GalleryOverlay;
pub use url_form::UrlForm;
