//! Theme for Bento Popup.

mod styles;

pub use styles::GLOBAL_STYLES;
