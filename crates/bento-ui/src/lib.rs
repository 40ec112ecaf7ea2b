//! Bento Popup UI Components
//!
//! Dioxus components shared by the popup's cards and gallery, styled after
//! the warm wood-and-parchment palette of the bento grid:
//! - **Parchment (#f0d78c)**: text on dark wood, search field background
//! - **Walnut (#6d3f1f)**: controls and buttons
//! - **Brass (#b19768)**: borders, focus rings use the lighter #e4c98d
//!
//! The class names emitted here are styled by the host application's global
//! stylesheet.

pub mod components;

pub use components::*;
