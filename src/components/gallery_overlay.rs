//! Gallery Overlay Component
//!
//! Trigger button plus a full-window dialog with a search box over a
//! focus-card grid of the card's images.

use std::rc::Rc;

use bento_core::{Asset, GalleryState};
use bento_ui::{Button, ButtonVariant, CloseButton, FocusCards, SearchInput};
use dioxus::prelude::*;

/// Gallery dialog and the button that opens it.
///
/// Open state and the search term belong to this component. Closing the
/// dialog keeps the search term, so reopening shows the last search.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GalleryOverlay { assets: assets.clone() }
/// }
/// ```
#[component]
pub fn GalleryOverlay(
    /// The card's inventory
    assets: Rc<Vec<Asset>>,
) -> Element {
    let mut gallery = use_signal(GalleryState::new);

    let state = gallery();
    let visible = if state.is_open() {
        state.visible(&assets)
    } else {
        Vec::new()
    };

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            class: "gallery-trigger".to_string(),
            onclick: move |_| gallery.write().open(),
            "Open Gallery"
        }

        if state.is_open() {
            div {
                class: "modal-overlay gallery-overlay",
                onclick: move |_| gallery.write().close(),

                div {
                    class: "gallery-dialog",
                    role: "dialog",
                    "aria-modal": "true",
                    "aria-label": "Image gallery",
                    onclick: move |e| e.stop_propagation(),

                    CloseButton { onclick: move |_| gallery.write().close() }

                    div { class: "gallery-search",
                        SearchInput {
                            value: state.search().to_string(),
                            oninput: move |term: String| gallery.write().set_search(term),
                        }
                    }

                    div { class: "gallery-grid",
                        FocusCards {
                            cards: visible,
                            captioned: true,
                            empty_message: "No images match that name.".to_string(),
                        }
                    }
                }
            }
        }
    }
}
