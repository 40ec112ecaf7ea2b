//! Bento Grid Components
//!
//! Three-column card layout. Each card carries an inline URL builder whose
//! fields persist per card name, and a gallery of the bundled images.

use std::rc::Rc;

use bento_core::{load_assets, CardState};
use dioxus::prelude::*;

use super::{GalleryOverlay, UrlForm};
use crate::context::{use_asset_manifest, use_field_store};

/// Grid container for [`BentoCard`]s
#[component]
pub fn BentoGrid(children: Element) -> Element {
    rsx! {
        div { class: "bento-grid", {children} }
    }
}

/// One configurable destination link with an image gallery.
///
/// # Behaviour
///
/// Field persistence and the link follow [`CardState`]: fields are read
/// once on mount, every edit is saved, and the link only changes on Submit.
/// The image inventory is loaded once, on mount.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BentoGrid {
///         BentoCard {
///             name: "Search".to_string(),
///             description: "Your search engine of choice.".to_string(),
///             href: "https://duckduckgo.com".to_string(),
///             cta: "Go".to_string(),
///         }
///     }
/// }
/// ```
#[component]
pub fn BentoCard(
    /// Card title; scopes the persisted fields, so must be unique
    name: String,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
    /// Decorative layer drawn behind the content
    #[props(default)]
    background: Option<Element>,
    description: String,
    /// Link shown until the form is first submitted
    href: String,
    /// Text of the link
    cta: String,
) -> Element {
    let fields = use_field_store();
    let manifest = use_asset_manifest();

    let mut card = use_signal({
        let name = name.clone();
        move || CardState::mount(fields, name, href)
    });

    let assets = use_hook({
        let name = name.clone();
        move || {
            let assets = load_assets(&manifest);
            tracing::info!(card = %name, count = assets.len(), "loaded gallery assets");
            Rc::new(assets)
        }
    });

    let card_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("bento-card {}", extra),
        _ => "bento-card".to_string(),
    };
    let state = card.read().clone();

    rsx! {
        div { class: "{card_class}",
            if let Some(background) = background {
                div { class: "bento-card__background", {background} }
            }

            div {
                class: "bento-card__content",
                onclick: move |e| e.stop_propagation(),

                h3 { class: "bento-card__title",
                    "{name}"
                    UrlForm {
                        fragment: state.fragment().to_string(),
                        suffix: state.suffix(),
                        on_fragment: move |s: String| card.write().set_fragment(s),
                        on_suffix: move |s| card.write().set_suffix(s),
                        on_submit: move |_| {
                            card.write().submit();
                        },
                    }
                }

                p { class: "bento-card__description", "{description}" }

                a {
                    class: "bento-card__cta",
                    href: state.link(),
                    target: "_blank",
                    rel: "noreferrer",
                    "{cta} \u{2192}"
                }

                GalleryOverlay { assets: assets }
            }
        }
    }
}
