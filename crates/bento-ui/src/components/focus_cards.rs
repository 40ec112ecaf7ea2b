//! Focus Cards Component
//!
//! Grid of image tiles where hovering one tile brings it forward: its title
//! overlay fades in while every sibling blurs and shrinks slightly.

use bento_core::{Asset, HoverState, TileEmphasis};
use dioxus::prelude::*;

/// Properties for the FocusCards component
#[derive(Clone, PartialEq, Props)]
pub struct FocusCardsProps {
    /// Tiles to show, in order
    pub cards: Vec<Asset>,
    /// Print each title above its tile as well as in the hover overlay
    #[props(default = false)]
    pub captioned: bool,
    /// Rendered instead of the grid when `cards` is empty
    #[props(default)]
    pub empty_message: Option<String>,
}

/// Hoverable image grid
///
/// Hover state belongs to this instance only and is never persisted. It is
/// cleared whenever `cards` changes.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FocusCards {
///         cards: filter_assets(&assets, &term),
///         captioned: true,
///     }
/// }
/// ```
#[component]
pub fn FocusCards(props: FocusCardsProps) -> Element {
    let mut hover = use_signal(HoverState::new);

    // A new tile list invalidates the hovered index
    use_effect(use_reactive((&props.cards,), move |(_cards,)| {
        if hover.peek().index().is_some() {
            hover.write().clear();
        }
    }));

    if props.cards.is_empty() {
        return rsx! {
            if let Some(message) = &props.empty_message {
                p { class: "focus-cards-empty", "{message}" }
            }
        };
    }

    let state = hover();

    rsx! {
        div { class: "focus-cards",
            for (index, card) in props.cards.iter().enumerate() {
                FocusTile {
                    key: "{index}",
                    card: card.clone(),
                    emphasis: state.emphasis(index),
                    captioned: props.captioned,
                    on_enter: move |_| hover.write().enter(index),
                    on_leave: move |_| hover.write().leave(),
                }
            }
        }
    }
}

/// A single tile of the grid
#[component]
fn FocusTile(
    card: Asset,
    emphasis: TileEmphasis,
    captioned: bool,
    on_enter: EventHandler<()>,
    on_leave: EventHandler<()>,
) -> Element {
    let overlay_class = if emphasis.shows_title() {
        "focus-card__overlay visible"
    } else {
        "focus-card__overlay"
    };

    rsx! {
        div {
            class: emphasis.class(),
            onmouseenter: move |_| on_enter.call(()),
            onmouseleave: move |_| on_leave.call(()),

            if captioned {
                h3 { class: "focus-card__caption", "{card.title}" }
            }
            img {
                class: "focus-card__img",
                src: "{card.source}",
                alt: "{card.title}",
                "loading": "lazy",
            }
            div { class: overlay_class,
                div { class: "focus-card__title", "{card.title}" }
            }
        }
    }
}
