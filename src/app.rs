use dioxus::prelude::*;

use crate::components::{BentoCard, BentoGrid};
use crate::deck::default_cards;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and lays the default deck out on the bento grid.
/// The [`PopupContext`](crate::context::PopupContext) is supplied by the
/// launcher.
#[component]
pub fn App() -> Element {
    let cards = use_hook(default_cards);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "popup",
            h1 { class: "popup-title", "Hello" }
            BentoGrid {
                for card in cards {
                    BentoCard {
                        key: "{card.name}",
                        name: card.name.to_string(),
                        class: card.class.unwrap_or_default().to_string(),
                        background: rsx! { div { class: "bento-card__grain" } },
                        description: card.description.to_string(),
                        href: card.href.to_string(),
                        cta: card.cta.to_string(),
                    }
                }
            }
        }
    }
}
