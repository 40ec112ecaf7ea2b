//! Suffix selector for the URL-builder form.

use bento_core::Suffix;
use dioxus::prelude::*;

/// Dropdown of every [`Suffix`], with a chevron drawn over its right edge.
///
/// Values outside the fixed option set cannot be produced: a change event
/// carrying unknown text is ignored.
///
/// # Example
///
/// ```rust,ignore
/// let mut suffix = use_signal(Suffix::default);
///
/// rsx! {
///     SuffixSelect {
///         value: suffix(),
///         on_change: move |s| suffix.set(s)
///     }
/// }
/// ```
#[component]
pub fn SuffixSelect(value: Suffix, on_change: EventHandler<Suffix>) -> Element {
    rsx! {
        div { class: "suffix-select",
            select {
                class: "suffix-select__input",
                "aria-label": "Domain suffix",
                value: value.as_str(),
                onchange: move |e| {
                    if let Some(suffix) = Suffix::parse(&e.value()) {
                        on_change.call(suffix);
                    }
                },
                for choice in Suffix::ALL {
                    option {
                        value: choice.as_str(),
                        selected: choice == value,
                        "{choice}"
                    }
                }
            }
            span { class: "suffix-select__chevron", "aria-hidden": "true", "\u{25BE}" }
        }
    }
}
