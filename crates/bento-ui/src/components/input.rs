//! Input Field Components
//!
//! Text inputs following the popup palette:
//! - Walnut background with brass border for the URL fragment
//! - Parchment search field for the gallery

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Accessible label, rendered visually hidden
    #[props(default)]
    pub label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut fragment = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: fragment(),
///         oninput: move |s| fragment.set(s),
///         placeholder: "google".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    // Assigned on mount so the label stays associated across renders
    let id = use_hook(next_input_id);
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        if let Some(label) = &props.label {
            label {
                class: "visually-hidden",
                r#for: "{id}",
                "{label}"
            }
        }
        input {
            id: "{id}",
            class: "{input_class}",
            r#type: "text",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Process-unique ID for a form element
fn next_input_id() -> String {
    static NEXT: AtomicU32 = AtomicU32::new(0);
    format!("input-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Search box pinned above the gallery grid
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called when search changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search by filename".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            input {
                class: "search-input",
                r#type: "search",
                "aria-label": "Search images",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
