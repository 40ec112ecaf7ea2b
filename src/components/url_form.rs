//! Inline URL-builder form: fragment input, suffix selector, submit.

use bento_core::Suffix;
use bento_ui::{Button, ButtonVariant, Input, SuffixSelect};
use dioxus::prelude::*;

/// Controlled form; the owning card holds the values.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     UrlForm {
///         fragment: card.read().fragment().to_string(),
///         suffix: card.read().suffix(),
///         on_fragment: move |s| card.write().set_fragment(s),
///         on_suffix: move |s| card.write().set_suffix(s),
///         on_submit: move |_| { card.write().submit(); },
///     }
/// }
/// ```
#[component]
pub fn UrlForm(
    /// Text typed before the suffix
    fragment: String,
    /// Currently selected suffix
    suffix: Suffix,
    on_fragment: EventHandler<String>,
    on_suffix: EventHandler<Suffix>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "url-form",
            div { class: "url-form__row",
                Input {
                    value: fragment,
                    oninput: move |s| on_fragment.call(s),
                    placeholder: "google".to_string(),
                    label: "Address".to_string(),
                    class: "url-form__fragment".to_string(),
                }
                SuffixSelect {
                    value: suffix,
                    on_change: move |s| on_suffix.call(s),
                }
                Button {
                    variant: ButtonVariant::Embossed,
                    onclick: move |_| on_submit.call(()),
                    "Submit"
                }
            }
        }
    }
}
