//! The cards shown in the popup.

/// Static description of one bento card
#[derive(Clone, PartialEq, Debug)]
pub struct CardSpec {
    /// Card title, also scopes its persisted fields
    pub name: &'static str,
    pub description: &'static str,
    /// Link shown until the form is submitted
    pub href: &'static str,
    pub cta: &'static str,
    /// Extra grid classes, e.g. for column spans
    pub class: Option<&'static str>,
}

/// Default deck. Every name is unique so no two cards share storage slots.
pub fn default_cards() -> Vec<CardSpec> {
    vec![
        CardSpec {
            name: "Search",
            description: "Your search engine of choice.",
            href: "https://duckduckgo.com",
            cta: "Go",
            class: Some("col-span-2"),
        },
        CardSpec {
            name: "Mail",
            description: "Open your inbox.",
            href: "https://proton.me",
            cta: "Open",
            class: None,
        },
        CardSpec {
            name: "Code",
            description: "Where your repositories live.",
            href: "https://codeberg.org",
            cta: "Browse",
            class: None,
        },
        CardSpec {
            name: "News",
            description: "Morning reading.",
            href: "https://lwn.net",
            cta: "Read",
            class: Some("col-span-2"),
        },
    ]
}
