//! Domain-style suffixes offered by the URL-builder form.

use std::fmt;

/// One of the fixed suffixes a card link may end with.
///
/// These are the only legal values for a card's suffix slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Suffix {
    #[default]
    Com,
    Org,
    Net,
    Io,
    Co,
    Us,
    Info,
    Biz,
    Me,
}

impl Suffix {
    /// Every option, in the order the selector lists them
    pub const ALL: [Suffix; 9] = [
        Suffix::Com,
        Suffix::Org,
        Suffix::Net,
        Suffix::Io,
        Suffix::Co,
        Suffix::Us,
        Suffix::Info,
        Suffix::Biz,
        Suffix::Me,
    ];

    /// Returns the literal text appended to the fragment, dot included
    pub fn as_str(&self) -> &'static str {
        match self {
            Suffix::Com => ".com",
            Suffix::Org => ".org",
            Suffix::Net => ".net",
            Suffix::Io => ".io",
            Suffix::Co => ".co",
            Suffix::Us => ".us",
            Suffix::Info => ".info",
            Suffix::Biz => ".biz",
            Suffix::Me => ".me",
        }
    }

    /// Parse the literal form (`".io"`). Anything else is not a suffix.
    pub fn parse(s: &str) -> Option<Suffix> {
        Suffix::ALL.into_iter().find(|suffix| suffix.as_str() == s)
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
