//! Persisted URL-builder fields, one pair per card.
//!
//! A card named `name` owns two slots in the storage medium:
//! - `input-<name>`: the fragment the user typed
//! - `suffix-<name>`: the selected [`Suffix`]
//!
//! Names must be unique among cards sharing a medium, otherwise their slots
//! collide.

use std::fmt;
use std::sync::Arc;

use crate::storage::KeyValueStore;
use crate::suffix::Suffix;

/// Storage key of a card's fragment slot
pub fn fragment_key(name: &str) -> String {
    format!("input-{}", name)
}

/// Storage key of a card's suffix slot
pub fn suffix_key(name: &str) -> String {
    format!("suffix-{}", name)
}

/// Build the destination link from a fragment and a suffix.
///
/// No validation or escaping: `("example", Io)` gives `https://example.io`.
pub fn derive_link(fragment: &str, suffix: Suffix) -> String {
    format!("https://{}{}", fragment, suffix)
}

/// The two values a card's form edits.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldPair {
    pub fragment: String,
    pub suffix: Suffix,
}

impl FieldPair {
    pub fn new(fragment: impl Into<String>, suffix: Suffix) -> Self {
        Self {
            fragment: fragment.into(),
            suffix,
        }
    }

    /// The link this pair currently describes
    pub fn href(&self) -> String {
        derive_link(&self.fragment, self.suffix)
    }
}

/// Card-scoped view over a shared [`KeyValueStore`].
#[derive(Clone)]
pub struct FieldStore {
    kv: Arc<dyn KeyValueStore>,
}

impl FieldStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read both slots for `name`.
    ///
    /// Unwritten slots fall back to `""` and `.com`. A suffix slot holding
    /// text that is not a legal suffix also falls back to `.com`.
    pub fn load(&self, name: &str) -> FieldPair {
        let fragment = self.kv.get(&fragment_key(name)).unwrap_or_default();
        let suffix = match self.kv.get(&suffix_key(name)) {
            Some(raw) => Suffix::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(card = name, suffix = %raw, "ignoring unknown stored suffix");
                Suffix::default()
            }),
            None => Suffix::default(),
        };

        FieldPair { fragment, suffix }
    }

    /// Write both slots for `name`, overwriting whatever was there.
    pub fn save(&self, name: &str, pair: &FieldPair) {
        tracing::debug!(card = name, fragment = %pair.fragment, suffix = %pair.suffix, "saving card fields");
        self.kv.set(&fragment_key(name), &pair.fragment);
        self.kv.set(&suffix_key(name), pair.suffix.as_str());
    }
}

impl fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn memory_fields() -> (Arc<MemoryStore>, FieldStore) {
        let kv = Arc::new(MemoryStore::new());
        let fields = FieldStore::new(kv.clone());
        (kv, fields)
    }

    #[test]
    fn load_before_save_gives_defaults() {
        let (_, fields) = memory_fields();
        let pair = fields.load("Search");
        assert_eq!(pair.fragment, "");
        assert_eq!(pair.suffix, Suffix::Com);
    }

    #[test]
    fn save_then_load() {
        let (_, fields) = memory_fields();
        let pair = FieldPair::new("example", Suffix::Io);
        fields.save("Search", &pair);
        assert_eq!(fields.load("Search"), pair);
    }

    #[test]
    fn keys_are_scoped_by_name() {
        let (kv, fields) = memory_fields();
        fields.save("Mail", &FieldPair::new("proton", Suffix::Me));

        assert_eq!(kv.get("input-Mail").as_deref(), Some("proton"));
        assert_eq!(kv.get("suffix-Mail").as_deref(), Some(".me"));
        assert_eq!(fields.load("News"), FieldPair::default());
    }

    #[test]
    fn unknown_stored_suffix_falls_back() {
        let (kv, fields) = memory_fields();
        kv.set("input-Mail", "proton");
        kv.set("suffix-Mail", ".xyz");

        let pair = fields.load("Mail");
        assert_eq!(pair.fragment, "proton");
        assert_eq!(pair.suffix, Suffix::Com);
    }

    #[test]
    fn slots_default_independently() {
        let (kv, fields) = memory_fields();
        kv.set("suffix-Wiki", ".org");
        assert_eq!(fields.load("Wiki"), FieldPair::new("", Suffix::Org));
    }

    #[test]
    fn derived_link() {
        assert_eq!(derive_link("example", Suffix::Io), "https://example.io");
        assert_eq!(FieldPair::default().href(), "https://.com");
    }
}
