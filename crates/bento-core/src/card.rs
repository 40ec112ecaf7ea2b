//! Lifecycle of one card's URL-builder form.
//!
//! - `mount` reads the card's persisted fields once and writes them straight
//!   back, so a first-time card leaves its defaults in the store.
//! - Every edit saves the whole pair.
//! - The link only follows the fields on `submit`; before that it is the
//!   href the card was constructed with.

use crate::fields::{FieldPair, FieldStore};
use crate::suffix::Suffix;

/// Form values and current link of a mounted card.
#[derive(Clone, Debug)]
pub struct CardState {
    name: String,
    fields: FieldStore,
    pair: FieldPair,
    link: String,
}

impl CardState {
    /// Load the fields for `name` and persist them back unchanged.
    pub fn mount(fields: FieldStore, name: impl Into<String>, initial_href: impl Into<String>) -> Self {
        let name = name.into();
        let pair = fields.load(&name);
        fields.save(&name, &pair);

        Self {
            name,
            fields,
            pair,
            link: initial_href.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fragment(&self) -> &str {
        &self.pair.fragment
    }

    pub fn suffix(&self) -> Suffix {
        self.pair.suffix
    }

    /// Link the card's call-to-action points at
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.pair.fragment = fragment.into();
        self.fields.save(&self.name, &self.pair);
    }

    pub fn set_suffix(&mut self, suffix: Suffix) {
        self.pair.suffix = suffix;
        self.fields.save(&self.name, &self.pair);
    }

    /// Recompute the link from the current fields. Never navigates.
    pub fn submit(&mut self) -> &str {
        self.link = self.pair.href();
        tracing::debug!(card = %self.name, href = %self.link, "card link updated");
        &self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memory store that counts reads
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        reads: AtomicUsize,
    }

    impl KeyValueStore for CountingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) {
            self.inner.set(key, value);
        }
    }

    fn memory_fields() -> (Arc<MemoryStore>, FieldStore) {
        let kv = Arc::new(MemoryStore::new());
        (kv.clone(), FieldStore::new(kv))
    }

    #[test]
    fn mount_writes_defaults() {
        let (kv, fields) = memory_fields();
        let card = CardState::mount(fields, "Search", "https://duckduckgo.com");

        assert_eq!(card.fragment(), "");
        assert_eq!(card.suffix(), Suffix::Com);
        assert_eq!(kv.get("input-Search").as_deref(), Some(""));
        assert_eq!(kv.get("suffix-Search").as_deref(), Some(".com"));
    }

    #[test]
    fn link_is_stale_until_submit() {
        let (_, fields) = memory_fields();
        fields.save("Search", &FieldPair::new("example", Suffix::Io));

        let mut card = CardState::mount(fields, "Search", "https://duckduckgo.com");
        assert_eq!(card.fragment(), "example");
        assert_eq!(card.suffix(), Suffix::Io);
        assert_eq!(card.link(), "https://duckduckgo.com");

        assert_eq!(card.submit(), "https://example.io");
        assert_eq!(card.link(), "https://example.io");
    }

    #[test]
    fn every_edit_saves() {
        let (kv, fields) = memory_fields();
        let mut card = CardState::mount(fields, "Mail", "https://proton.me");

        card.set_fragment("fastmail");
        assert_eq!(kv.get("input-Mail").as_deref(), Some("fastmail"));

        card.set_suffix(Suffix::Org);
        assert_eq!(kv.get("suffix-Mail").as_deref(), Some(".org"));
        assert_eq!(kv.get("input-Mail").as_deref(), Some("fastmail"));

        // Edits alone leave the link untouched
        assert_eq!(card.link(), "https://proton.me");
    }

    #[test]
    fn submit_builds_https_link() {
        let (_, fields) = memory_fields();
        let mut card = CardState::mount(fields, "Code", "https://codeberg.org");
        card.set_fragment("example");
        card.set_suffix(Suffix::Io);
        assert_eq!(card.submit(), "https://example.io");
    }

    #[test]
    fn fields_read_only_at_mount() {
        let kv = Arc::new(CountingStore::default());
        let mut card = CardState::mount(FieldStore::new(kv.clone()), "News", "https://lwn.net");
        assert_eq!(kv.reads.load(Ordering::SeqCst), 2);

        card.set_fragment("lobste");
        card.set_suffix(Suffix::Us);
        card.submit();
        assert_eq!(kv.reads.load(Ordering::SeqCst), 2);
    }
}
