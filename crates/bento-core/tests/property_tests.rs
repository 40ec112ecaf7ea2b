//! Property-based tests for card fields and asset filtering
//!
//! Uses proptest to verify the invariants the gallery and the URL form rely on.

use std::sync::Arc;

use bento_core::{filter_assets, Asset, FieldPair, FieldStore, MemoryStore, Suffix};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// ASCII titles, so case folding is symmetric
fn title_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ -]{1,24}").expect("valid regex")
}

fn assets_strategy() -> impl Strategy<Value = Vec<Asset>> {
    prop::collection::vec(title_strategy(), 0..40).prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| Asset {
                source: format!("data:image/png;base64,{}", i),
                title,
            })
            .collect()
    })
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ -]{0,4}").expect("valid regex")
}

fn suffix_strategy() -> impl Strategy<Value = Suffix> {
    (0..Suffix::ALL.len()).prop_map(|i| Suffix::ALL[i])
}

/// True when `sub` appears in `full` in the same relative order
fn is_ordered_subset(sub: &[Asset], full: &[Asset]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate == wanted))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Filtering only ever drops assets, never reorders or invents them
    #[test]
    fn filter_is_ordered_subset(assets in assets_strategy(), term in term_strategy()) {
        let filtered = filter_assets(&assets, &term);
        prop_assert!(filtered.len() <= assets.len());
        prop_assert!(is_ordered_subset(&filtered, &assets));
    }

    /// Every kept asset matches, every dropped asset does not
    #[test]
    fn filter_keeps_exactly_matches(assets in assets_strategy(), term in term_strategy()) {
        let filtered = filter_assets(&assets, &term);
        let expected = assets
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&term.to_lowercase()))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    /// The empty term is the identity
    #[test]
    fn empty_term_is_identity(assets in assets_strategy()) {
        prop_assert_eq!(filter_assets(&assets, ""), assets);
    }

    /// Upper- and lower-case spellings of a term select the same assets
    #[test]
    fn filter_ignores_case(assets in assets_strategy(), term in term_strategy()) {
        prop_assert_eq!(
            filter_assets(&assets, &term.to_uppercase()),
            filter_assets(&assets, &term.to_lowercase())
        );
    }

    /// Any fragment and suffix survive a save/load cycle
    #[test]
    fn field_pair_roundtrip(
        name in "[a-zA-Z ]{1,16}",
        fragment in ".{0,64}",
        suffix in suffix_strategy(),
    ) {
        let fields = FieldStore::new(Arc::new(MemoryStore::new()));
        let pair = FieldPair::new(fragment, suffix);
        fields.save(&name, &pair);
        prop_assert_eq!(fields.load(&name), pair);
    }

    /// The last save wins
    #[test]
    fn later_save_overwrites(
        first in ".{0,32}",
        second in ".{0,32}",
        suffix in suffix_strategy(),
    ) {
        let fields = FieldStore::new(Arc::new(MemoryStore::new()));
        fields.save("card", &FieldPair::new(first, Suffix::Com));
        fields.save("card", &FieldPair::new(second.clone(), suffix));
        prop_assert_eq!(fields.load("card"), FieldPair::new(second, suffix));
    }

    /// Derived links are the fragment wrapped in scheme and suffix
    #[test]
    fn derived_link_shape(fragment in "[a-z0-9-]{0,20}", suffix in suffix_strategy()) {
        let href = FieldPair::new(fragment.clone(), suffix).href();
        prop_assert_eq!(href, format!("https://{}{}", fragment, suffix.as_str()));
    }
}
