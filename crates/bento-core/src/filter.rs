//! Title search over the asset inventory.

use crate::assets::Asset;

/// Assets whose title contains `term`, ignoring case, in inventory order.
///
/// An empty term matches everything. The inventory itself is never touched;
/// the result is a fresh vector.
pub fn filter_assets(assets: &[Asset], term: &str) -> Vec<Asset> {
    if term.is_empty() {
        return assets.to_vec();
    }

    let needle = term.to_lowercase();
    assets
        .iter()
        .filter(|asset| asset.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
