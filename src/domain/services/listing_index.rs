//! # Listing Index
//!
//! Lookup of the current listing for a (market, reference item) pair.
//!
//! At most one listing per pair should carry the current price. When the
//! snapshot violates that, the choice is made deterministically: a priced
//! listing beats an unpriced one, and among equals the lowest listing id
//! wins.

use crate::domain::entities::MarketItem;
use crate::domain::value_objects::{MarketId, ReferenceItemId};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Index of the chosen listing per (market, reference item) pair.
#[derive(Debug, Default)]
pub struct ListingIndex<'a> {
    chosen: HashMap<&'a MarketId, HashMap<&'a ReferenceItemId, &'a MarketItem>>,
    duplicates: usize,
}

impl<'a> ListingIndex<'a> {
    /// Indexes the listings whose reference item is in `wanted`.
    #[must_use]
    pub fn build<I>(market_items: I, wanted: &HashSet<&ReferenceItemId>) -> Self
    where
        I: IntoIterator<Item = &'a MarketItem>,
    {
        let mut chosen: HashMap<&'a MarketId, HashMap<&'a ReferenceItemId, &'a MarketItem>> =
            HashMap::new();
        let mut duplicates = 0;

        for item in market_items {
            if !wanted.contains(item.reference_item_id()) {
                continue;
            }
            let by_item = chosen.entry(item.market_id()).or_default();
            match by_item.get(item.reference_item_id()).copied() {
                None => {
                    by_item.insert(item.reference_item_id(), item);
                }
                Some(current) => {
                    duplicates += 1;
                    if prefer(item, current) == Ordering::Less {
                        by_item.insert(item.reference_item_id(), item);
                    }
                }
            }
        }

        if duplicates > 0 {
            tracing::warn!(
                duplicates,
                "multiple listings found for the same market and reference item"
            );
        }

        Self { chosen, duplicates }
    }

    /// Returns the chosen listing for the pair, if any.
    #[must_use]
    pub fn get(
        &self,
        market_id: &MarketId,
        reference_item_id: &ReferenceItemId,
    ) -> Option<&'a MarketItem> {
        self.chosen
            .get(market_id)
            .and_then(|by_item| by_item.get(reference_item_id))
            .copied()
    }

    /// Returns the number of listings that competed for an already taken pair.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }
}

/// Orders candidates: priced first, then by ascending listing id.
fn prefer(a: &MarketItem, b: &MarketItem) -> Ordering {
    b.is_priced()
        .cmp(&a.is_priced())
        .then_with(|| a.id().cmp(b.id()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Price;

    fn wanted(ids: &[ReferenceItemId]) -> HashSet<&ReferenceItemId> {
        ids.iter().collect()
    }

    #[test]
    fn ignores_unrequested_items() {
        let items = vec![MarketItem::new("mi-1", "m", "rice", "Rice")];
        let ids = vec![ReferenceItemId::new("milk")];
        let index = ListingIndex::build(&items, &wanted(&ids));
        assert!(index.get(&MarketId::new("m"), &ReferenceItemId::new("rice")).is_none());
    }

    #[test]
    fn priced_listing_beats_unpriced() {
        let items = vec![
            MarketItem::new("mi-1", "m", "milk", "Milk (old)"),
            MarketItem::new("mi-2", "m", "milk", "Milk")
                .with_current_price(Price::from_cents(100).unwrap()),
        ];
        let ids = vec![ReferenceItemId::new("milk")];
        let index = ListingIndex::build(&items, &wanted(&ids));
        let chosen = index
            .get(&MarketId::new("m"), &ReferenceItemId::new("milk"))
            .unwrap();
        assert_eq!(chosen.id().as_str(), "mi-2");
        assert_eq!(index.duplicate_count(), 1);
    }

    #[test]
    fn lowest_id_wins_regardless_of_input_order() {
        let a = MarketItem::new("mi-b", "m", "milk", "B")
            .with_current_price(Price::from_cents(100).unwrap());
        let b = MarketItem::new("mi-a", "m", "milk", "A")
            .with_current_price(Price::from_cents(200).unwrap());
        let ids = vec![ReferenceItemId::new("milk")];

        for items in [vec![a.clone(), b.clone()], vec![b.clone(), a.clone()]] {
            let index = ListingIndex::build(&items, &wanted(&ids));
            let chosen = index
                .get(&MarketId::new("m"), &ReferenceItemId::new("milk"))
                .unwrap();
            assert_eq!(chosen.id().as_str(), "mi-a");
        }
    }
}
