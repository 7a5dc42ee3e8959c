//! # Basket
//!
//! The shopper's set of requested reference items.
//!
//! A basket is ephemeral: it exists for one comparison and is never
//! persisted. Duplicate ids collapse to their first occurrence.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::value_objects::{Basket, ReferenceItemId};
//!
//! let basket = Basket::new(["milk", "bread", "milk"].map(ReferenceItemId::new)).unwrap();
//! assert_eq!(basket.len(), 2);
//! assert!(Basket::new(Vec::new()).is_err());
//! ```

use crate::domain::entities::ReferenceItem;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::ReferenceItemId;
use std::collections::{HashMap, HashSet};

/// Deduplicated, non-empty list of reference item ids in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    item_ids: Vec<ReferenceItemId>,
}

impl Basket {
    /// Builds a basket from raw ids.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if no ids are given.
    pub fn new<I>(ids: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = ReferenceItemId>,
    {
        let mut seen = HashSet::new();
        let item_ids: Vec<ReferenceItemId> = ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        if item_ids.is_empty() {
            return Err(DomainError::invalid_input(
                "basket must contain at least one reference item",
            ));
        }

        Ok(Self { item_ids })
    }

    /// Returns the ids in first-seen order.
    #[must_use]
    pub fn item_ids(&self) -> &[ReferenceItemId] {
        &self.item_ids
    }

    /// Returns the number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    /// Always false; an empty basket cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    /// Resolves every id against the catalog.
    ///
    /// Inactive items are dropped from the basket. When the catalog holds
    /// the same id twice, an active entry beats an inactive one, then the
    /// lowest name wins.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` naming every id that is unknown,
    /// or when every requested item is inactive.
    pub fn resolve<'a>(
        &self,
        catalog: &'a [ReferenceItem],
    ) -> DomainResult<Vec<&'a ReferenceItem>> {
        let mut by_id: HashMap<&ReferenceItemId, &ReferenceItem> =
            HashMap::with_capacity(catalog.len());
        for item in catalog {
            by_id
                .entry(item.id())
                .and_modify(|kept| {
                    if catalog_key(item) < catalog_key(kept) {
                        *kept = item;
                    }
                })
                .or_insert(item);
        }

        let mut resolved = Vec::with_capacity(self.item_ids.len());
        let mut unknown = Vec::new();
        let mut inactive = Vec::new();

        for id in &self.item_ids {
            match by_id.get(id) {
                Some(item) if item.is_active() => resolved.push(*item),
                Some(_) => inactive.push(id.as_str()),
                None => unknown.push(id.as_str()),
            }
        }

        if !unknown.is_empty() {
            return Err(DomainError::invalid_input(format!(
                "unknown reference item ids: {}",
                unknown.join(", ")
            )));
        }
        if resolved.is_empty() {
            return Err(DomainError::invalid_input(format!(
                "all requested reference items are inactive: {}",
                inactive.join(", ")
            )));
        }
        if !inactive.is_empty() {
            tracing::debug!(
                dropped = %inactive.join(", "),
                "inactive reference items dropped from basket"
            );
        }

        Ok(resolved)
    }
}

fn catalog_key(item: &ReferenceItem) -> (bool, &str, &str) {
    (!item.is_active(), item.name(), item.category())
}
