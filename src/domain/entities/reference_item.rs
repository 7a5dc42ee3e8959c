//! # Reference Item Entity
//!
//! Canonical, market-independent catalog product.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::entities::ReferenceItem;
//!
//! let milk = ReferenceItem::new("milk", "Milk 1L", "Dairy");
//! assert!(milk.is_active());
//! assert_eq!(milk.category(), "Dairy");
//! ```

use crate::domain::value_objects::ReferenceItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry. Identity is the id; name and category are display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceItem {
    id: ReferenceItemId,
    name: String,
    #[serde(default)]
    category: String,
    active: bool,
}

impl ReferenceItem {
    /// Creates an active reference item.
    #[must_use]
    pub fn new(
        id: impl Into<ReferenceItemId>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            active: true,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the item id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ReferenceItemId {
        &self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns true if the item is active in the catalog.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for ReferenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReferenceItem({} '{}')", self.id, self.name)
    }
}
