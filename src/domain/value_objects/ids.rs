//! # Identifiers
//!
//! Opaque string identifiers for catalog entities.
//!
//! Identifiers are supplied by the external data layer and are never
//! generated here. They order lexically, which is what market tie-breaks
//! rely on.
//!
//! # Examples
//!
//! ```
//! use smart_basket::domain::value_objects::MarketId;
//!
//! let a = MarketId::new("market-a");
//! let b = MarketId::new("market-b");
//! assert!(a < b);
//! assert_eq!(a.as_str(), "market-a");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a catalog reference item.
    ReferenceItemId
);

string_id!(
    /// Identifier of a market (seller location).
    MarketId
);

string_id!(
    /// Identifier of a market-specific listing of a reference item.
    MarketItemId
);
