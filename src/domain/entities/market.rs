//! # Market Entity
//!
//! A seller location. Only active markets take part in comparisons.

use crate::domain::value_objects::MarketId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A market (seller location).
///
/// # Examples
///
/// ```
/// use smart_basket::domain::entities::Market;
///
/// let market = Market::new("m-1", "Corner Market").with_logo_url("https://cdn/logo.png");
/// assert!(market.is_active());
/// assert_eq!(market.logo_url(), Some("https://cdn/logo.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    id: MarketId,
    name: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    logo_url: Option<String>,
    active: bool,
}

impl Market {
    /// Creates an active market without logo or location.
    #[must_use]
    pub fn new(id: impl Into<MarketId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: None,
            logo_url: None,
            active: true,
        }
    }

    /// Sets the logo reference.
    #[must_use]
    pub fn with_logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }

    /// Sets the location label.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Returns the market id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &MarketId {
        &self.id
    }

    /// Returns the market name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the location label, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the logo reference, if any.
    #[must_use]
    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref()
    }

    /// Returns true if the market participates in comparisons.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Market({} '{}')", self.id, self.name)
    }
}
