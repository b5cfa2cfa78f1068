//! Newtype product identifier.
//!
//! Product ids come from the catalog as opaque strings; wrapping them keeps
//! them from being confused with titles, image URLs, or other stringly data.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier.
///
/// Item identity in the cart is solely the product id; two line items never
/// share one. The id is treated as an opaque string - no format is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let id = ProductId::new("sku-42");
        assert_eq!(format!("{id}"), "sku-42");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("sku-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"sku-42\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_and_string() {
        assert_eq!(ProductId::from("a"), ProductId::from("a".to_owned()));
    }
}
