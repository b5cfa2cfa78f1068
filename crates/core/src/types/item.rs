//! Product and line item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product as presented by the catalog, before it carries a quantity.
///
/// This is the input shape for adding to the cart: everything a [`LineItem`]
/// holds except the quantity counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product id (cart identity).
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price in the store currency.
    pub price: Decimal,
}

/// A product in the cart with its quantity.
///
/// Invariant: `quantity >= 1` while the item is present. An item whose
/// quantity would reach zero is removed from the cart entirely rather than
/// kept as a zero-quantity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product id (cart identity).
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Product image URL.
    pub image_url: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Number of units in the cart, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item from a product and a quantity.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity,
        }
    }
}

impl From<LineItem> for Product {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product {
            id: ProductId::new("a"),
            title: "Shoe".to_owned(),
            image_url: "https://img.example/shoe.png".to_owned(),
            price: Decimal::new(100, 0),
        }
    }

    #[test]
    fn test_new_carries_product_fields() {
        let item = LineItem::new(shoe(), 3);
        assert_eq!(item.id, ProductId::new("a"));
        assert_eq!(item.title, "Shoe");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_serde_field_names() {
        let item = LineItem::new(shoe(), 1);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "a");
        assert_eq!(json["title"], "Shoe");
        assert_eq!(json["image_url"], "https://img.example/shoe.png");
        assert_eq!(json["quantity"], 1);
    }
}
