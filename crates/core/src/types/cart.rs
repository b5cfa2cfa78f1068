//! The cart collection and its mutation rules.
//!
//! [`Cart`] is the pure in-memory model: an ordered sequence of line items,
//! unique by product id, with insertion order preserved. All I/O (loading and
//! mirroring to storage) lives in the `gomarket-cart` crate; the rules here
//! are synchronous and total.

use serde::{Deserialize, Serialize};

use crate::types::{LineItem, Product, ProductId};

/// An ordered collection of line items, unique by product id.
///
/// Serializes as a bare JSON array of line items, which is exactly the blob
/// format the persistence layer stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct line items (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same id is already present, the entry is replaced
    /// wholesale with the incoming product's fields and its quantity bumped
    /// by one - title, price, and image URL come from the new product, not
    /// the stored item. Otherwise the product is appended with quantity 1.
    pub fn add(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == product.id) {
            let quantity = existing.quantity.saturating_add(1);
            *existing = LineItem::new(product, quantity);
        } else {
            self.items.push(LineItem::new(product, 1));
        }
    }

    /// Increase the quantity of the item with `id` by one.
    ///
    /// Absent ids are a no-op; no entry is created.
    pub fn increment(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrease the quantity of the item with `id` by one.
    ///
    /// An item reaching quantity 0 is removed entirely. Absent ids are a
    /// no-op.
    pub fn decrement(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = item.quantity.saturating_sub(1);
        }
        self.items.retain(|item| item.quantity > 0);
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = core::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, title: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            image_url: format!("https://img.example/{id}.png"),
            price: Decimal::new(price, 0),
        }
    }

    #[test]
    fn test_add_distinct_ids_each_quantity_one() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("b", "Hat", 50));
        cart.add(product("c", "Sock", 10));

        assert_eq!(cart.len(), 3);
        assert!(cart.items().iter().all(|item| item.quantity == 1));
    }

    #[test]
    fn test_add_existing_id_increments_without_growing() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("a", "Shoe", 100));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_existing_id_overwrites_fields_from_new_product() {
        // Repeat adds replace title/price/image wholesale from the incoming
        // product. This mirrors the storefront behavior where the catalog's
        // current listing wins over what was captured at first add.
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("a", "Shoe (sale)", 80));

        let item = cart.get(&ProductId::new("a")).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.title, "Shoe (sale)");
        assert_eq!(item.price, Decimal::new(80, 0));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("b", "Hat", 50));
        cart.add(product("a", "Shoe", 100));

        let ids: Vec<&str> = cart.items().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_increment_present_id() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.increment(&ProductId::new("a"));

        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 2);
    }

    #[test]
    fn test_increment_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.increment(&ProductId::new("ghost"));

        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("ghost")).is_none());
    }

    #[test]
    fn test_decrement_above_one_keeps_item() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.increment(&ProductId::new("a"));
        cart.decrement(&ProductId::new("a"));

        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrement_at_one_removes_item() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.decrement(&ProductId::new("a"));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.decrement(&ProductId::new("ghost"));

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_full_scenario() {
        let mut cart = Cart::new();
        let id = ProductId::new("a");

        cart.add(product("a", "Shoe", 100));
        assert_eq!(cart.get(&id).unwrap().quantity, 1);

        cart.add(product("a", "Shoe", 100));
        assert_eq!(cart.get(&id).unwrap().quantity, 2);

        cart.increment(&id);
        assert_eq!(cart.get(&id).unwrap().quantity, 3);

        cart.decrement(&id);
        assert_eq!(cart.get(&id).unwrap().quantity, 2);

        cart.decrement(&id);
        cart.decrement(&id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("a", "Shoe", 100));
        cart.add(product("b", "Hat", 50));

        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));
        cart.add(product("b", "Hat", 50));
        cart.increment(&ProductId::new("b"));

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::new();
        cart.add(product("a", "Shoe", 100));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
