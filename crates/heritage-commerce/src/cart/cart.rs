//! Cart and line types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use chrono::{DateTime, Utc};
use heritage_i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Product fields copied into the cart when a product is added.
///
/// Later catalog changes never reach lines already in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    pub product_id: ProductId,
    pub name: String,
    pub name_ar: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            name_ar: product.name_ar.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to (looked up by id, not owned).
    pub product_id: ProductId,
    /// Product name at add time (denormalized for display).
    pub name: String,
    /// Arabic product name at add time.
    pub name_ar: String,
    /// Unit price at add time.
    pub price: Money,
    /// Image path at add time.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Free-text variant descriptor (e.g., "Large"), not validated.
    #[serde(default)]
    pub variant: Option<String>,
}

impl CartLine {
    /// Create a line with quantity 1.
    pub fn new(snapshot: ProductSnapshot, variant: Option<String>) -> Self {
        Self {
            product_id: snapshot.product_id,
            name: snapshot.name,
            name_ar: snapshot.name_ar,
            price: snapshot.price,
            image: snapshot.image,
            quantity: 1,
            variant,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }

    /// Name in the given language.
    pub fn display_name(&self, language: Language) -> &str {
        language.pick(&self.name, &self.name_ar)
    }
}

/// The cart's lines plus the operations that change them.
///
/// Every operation is total: bad input becomes a no-op and the return
/// value says whether anything changed. Persistence and change
/// notification live in [`CartStore`](crate::cart::CartStore).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product gains one unit and keeps the
    /// variant it was created with.
    pub fn add_item(&mut self, snapshot: ProductSnapshot, variant: Option<String>) -> bool {
        self.add_item_count(snapshot, variant, 1)
    }

    /// Add `count` units of a product in one step.
    ///
    /// Behaves like `count` calls to [`Cart::add_item`]. A `count` of 0 or
    /// less changes nothing.
    pub fn add_item_count(
        &mut self,
        snapshot: ProductSnapshot,
        variant: Option<String>,
        count: i64,
    ) -> bool {
        if count <= 0 {
            return false;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == snapshot.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(count);
            return true;
        }

        let mut line = CartLine::new(snapshot, variant);
        line.quantity = count;
        self.items.push(line);
        true
    }

    /// Remove the line for a product. Returns false if there was none.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|line| line.product_id.as_str() != product_id);
        self.items.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// A quantity of 0 or less removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self
            .items
            .iter_mut()
            .find(|line| line.product_id.as_str() == product_id)
        {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line. Returns false if the cart was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// The line for a product, if any.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.items
            .iter()
            .find(|line| line.product_id.as_str() == product_id)
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .map(CartLine::line_total)
            .fold(Money::zero(Currency::KWD), |acc, m| acc.saturating_add(&m))
    }

    /// Both aggregates at once.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Capture the cart for persistence.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            saved_at: Some(Utc::now()),
        }
    }

    /// Rebuild a cart from a persisted snapshot.
    ///
    /// Returns `None` when the snapshot breaks a cart invariant: a quantity
    /// below 1 or two lines for one product.
    pub fn from_snapshot(snapshot: CartSnapshot) -> Option<Self> {
        let mut seen = HashSet::new();
        let valid = snapshot
            .items
            .iter()
            .all(|line| line.quantity >= 1 && seen.insert(line.product_id.clone()));
        valid.then(|| Self {
            items: snapshot.items,
        })
    }
}

/// Persisted form of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub items: Vec<CartLine>,
    /// When the snapshot was written.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str, fils: i64) -> ProductSnapshot {
        ProductSnapshot {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            name_ar: format!("منتج {id}"),
            price: Money::kwd(fils),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_creates_then_increments() {
        let mut cart = Cart::default();
        assert!(cart.add_item(snapshot("1", 1_000), None));
        assert!(cart.add_item(snapshot("1", 1_000), None));
        assert!(cart.add_item(snapshot("1", 1_000), None));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_duplicate_add_keeps_first_snapshot_and_variant() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 1_000), Some("Small".into()));
        cart.add_item(snapshot("1", 9_999), Some("Large".into()));

        let line = cart.line("1").unwrap();
        assert_eq!(line.price, Money::kwd(1_000));
        assert_eq!(line.variant.as_deref(), Some("Small"));
    }

    #[test]
    fn test_add_item_count() {
        let mut cart = Cart::default();
        assert!(cart.add_item_count(snapshot("1", 1_000), Some("Small".into()), 4));
        assert_eq!(cart.line("1").unwrap().quantity, 4);

        assert!(cart.add_item_count(snapshot("1", 1_000), Some("Large".into()), 2));
        assert_eq!(cart.line("1").unwrap().quantity, 6);
        assert_eq!(cart.line("1").unwrap().variant.as_deref(), Some("Small"));

        assert!(!cart.add_item_count(snapshot("2", 1_000), None, 0));
        assert!(!cart.add_item_count(snapshot("2", 1_000), None, -3));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_huge_counts_saturate() {
        let mut cart = Cart::default();
        cart.add_item_count(snapshot("1", 1_000), None, i64::MAX);
        cart.add_item(snapshot("1", 1_000), None);
        assert_eq!(cart.line("1").unwrap().quantity, i64::MAX);
        assert_eq!(cart.total_price().amount_minor, i64::MAX);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 1_000), None);

        assert!(cart.update_quantity("1", 5));
        assert_eq!(cart.line("1").unwrap().quantity, 5);
        // Same value again is not a change.
        assert!(!cart.update_quantity("1", 5));
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 1_000), None);
        cart.add_item(snapshot("2", 1_000), None);

        assert!(cart.update_quantity("1", 0));
        assert!(cart.update_quantity("2", -4));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 1_000), None);
        let before = cart.clone();

        assert!(!cart.update_quantity("nope", 3));
        assert!(!cart.update_quantity("nope", 0));
        assert!(!cart.remove_item("nope"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 85_500), None);
        cart.add_item(snapshot("1", 85_500), None);
        cart.add_item(snapshot("2", 28_500), None);

        let totals = cart.totals();
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, Money::kwd(199_500));
        assert_eq!(cart.line("1").unwrap().line_total(), Money::kwd(171_000));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::default();
        assert!(!cart.clear());
        cart.add_item(snapshot("1", 1_000), None);
        assert!(cart.clear());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::default();
        for id in ["3", "1", "2", "1"] {
            cart.add_item(snapshot(id, 1_000), None);
        }
        let ids: Vec<&str> = cart.items().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_from_snapshot_rejects_broken_invariants() {
        let mut cart = Cart::default();
        cart.add_item(snapshot("1", 1_000), None);

        let mut zero = cart.snapshot();
        zero.items[0].quantity = 0;
        assert!(Cart::from_snapshot(zero).is_none());

        let mut dup = cart.snapshot();
        dup.items.push(dup.items[0].clone());
        assert!(Cart::from_snapshot(dup).is_none());

        let restored = Cart::from_snapshot(cart.snapshot()).unwrap();
        assert_eq!(restored, cart);
    }
}
