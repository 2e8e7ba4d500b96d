//! Read-only catalog store.

use crate::catalog::data::{builtin_categories, builtin_products};
use crate::catalog::{Category, Product};
use std::sync::LazyLock;

/// Maximum number of products in the featured section.
pub const FEATURED_LIMIT: usize = 6;

/// Below this many best sellers, the featured section shows the first
/// products of the catalog instead.
pub const FEATURED_MIN_BEST_SELLERS: usize = 4;

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(builtin_products(), builtin_categories()));

/// The product catalog.
///
/// Fixed once constructed: there are no create, update or delete operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from products and categories.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The storefront's built-in catalog (8 products, 8 categories).
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All browse categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a product by id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Find a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    /// Products listed under a browse category.
    pub fn products_in(&self, category_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id.as_str() == category_id)
            .collect()
    }

    /// Products for the home page's featured section.
    ///
    /// Best sellers, capped at [`FEATURED_LIMIT`]. When fewer than
    /// [`FEATURED_MIN_BEST_SELLERS`] exist, the first [`FEATURED_LIMIT`]
    /// catalog products are used instead.
    pub fn featured(&self) -> Vec<&Product> {
        let best_sellers: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.is_best_seller)
            .take(FEATURED_LIMIT)
            .collect();

        if best_sellers.len() >= FEATURED_MIN_BEST_SELLERS {
            best_sellers
        } else {
            self.products.iter().take(FEATURED_LIMIT).collect()
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories().len(), 8);

        let cabinet = catalog.find("1").unwrap();
        assert_eq!(cabinet.name, "Antique Hand Carved Cabinet");
        assert_eq!(cabinet.price, Money::kwd(450_000));
        assert_eq!(cabinet.original_price, Some(Money::kwd(520_000)));
        assert!(cabinet.is_best_seller);

        assert!(catalog.find("99").is_none());
    }

    #[test]
    fn test_every_product_has_a_known_category() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            assert!(
                catalog.category(product.category_id.as_str()).is_some(),
                "product {} has unknown category {}",
                product.id,
                product.category_id
            );
        }
    }

    #[test]
    fn test_products_in_category() {
        let catalog = Catalog::builtin();
        let journals = catalog.products_in("journals");
        assert_eq!(journals.len(), 1);
        assert_eq!(journals[0].id.as_str(), "8");
        assert!(catalog.products_in("nothing").is_empty());
    }

    #[test]
    fn test_featured_falls_back_with_few_best_sellers() {
        // The built-in catalog has three best sellers, below the minimum.
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_featured_uses_best_sellers_when_enough() {
        let mut products = builtin_products();
        for id in ["2", "4"] {
            products
                .iter_mut()
                .find(|p| p.id.as_str() == id)
                .unwrap()
                .is_best_seller = true;
        }
        let catalog = Catalog::new(products, builtin_categories());

        let ids: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "6"]);
    }
}
