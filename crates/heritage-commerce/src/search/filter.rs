//! Product predicates used by the query engine.

use crate::catalog::Product;
use crate::search::{CatalogQuery, CategoryMatch};
use std::collections::BTreeSet;

/// Whether the product passes the category filter.
///
/// An empty selection passes everything.
pub fn matches_category(
    product: &Product,
    selected: &BTreeSet<String>,
    mode: CategoryMatch,
) -> bool {
    if selected.is_empty() {
        return true;
    }

    match mode {
        CategoryMatch::Substring => {
            let label = product.category.to_lowercase();
            let label_ar = product.category_ar.to_lowercase();
            selected.iter().any(|category| {
                let needle = category.to_lowercase();
                label.contains(&needle) || label_ar.contains(&needle)
            })
        }
        CategoryMatch::Exact => selected.contains(product.category_id.as_str()),
    }
}

/// Whether the product passes every filter in the query.
pub fn matches_query(product: &Product, query: &CatalogQuery) -> bool {
    matches_category(product, &query.selected_categories, query.category_match)
        && query.price_range.contains(&product.price)
}
