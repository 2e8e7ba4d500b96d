//! Filtering and ordering of the product listing.

use crate::catalog::Product;
use crate::search::filter::matches_query;
use crate::search::{CatalogQuery, SortKey};
use heritage_i18n::Language;
use std::cmp::Ordering;

/// Run a query over a product list.
///
/// Filters by category and inclusive price range, then sorts by the query's
/// key. The sort is stable, so ties keep their order from `products`. An
/// empty result is a valid answer, including for an inverted price range.
///
/// ```
/// use heritage_commerce::catalog::Catalog;
/// use heritage_commerce::search::{query_catalog, CatalogQuery, SortKey};
/// use heritage_i18n::Language;
///
/// let query = CatalogQuery::new().with_sort(SortKey::PriceLow);
/// let listing = query_catalog(Catalog::builtin().products(), &query, Language::En);
/// assert_eq!(listing.first().unwrap().name, "Handcrafted Leather Journal");
/// ```
pub fn query_catalog<'a>(
    products: &'a [Product],
    query: &CatalogQuery,
    language: Language,
) -> Vec<&'a Product> {
    let mut results: Vec<&Product> = products
        .iter()
        .filter(|product| matches_query(product, query))
        .collect();

    sort_products(&mut results, query.sort, language);

    tracing::trace!(
        total = products.len(),
        matched = results.len(),
        sort = %query.sort,
        "catalog query"
    );
    results
}

/// Stable in-place sort of a listing.
pub fn sort_products(products: &mut [&Product], key: SortKey, language: Language) {
    match key {
        // `false < true`, so flagged products lead.
        SortKey::Bestseller => products.sort_by_key(|p| !p.is_best_seller),
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        SortKey::PriceLow => products.sort_by_key(|p| p.price.amount_minor),
        SortKey::PriceHigh => products.sort_by_key(|p| std::cmp::Reverse(p.price.amount_minor)),
        SortKey::Name => products.sort_by(|a, b| {
            compare_names(a.display_name(language), b.display_name(language))
        }),
    }
}

/// Case-insensitive code-point order, ties broken by the raw names.
/// There is no locale collation: accented initials sort after `z`.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
