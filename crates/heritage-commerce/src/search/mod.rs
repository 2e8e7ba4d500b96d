//! Search module.
//!
//! Contains the listing query state and the engine that filters and sorts
//! the catalog with it.

mod engine;
mod filter;
mod query;

pub use engine::{query_catalog, sort_products};
pub use filter::{matches_category, matches_query};
pub use query::{
    CatalogQuery, CategoryMatch, PriceRange, SortKey, DEFAULT_PRICE_MAX_KWD,
    DEFAULT_PRICE_MIN_KWD,
};
