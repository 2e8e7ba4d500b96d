//! Product catalog module.
//!
//! Contains types for products, browse categories, and the read-only
//! catalog store.

mod category;
mod data;
mod product;
mod store;

pub use category::Category;
pub use product::{
    Badge, Product, ProductVariants, StockStatus, CARD_LOW_STOCK_THRESHOLD,
    DETAIL_LOW_STOCK_THRESHOLD, MAX_BADGES,
};
pub use store::{Catalog, FEATURED_LIMIT, FEATURED_MIN_BEST_SELLERS};
