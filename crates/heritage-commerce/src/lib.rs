//! Storefront core for Heritage Home.
//!
//! This crate holds the parts of the storefront that have behavior:
//!
//! - **Catalog**: the fixed product and category set, badges, stock status
//! - **Cart**: line state, totals, and the persisting [`CartStore`](cart::CartStore)
//! - **Search**: listing query state and the filter/sort engine
//! - **Storefront**: the session context tying them to a key-value store
//!
//! # Example
//!
//! ```rust
//! use heritage_cache::MemoryStore;
//! use heritage_commerce::prelude::*;
//!
//! let mut storefront = Storefront::open(MemoryStore::new());
//!
//! let query = storefront.default_query().with_sort(SortKey::PriceLow);
//! let cheapest = storefront.browse(&query)[0].id.clone();
//!
//! storefront.add_to_cart(cheapest.as_str(), None, 2)?;
//! assert_eq!(storefront.cart().total_items(), 2);
//! println!("Total: {}", storefront.cart().total_price());
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::{Storefront, StorefrontSettings};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Badge, Catalog, Category, Product, ProductVariants, StockStatus};

    // Cart
    pub use crate::cart::{
        Cart, CartChange, CartEvent, CartLine, CartStore, CartTotals, ProductSnapshot,
    };

    // Search
    pub use crate::search::{query_catalog, CatalogQuery, CategoryMatch, PriceRange, SortKey};

    // Session
    pub use crate::storefront::{Storefront, StorefrontSettings};
}
