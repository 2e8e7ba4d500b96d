//! Shopping cart module.
//!
//! Contains the cart lines, their aggregates, and the persistent state
//! container that owns them.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLine, CartSnapshot, ProductSnapshot};
pub use pricing::CartTotals;
pub use store::{cart_storage_key, CartChange, CartEvent, CartStore, SubscriptionId};
