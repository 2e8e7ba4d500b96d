//! Type-safe local key-value storage for the Heritage Home storefront.
//!
//! Plays the part of a browser's local storage: a flat namespace of string
//! keys holding serialized values, owned by a single session. Values go
//! through JSON automatically.
//!
//! Two backends are provided:
//!
//! - [`MemoryStore`]: an in-process map; clones share the same map
//! - [`FileStore`]: one file per key inside a directory
//!
//! # Example
//!
//! ```rust
//! use heritage_cache::{cache_key, Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Preference {
//!     language: String,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! let key = cache_key!("heritage", "preference");
//!
//! cache.set(&key, &Preference { language: "ar".into() })?;
//! let loaded: Option<Preference> = cache.get(&key)?;
//! assert_eq!(loaded.unwrap().language, "ar");
//!
//! cache.delete(&key)?;
//! assert!(!cache.exists(&key)?);
//! # Ok::<(), heritage_cache::CacheError>(())
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
