//! The storefront session context.

use crate::cart::{CartStore, ProductSnapshot};
use crate::catalog::{Catalog, Category, Product};
use crate::error::CommerceError;
use crate::search::{query_catalog, CatalogQuery, CategoryMatch, PriceRange};
use heritage_cache::{cache_key, Cache, KeyValueStore};
use heritage_i18n::{Direction, Language, LanguageContext};

/// Storage key the language preference is written under.
pub fn language_storage_key() -> String {
    cache_key!("heritage", "language")
}

/// Session-wide defaults applied when the storefront opens.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontSettings {
    /// Language used when no preference has been saved.
    pub default_language: Language,
    /// Bounds of the listing's price slider.
    pub price_range: PriceRange,
    pub category_match: CategoryMatch,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            default_language: Language::En,
            price_range: PriceRange::default(),
            category_match: CategoryMatch::default(),
        }
    }
}

/// Everything the presentation layer reads and drives: the catalog, the
/// cart and the active language.
///
/// One instance per session. [`Storefront::open`] restores saved state;
/// there is nothing to tear down.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    cart: CartStore<S>,
    language: LanguageContext,
    settings: StorefrontSettings,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Open the built-in catalog over `store` with default settings.
    pub fn open(store: S) -> Self {
        Self::open_with(store, Catalog::builtin().clone(), StorefrontSettings::default())
    }

    /// Open a storefront, restoring the cart and language preference.
    pub fn open_with(store: S, catalog: Catalog, settings: StorefrontSettings) -> Self {
        let language = restore_language(&store, settings.default_language);
        let cart = CartStore::restore(store);

        tracing::info!(
            language = %language,
            products = catalog.len(),
            cart_items = cart.total_items(),
            "storefront opened"
        );

        Self {
            catalog,
            cart,
            language: LanguageContext::new(language),
            settings,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Mutable access for cart commands that don't go through the catalog.
    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    pub fn settings(&self) -> &StorefrontSettings {
        &self.settings
    }

    pub fn language(&self) -> Language {
        self.language.language()
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    /// Translation context for the active language.
    pub fn i18n(&self) -> &LanguageContext {
        &self.language
    }

    /// Switch language and save the preference.
    ///
    /// A failed write is logged; the new language stays active.
    pub fn set_language(&mut self, language: Language) {
        self.language.set_language(language);
        let cache = Cache::new(self.cart.store());
        if let Err(e) = cache.set(&language_storage_key(), &language) {
            tracing::warn!(error = %e, "failed to persist language preference");
        }
        tracing::debug!(language = %language, "language changed");
    }

    /// Switch to the language named by `code` (e.g. "ar", "en-US").
    ///
    /// An unsupported code leaves the current language in place.
    pub fn switch_language(&mut self, code: &str) -> Result<Language, CommerceError> {
        let language: Language = code.parse()?;
        self.set_language(language);
        Ok(language)
    }

    /// A fresh listing query carrying the configured defaults.
    pub fn default_query(&self) -> CatalogQuery {
        CatalogQuery::new()
            .with_price_range(self.settings.price_range)
            .with_category_match(self.settings.category_match)
    }

    /// Run a listing query in the active language.
    pub fn browse(&self, query: &CatalogQuery) -> Vec<&Product> {
        query_catalog(self.catalog.products(), query, self.language())
    }

    /// Listing for one browse category, as reached from a category link.
    pub fn browse_category(
        &self,
        category_id: &str,
    ) -> Result<(&Category, Vec<&Product>), CommerceError> {
        let category = self
            .catalog
            .category(category_id)
            .ok_or_else(|| CommerceError::CategoryNotFound(category_id.to_string()))?;
        let query = self.default_query().with_category(category_id);
        Ok((category, self.browse(&query)))
    }

    /// Look up a product for its detail view.
    pub fn product(&self, product_id: &str) -> Result<&Product, CommerceError> {
        self.catalog
            .find(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))
    }

    /// Add `count` units of a catalog product to the cart.
    ///
    /// `count` is clamped to what the product allows (at least 1, at most
    /// its stock). Returns the number of units added.
    pub fn add_to_cart(
        &mut self,
        product_id: &str,
        variant: Option<String>,
        count: i64,
    ) -> Result<i64, CommerceError> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        let count = product.clamp_quantity(count);
        let snapshot = ProductSnapshot::from(product);

        self.cart.add_items(snapshot, variant, count);
        Ok(count)
    }
}

fn restore_language<S: KeyValueStore>(store: &S, fallback: Language) -> Language {
    let key = language_storage_key();
    match Cache::new(store).get::<Language>(&key) {
        Ok(Some(language)) => language,
        Ok(None) => fallback,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "ignoring saved language preference");
            fallback
        }
    }
}
