//! Commerce error types.
//!
//! Cart and query operations never fail; these errors only surface where
//! user input crosses into the core. Storage faults are logged, not
//! returned.

use heritage_i18n::ParseLanguageError;
use thiserror::Error;

/// Errors that can occur at the edges of the storefront core.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Unknown sort key.
    #[error("Invalid sort key: {0} (expected one of bestseller, newest, price-low, price-high, name)")]
    InvalidSortKey(String),

    /// Unknown category match mode.
    #[error("Invalid category match mode: {0} (expected substring or exact)")]
    InvalidCategoryMatch(String),

    /// Unsupported language code.
    #[error(transparent)]
    InvalidLanguage(#[from] ParseLanguageError),

    /// Amount could not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
