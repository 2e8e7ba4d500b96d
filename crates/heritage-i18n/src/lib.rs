//! Static translation table for the Heritage Home storefront.
//!
//! The storefront ships in two languages:
//!
//! - **English** (`en`), laid out left-to-right
//! - **Arabic** (`ar`), laid out right-to-left
//!
//! Every user-facing string is looked up by a dotted key (`nav.cart`,
//! `products.addToCart`, ...). A key that has no entry for the requested
//! language comes back unchanged, so a lookup never fails.
//!
//! # Example
//!
//! ```
//! use heritage_i18n::{Language, LanguageContext};
//!
//! let mut ctx = LanguageContext::default();
//! assert_eq!(ctx.t("nav.cart"), "Cart");
//!
//! ctx.set_language(Language::Ar);
//! assert_eq!(ctx.t("nav.cart"), "السلة");
//! assert!(ctx.direction().is_rtl());
//!
//! // Unknown keys fall back to the key itself.
//! assert_eq!(ctx.t("no.such.key"), "no.such.key");
//! ```

mod context;
mod language;
mod table;

pub use context::LanguageContext;
pub use language::{Direction, Language, ParseLanguageError, SUPPORTED_LANGUAGES};
pub use table::{format, lookup};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{format, lookup, Direction, Language, LanguageContext};
}
