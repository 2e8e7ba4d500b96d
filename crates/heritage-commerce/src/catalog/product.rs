//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use heritage_i18n::{format, lookup, Language};
use serde::{Deserialize, Serialize};

/// Stock level at or below which a product card shows a low-stock badge.
pub const CARD_LOW_STOCK_THRESHOLD: i64 = 3;

/// Stock level at or below which the detail page warns about low stock.
pub const DETAIL_LOW_STOCK_THRESHOLD: i64 = 5;

/// Maximum number of badges shown on a product card.
pub const MAX_BADGES: usize = 2;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// English name.
    pub name: String,
    /// Arabic name.
    pub name_ar: String,
    /// English description.
    pub description: String,
    /// Arabic description.
    pub description_ar: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount reference price, if the product is marked down.
    pub original_price: Option<Money>,
    /// Primary image path.
    pub image: String,
    /// Gallery image paths.
    pub images: Vec<String>,
    /// English category label (free text).
    pub category: String,
    /// Arabic category label (free text).
    pub category_ar: String,
    /// Browse category this product is listed under.
    pub category_id: CategoryId,
    /// Recently added to the collection.
    pub is_new: bool,
    /// Marked as a best seller.
    pub is_best_seller: bool,
    /// Whether the product can ship from stock.
    pub in_stock: bool,
    /// Units on hand.
    pub stock_quantity: i64,
    /// Selectable options, informational only.
    pub variants: ProductVariants,
}

impl Product {
    /// Create a product with the given names and price; everything else empty.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        name_ar: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_ar: name_ar.into(),
            description: String::new(),
            description_ar: String::new(),
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            category: String::new(),
            category_ar: String::new(),
            category_id: CategoryId::new(""),
            is_new: false,
            is_best_seller: false,
            in_stock: true,
            stock_quantity: 0,
            variants: ProductVariants::default(),
        }
    }

    /// Name in the given language.
    pub fn display_name(&self, language: Language) -> &str {
        language.pick(&self.name, &self.name_ar)
    }

    /// Description in the given language.
    pub fn display_description(&self, language: Language) -> &str {
        language.pick(&self.description, &self.description_ar)
    }

    /// Category label in the given language.
    pub fn display_category(&self, language: Language) -> &str {
        language.pick(&self.category, &self.category_ar)
    }

    /// Check if the product is marked down from a higher reference price.
    pub fn is_on_sale(&self) -> bool {
        self.savings().is_some()
    }

    /// Amount saved against the reference price, when there is one.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|orig| {
                orig.currency == self.price.currency && orig.amount_minor > self.price.amount_minor
            })
            .map(|orig| Money::new(orig.amount_minor - self.price.amount_minor, orig.currency))
    }

    /// Discount as a whole percentage of the reference price.
    pub fn discount_percentage(&self) -> Option<i64> {
        let orig = self.original_price?;
        self.savings()?;
        let ratio = self.price.amount_minor as f64 / orig.amount_minor as f64;
        Some(((1.0 - ratio) * 100.0).round() as i64)
    }

    /// Check if stock is positive but at or below `threshold`.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.stock_quantity > 0 && self.stock_quantity <= threshold
    }

    /// Availability as shown on the detail page.
    pub fn stock_status(&self) -> StockStatus {
        if !self.in_stock || self.stock_quantity <= 0 {
            StockStatus::MadeToOrder
        } else if self.is_low_stock(DETAIL_LOW_STOCK_THRESHOLD) {
            StockStatus::LowStock(self.stock_quantity)
        } else {
            StockStatus::InStock
        }
    }

    /// Card badges, at most [`MAX_BADGES`], in priority order.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::with_capacity(MAX_BADGES);
        if self.is_best_seller {
            badges.push(Badge::BestSeller);
        }
        if self.is_low_stock(CARD_LOW_STOCK_THRESHOLD) && badges.len() < MAX_BADGES {
            badges.push(Badge::LowStock(self.stock_quantity));
        }
        // A best seller never also shows "new".
        if self.is_new && !self.is_best_seller && badges.len() < MAX_BADGES {
            badges.push(Badge::New);
        }
        badges
    }

    /// Clamp a requested purchase quantity to `1..=stock` (at least 1).
    pub fn clamp_quantity(&self, requested: i64) -> i64 {
        requested.clamp(1, self.stock_quantity.max(1))
    }
}

/// Selectable product options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<Vec<String>>,
}

impl ProductVariants {
    /// Named option lists that are present, in size/color/material order.
    pub fn options(&self) -> Vec<(&'static str, &[String])> {
        [
            ("size", &self.size),
            ("color", &self.color),
            ("material", &self.material),
        ]
        .into_iter()
        .filter_map(|(name, values)| values.as_deref().map(|v| (name, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.options().is_empty()
    }
}

/// A badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    BestSeller,
    /// Carries the remaining stock count.
    LowStock(i64),
    New,
}

impl Badge {
    /// Localized badge text.
    pub fn label(&self, language: Language) -> String {
        match self {
            Badge::BestSeller => lookup("badge.bestseller", language).to_string(),
            Badge::LowStock(count) => {
                format("badge.lowStock", language, &[("count", count.to_string())])
            }
            Badge::New => lookup("badge.new", language).to_string(),
        }
    }
}

/// Product availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    /// Carries the remaining stock count.
    LowStock(i64),
    MadeToOrder,
}

impl StockStatus {
    /// Localized availability text.
    pub fn label(&self, language: Language) -> String {
        match self {
            StockStatus::InStock => lookup("products.inStock", language).to_string(),
            StockStatus::LowStock(count) => {
                format("products.lowStock", language, &[("count", count.to_string())])
            }
            StockStatus::MadeToOrder => lookup("products.outOfStock", language).to_string(),
        }
    }
}
