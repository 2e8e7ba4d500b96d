//! Catalog query state.

use crate::error::CommerceError;
use crate::money::{Currency, Money};
use heritage_i18n::{lookup, Language};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lower bound of the listing page's price slider, in KWD.
pub const DEFAULT_PRICE_MIN_KWD: i64 = 0;
/// Upper bound of the listing page's price slider, in KWD.
pub const DEFAULT_PRICE_MAX_KWD: i64 = 1500;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Best sellers first.
    #[default]
    Bestseller,
    /// New arrivals first.
    Newest,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Display name, A to Z.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Bestseller,
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Name,
    ];

    /// Wire name, as used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Bestseller => "bestseller",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
        }
    }

    fn translation_key(&self) -> &'static str {
        match self {
            SortKey::Bestseller => "sort.bestseller",
            SortKey::Newest => "sort.newest",
            SortKey::PriceLow => "sort.priceLow",
            SortKey::PriceHigh => "sort.priceHigh",
            SortKey::Name => "sort.name",
        }
    }

    /// Localized label for the sort dropdown.
    pub fn label(&self, language: Language) -> &'static str {
        lookup(self.translation_key(), language)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidSortKey(s.to_string()))
    }
}

/// How selected categories are matched against products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatch {
    /// Case-insensitive substring of either category label.
    ///
    /// Loose: `"decor"` does not match `"Home Décor"`, and `"textile"`
    /// does not match `"Fabric Art"`.
    #[default]
    Substring,
    /// The product's `category_id` must be selected.
    Exact,
}

impl CategoryMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryMatch::Substring => "substring",
            CategoryMatch::Exact => "exact",
        }
    }
}

impl fmt::Display for CategoryMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryMatch {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substring" => Ok(CategoryMatch::Substring),
            "exact" => Ok(CategoryMatch::Exact),
            _ => Err(CommerceError::InvalidCategoryMatch(s.to_string())),
        }
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Whole-dinar bounds, the way the slider reports them.
    pub fn kwd(min: i64, max: i64) -> Self {
        let per = Currency::KWD.minor_per_major();
        Self::new(
            Money::kwd(min.saturating_mul(per)),
            Money::kwd(max.saturating_mul(per)),
        )
    }

    /// Whether `price` lies within the bounds. Always false when `min > max`.
    pub fn contains(&self, price: &Money) -> bool {
        self.min.amount_minor <= price.amount_minor && price.amount_minor <= self.max.amount_minor
    }

    pub fn is_inverted(&self) -> bool {
        self.min.amount_minor > self.max.amount_minor
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::kwd(DEFAULT_PRICE_MIN_KWD, DEFAULT_PRICE_MAX_KWD)
    }
}

/// Filter and sort state of the product listing.
///
/// ```
/// use heritage_commerce::search::{CatalogQuery, SortKey};
///
/// let mut query = CatalogQuery::for_category("furniture").with_sort(SortKey::PriceLow);
/// assert_eq!(query.active_filter_count(), 1);
///
/// query.toggle_category("furniture");
/// assert!(!query.has_active_filters());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Selected category strings; empty means all.
    pub selected_categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub sort: SortKey,
    pub category_match: CategoryMatch,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// A query with one category preselected, as when arriving from a
    /// category link.
    pub fn for_category(category: impl Into<String>) -> Self {
        Self::new().with_category(category)
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_categories.insert(category.into());
        self
    }

    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.selected_categories
            .extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_category_match(mut self, mode: CategoryMatch) -> Self {
        self.category_match = mode;
        self
    }

    /// Select a category, or deselect it if already selected.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
    }

    /// Reset categories and price range. Sort and match mode are kept.
    pub fn clear_filters(&mut self) {
        self.selected_categories.clear();
        self.price_range = PriceRange::default();
    }

    /// Selected categories, plus one if the price range was narrowed.
    pub fn active_filter_count(&self) -> usize {
        let price = usize::from(self.price_range != PriceRange::default());
        self.selected_categories.len() + price
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = CatalogQuery::new();
        assert!(query.selected_categories.is_empty());
        assert_eq!(query.price_range.min, Money::kwd(0));
        assert_eq!(query.price_range.max, Money::kwd(1_500_000));
        assert_eq!(query.sort, SortKey::Bestseller);
        assert_eq!(query.category_match, CategoryMatch::Substring);
    }

    #[test]
    fn test_sort_key_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(CommerceError::InvalidSortKey(s)) if s == "cheapest"
        ));
    }

    #[test]
    fn test_sort_key_serde_matches_wire_name() {
        let json = serde_json::to_string(&SortKey::PriceLow).unwrap();
        assert_eq!(json, "\"price-low\"");
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(SortKey::PriceLow.label(Language::En), "Price: Low to High");
        assert_eq!(SortKey::Bestseller.label(Language::Ar), "الأكثر مبيعاً");
    }

    #[test]
    fn test_category_match_parse() {
        assert_eq!("Exact".parse::<CategoryMatch>().unwrap(), CategoryMatch::Exact);
        assert!("fuzzy".parse::<CategoryMatch>().is_err());
    }

    #[test]
    fn test_toggle_category() {
        let mut query = CatalogQuery::new();
        query.toggle_category("doors");
        query.toggle_category("stone");
        assert_eq!(query.active_filter_count(), 2);
        query.toggle_category("doors");
        assert!(query.selected_categories.contains("stone"));
        assert!(!query.selected_categories.contains("doors"));
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut query = CatalogQuery::for_category("carpets")
            .with_price_range(PriceRange::kwd(100, 500))
            .with_sort(SortKey::Name);
        assert_eq!(query.active_filter_count(), 2);

        query.clear_filters();
        assert!(!query.has_active_filters());
        assert_eq!(query.sort, SortKey::Name);
        assert_eq!(query.price_range, PriceRange::default());
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::kwd(85, 450);
        assert!(range.contains(&Money::kwd(85_000)));
        assert!(range.contains(&Money::kwd(450_000)));
        assert!(!range.contains(&Money::kwd(450_001)));
        assert!(!range.contains(&Money::kwd(84_999)));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PriceRange::kwd(500, 100);
        assert!(range.is_inverted());
        assert!(!range.contains(&Money::kwd(300_000)));
    }
}
