//! Translation table and lookup.

use crate::Language;
use std::collections::HashMap;
use std::sync::LazyLock;

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.products", "Products"),
    ("nav.categories", "Categories"),
    ("nav.contact", "Contact"),
    ("nav.login", "Login"),
    ("nav.cart", "Cart"),
    ("nav.search", "Search products..."),
    // Categories
    ("categories.title", "Explore Timeless Collections"),
    ("categories.subtitle", "Find the perfect piece for every room"),
    ("category.furniture", "Hand Carved Furniture"),
    ("category.decor", "Artistic Home Décor"),
    ("category.doors", "Antique Doors & Arches"),
    ("category.stone", "Stone Art"),
    ("category.textile", "Indian Fabric Art"),
    ("category.navigation", "Navigation Instruments"),
    ("category.carpets", "Carpets & Flooring"),
    ("category.journals", "Leather Journals"),
    // Featured
    ("featured.title", "Customer Favorites"),
    ("featured.subtitle", "Most loved pieces by Kuwait homeowners"),
    // Products
    ("products.title", "Our Collection"),
    ("products.subtitle", "Each piece, a masterwork of tradition"),
    ("products.filter", "Filter"),
    ("products.sort", "Sort By"),
    ("products.price", "Price"),
    ("products.priceRange", "Price Range"),
    ("products.addToCart", "Add to Cart"),
    ("products.viewDetails", "View Details"),
    ("products.quickAdd", "Quick Add"),
    ("products.inStock", "In Stock"),
    ("products.lowStock", "Only {count} left"),
    ("products.outOfStock", "Made to Order"),
    ("products.count", "{count} products"),
    ("products.save", "Save {amount}"),
    ("products.notFound", "Product Not Found"),
    ("products.empty.title", "No pieces match your search"),
    (
        "products.empty.hint",
        "Try adjusting your filters to explore more of our carefully curated collection.",
    ),
    ("products.clearFilters", "Clear Filters"),
    ("products.clearAll", "Clear all"),
    // Sorting
    ("sort.bestseller", "Best Sellers"),
    ("sort.newest", "Newest"),
    ("sort.priceLow", "Price: Low to High"),
    ("sort.priceHigh", "Price: High to Low"),
    ("sort.name", "Name"),
    // Badges
    ("badge.bestseller", "Best Seller"),
    ("badge.limited", "Limited"),
    ("badge.handmade", "Handmade"),
    ("badge.new", "New"),
    ("badge.lowStock", "Only {count}"),
    // Cart
    ("cart.empty.title", "Your cart is empty"),
    (
        "cart.empty.hint",
        "Looks like you haven't added any pieces yet. Explore our carefully curated collection.",
    ),
    ("cart.clear", "Clear Cart"),
    ("cart.summary", "Order Summary"),
    ("cart.subtotal", "Subtotal"),
    ("cart.shipping", "Shipping"),
    ("cart.shippingPending", "Calculated at checkout"),
    ("cart.total", "Total"),
    ("cart.items", "{count} items"),
    ("cart.secure", "Secure Checkout"),
    ("cart.delivery", "Kuwait-Wide Delivery"),
    ("cart.support", "24/7 Support"),
    // Currency
    ("currency", "KWD"),
    // Common
    ("common.viewAll", "View All"),
    ("common.learnMore", "Learn More"),
    ("common.shopNow", "Shop Now"),
    ("common.seeMore", "See More"),
];

const AR: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.about", "من نحن"),
    ("nav.products", "المنتجات"),
    ("nav.categories", "الفئات"),
    ("nav.contact", "اتصل بنا"),
    ("nav.login", "تسجيل الدخول"),
    ("nav.cart", "السلة"),
    ("nav.search", "البحث عن المنتجات..."),
    // Categories
    ("categories.title", "استكشف مجموعات خالدة"),
    ("categories.subtitle", "اعثر على القطعة المثالية لكل غرفة"),
    ("category.furniture", "أثاث منحوت يدوياً"),
    ("category.decor", "ديكور منزلي فني"),
    ("category.doors", "أبواب وأقواس أثرية"),
    ("category.stone", "فن الحجر"),
    ("category.textile", "فن النسيج الهندي"),
    ("category.navigation", "أدوات الملاحة"),
    ("category.carpets", "سجاد وأرضيات"),
    ("category.journals", "دفاتر جلدية"),
    // Featured
    ("featured.title", "المفضلة لدى العملاء"),
    ("featured.subtitle", "القطع الأكثر شعبية لدى أصحاب المنازل في الكويت"),
    // Products
    ("products.title", "مجموعتنا"),
    ("products.subtitle", "كل قطعة، تحفة من التقاليد"),
    ("products.filter", "تصفية"),
    ("products.sort", "ترتيب حسب"),
    ("products.price", "السعر"),
    ("products.priceRange", "نطاق السعر"),
    ("products.addToCart", "أضف إلى السلة"),
    ("products.viewDetails", "عرض التفاصيل"),
    ("products.quickAdd", "إضافة سريعة"),
    ("products.inStock", "متوفر"),
    ("products.lowStock", "متبقي {count} فقط"),
    ("products.outOfStock", "يُصنع حسب الطلب"),
    ("products.count", "{count} منتج"),
    ("products.save", "وفر {amount}"),
    ("products.notFound", "المنتج غير موجود"),
    ("products.empty.title", "لم نجد ما تبحث عنه"),
    (
        "products.empty.hint",
        "جرب تعديل الفلاتر لاستكشاف المزيد من مجموعتنا المنسقة بعناية.",
    ),
    ("products.clearFilters", "مسح الفلاتر"),
    ("products.clearAll", "مسح الكل"),
    // Sorting
    ("sort.bestseller", "الأكثر مبيعاً"),
    ("sort.newest", "الأحدث"),
    ("sort.priceLow", "السعر: الأقل للأعلى"),
    ("sort.priceHigh", "السعر: الأعلى للأقل"),
    ("sort.name", "الاسم"),
    // Badges
    ("badge.bestseller", "الأكثر مبيعاً"),
    ("badge.limited", "محدود"),
    ("badge.handmade", "مصنوع يدوياً"),
    ("badge.new", "جديد"),
    ("badge.lowStock", "فقط {count}"),
    // Cart
    ("cart.empty.title", "سلتك فارغة"),
    (
        "cart.empty.hint",
        "يبدو أنك لم تضف أي قطع حتى الآن. استكشف مجموعتنا المنتقاة بعناية.",
    ),
    ("cart.clear", "إفراغ السلة"),
    ("cart.summary", "ملخص الطلب"),
    ("cart.subtotal", "المجموع الفرعي"),
    ("cart.shipping", "الشحن"),
    ("cart.shippingPending", "يُحسب عند الدفع"),
    ("cart.total", "الإجمالي"),
    ("cart.items", "{count} قطعة"),
    ("cart.secure", "دفع آمن"),
    ("cart.delivery", "توصيل لكل الكويت"),
    ("cart.support", "دعم 24/7"),
    // Currency
    ("currency", "د.ك"),
    // Common
    ("common.viewAll", "عرض الكل"),
    ("common.learnMore", "اعرف المزيد"),
    ("common.shopNow", "تسوق الآن"),
    ("common.seeMore", "المزيد"),
];

static EN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN.iter().copied().collect());

static AR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| AR.iter().copied().collect());

fn table(language: Language) -> &'static HashMap<&'static str, &'static str> {
    match language {
        Language::En => &EN_TABLE,
        Language::Ar => &AR_TABLE,
    }
}

/// Look up a translation.
///
/// Returns the key itself when the language has no entry for it.
pub fn lookup<'a>(key: &'a str, language: Language) -> &'a str {
    table(language).get(key).copied().unwrap_or(key)
}

/// Look up a translation and substitute `{name}` placeholders.
///
/// Placeholders without a matching argument are left as written.
///
/// ```
/// use heritage_i18n::{format, Language};
///
/// let label = format("products.lowStock", Language::En, &[("count", "2".to_string())]);
/// assert_eq!(label, "Only 2 left");
/// ```
pub fn format(key: &str, language: Language, args: &[(&str, String)]) -> String {
    let mut text = lookup(key, language).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{}}}", name), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(lookup("nav.home", Language::En), "Home");
        assert_eq!(lookup("nav.home", Language::Ar), "الرئيسية");
        assert_eq!(lookup("currency", Language::En), "KWD");
        assert_eq!(lookup("currency", Language::Ar), "د.ك");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(lookup("hero.unknown", Language::En), "hero.unknown");
        assert_eq!(lookup("", Language::Ar), "");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let mut en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        let mut ar: Vec<_> = AR.iter().map(|(k, _)| *k).collect();
        en.sort_unstable();
        ar.sort_unstable();
        assert_eq!(en, ar);
        assert_eq!(EN_TABLE.len(), EN.len(), "duplicate key in English table");
        assert_eq!(AR_TABLE.len(), AR.len(), "duplicate key in Arabic table");
    }

    #[test]
    fn test_format_placeholders() {
        let en = format("products.lowStock", Language::En, &[("count", "3".to_string())]);
        assert_eq!(en, "Only 3 left");

        let ar = format("products.lowStock", Language::Ar, &[("count", "3".to_string())]);
        assert_eq!(ar, "متبقي 3 فقط");

        // Missing argument leaves the placeholder in place.
        assert_eq!(format("products.lowStock", Language::En, &[]), "Only {count} left");
    }
}
