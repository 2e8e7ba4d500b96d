//! Built-in product and category data.

use crate::catalog::{Category, Product, ProductVariants};
use crate::ids::CategoryId;
use crate::money::Money;

struct Seed {
    id: &'static str,
    name: &'static str,
    name_ar: &'static str,
    description: &'static str,
    description_ar: &'static str,
    price_fils: i64,
    original_fils: Option<i64>,
    image: &'static str,
    category: &'static str,
    category_ar: &'static str,
    category_id: &'static str,
    is_new: bool,
    is_best_seller: bool,
    stock: i64,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    materials: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Antique Hand Carved Cabinet",
        name_ar: "خزانة منحوتة يدوياً أثرية",
        description: "Exquisite hand-carved wooden cabinet featuring traditional Indian motifs. Each piece is a work of art crafted by master artisans.",
        description_ar: "خزانة خشبية منحوتة يدوياً بزخارف هندية تقليدية. كل قطعة هي عمل فني من صنع حرفيين متمرسين.",
        price_fils: 450_000,
        original_fils: Some(520_000),
        image: "assets/category-furniture.jpg",
        category: "Furniture",
        category_ar: "أثاث",
        category_id: "furniture",
        is_new: false,
        is_best_seller: true,
        stock: 5,
        sizes: &["Small", "Medium", "Large"],
        colors: &[],
        materials: &["Teak", "Rosewood", "Sheesham"],
    },
    Seed {
        id: "2",
        name: "Brass Temple Lamp Set",
        name_ar: "مجموعة مصابيح نحاسية للمعبد",
        description: "Traditional brass lamps perfect for creating an authentic ambiance. Hand polished and crafted with intricate details.",
        description_ar: "مصابيح نحاسية تقليدية مثالية لخلق أجواء أصيلة. مصقولة يدوياً ومصنوعة بتفاصيل دقيقة.",
        price_fils: 85_500,
        original_fils: None,
        image: "assets/category-decor.jpg",
        category: "Home Décor",
        category_ar: "ديكور منزلي",
        category_id: "decor",
        is_new: true,
        is_best_seller: false,
        stock: 12,
        sizes: &[],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "3",
        name: "Carved Wooden Arch Door",
        name_ar: "باب قوسي خشبي منحوت",
        description: "Magnificent carved wooden arch door featuring traditional Islamic geometric patterns. A statement piece for any entrance.",
        description_ar: "باب قوسي خشبي منحوت رائع يتميز بأنماط هندسية إسلامية تقليدية. قطعة مميزة لأي مدخل.",
        price_fils: 1_250_000,
        original_fils: None,
        image: "assets/category-doors.jpg",
        category: "Doors & Arches",
        category_ar: "أبواب وأقواس",
        category_id: "doors",
        is_new: false,
        is_best_seller: true,
        stock: 2,
        sizes: &["Standard", "Large", "Custom"],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "4",
        name: "Sandstone Ganesh Sculpture",
        name_ar: "تمثال غانيش من الحجر الرملي",
        description: "Beautiful sandstone Ganesh sculpture carved by skilled artisans. Perfect for meditation spaces and home altars.",
        description_ar: "تمثال غانيش جميل من الحجر الرملي منحوت بواسطة حرفيين مهرة. مثالي لمساحات التأمل والمذابح المنزلية.",
        price_fils: 175_000,
        original_fils: None,
        image: "assets/category-stone.jpg",
        category: "Stone Art",
        category_ar: "فن الحجر",
        category_id: "stone",
        is_new: false,
        is_best_seller: false,
        stock: 8,
        sizes: &[],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "5",
        name: "Zari Embroidered Wall Hanging",
        name_ar: "لوحة حائط مطرزة بالزري",
        description: "Luxurious wall hanging featuring traditional zari gold threadwork on rich silk fabric. A masterpiece of Indian textile art.",
        description_ar: "لوحة حائط فاخرة تتميز بتطريز الزري التقليدي بخيوط ذهبية على قماش حريري غني. تحفة من فن النسيج الهندي.",
        price_fils: 320_000,
        original_fils: Some(380_000),
        image: "assets/category-textile.jpg",
        category: "Fabric Art",
        category_ar: "فن النسيج",
        category_id: "textile",
        is_new: true,
        is_best_seller: false,
        stock: 4,
        sizes: &[],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "6",
        name: "Antique Brass Compass Set",
        name_ar: "مجموعة بوصلة نحاسية أثرية",
        description: "Vintage-style brass compass set including sundial and navigation tools. Perfect for collectors and nautical enthusiasts.",
        description_ar: "مجموعة بوصلة نحاسية بطراز عتيق تتضمن ساعة شمسية وأدوات ملاحة. مثالية للهواة والمهتمين بالملاحة البحرية.",
        price_fils: 95_000,
        original_fils: None,
        image: "assets/category-navigation.jpg",
        category: "Navigation",
        category_ar: "أدوات الملاحة",
        category_id: "navigation",
        is_new: false,
        is_best_seller: true,
        stock: 15,
        sizes: &[],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "7",
        name: "Persian Style Hand Woven Carpet",
        name_ar: "سجادة منسوجة يدوياً بطراز فارسي",
        description: "Stunning hand-woven carpet featuring intricate Persian-inspired patterns. Made with premium wool and natural dyes.",
        description_ar: "سجادة منسوجة يدوياً مذهلة تتميز بأنماط فارسية معقدة. مصنوعة من الصوف الفاخر والأصباغ الطبيعية.",
        price_fils: 650_000,
        original_fils: None,
        image: "assets/category-carpets.jpg",
        category: "Carpets",
        category_ar: "سجاد",
        category_id: "carpets",
        is_new: false,
        is_best_seller: false,
        stock: 3,
        sizes: &["4x6 ft", "6x9 ft", "8x10 ft"],
        colors: &[],
        materials: &[],
    },
    Seed {
        id: "8",
        name: "Handcrafted Leather Journal",
        name_ar: "دفتر جلدي مصنوع يدوياً",
        description: "Beautiful leather-bound journal with hand-embossed cover. Features handmade cotton paper and vintage brass closure.",
        description_ar: "دفتر جلدي جميل بغلاف منقوش يدوياً. يتميز بورق قطني مصنوع يدوياً وإغلاق نحاسي عتيق.",
        price_fils: 28_500,
        original_fils: None,
        image: "assets/category-journals.jpg",
        category: "Journals",
        category_ar: "دفاتر",
        category_id: "journals",
        is_new: true,
        is_best_seller: false,
        stock: 25,
        sizes: &["A5", "A4"],
        colors: &["Brown", "Tan", "Black"],
        materials: &[],
    },
];

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("furniture", "Hand Carved Furniture", "أثاث منحوت يدوياً"),
    ("decor", "Artistic Home Décor", "ديكور منزلي فني"),
    ("doors", "Antique Doors & Arches", "أبواب وأقواس أثرية"),
    ("stone", "Stone Art", "فن الحجر"),
    ("textile", "Indian Fabric Art", "فن النسيج الهندي"),
    ("navigation", "Navigation Instruments", "أدوات الملاحة"),
    ("carpets", "Carpets & Flooring", "سجاد وأرضيات"),
    ("journals", "Leather Journals", "دفاتر جلدية"),
];

fn options(values: &[&str]) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(|v| v.to_string()).collect())
    }
}

pub(crate) fn builtin_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|s| Product {
            id: s.id.into(),
            name: s.name.to_string(),
            name_ar: s.name_ar.to_string(),
            description: s.description.to_string(),
            description_ar: s.description_ar.to_string(),
            price: Money::kwd(s.price_fils),
            original_price: s.original_fils.map(Money::kwd),
            image: s.image.to_string(),
            images: vec![s.image.to_string()],
            category: s.category.to_string(),
            category_ar: s.category_ar.to_string(),
            category_id: CategoryId::new(s.category_id),
            is_new: s.is_new,
            is_best_seller: s.is_best_seller,
            in_stock: s.stock > 0,
            stock_quantity: s.stock,
            variants: ProductVariants {
                size: options(s.sizes),
                color: options(s.colors),
                material: options(s.materials),
            },
        })
        .collect()
}

pub(crate) fn builtin_categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|(id, name, name_ar)| Category::new(*id, *name, *name_ar))
        .collect()
}
