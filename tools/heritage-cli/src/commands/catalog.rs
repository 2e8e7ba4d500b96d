//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use heritage_commerce::catalog::Product;
use heritage_commerce::search::{CategoryMatch, PriceRange, SortKey};
use heritage_commerce::{Currency, Money};
use heritage_i18n::{format, Language};
use serde::Serialize;

use super::{ProductsArgs, ShowArgs};
use crate::context::Context;
use crate::output::{badge_label, format_price, stock_label, truncate};

const WIDTHS: [usize; 5] = [3, 34, 16, 22, 24];

/// Product row for JSON listings.
#[derive(Serialize)]
struct ProductSummary<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    price: Money,
    price_display: String,
    badges: Vec<String>,
}

impl<'a> ProductSummary<'a> {
    fn new(product: &'a Product, language: Language) -> Self {
        Self {
            id: product.id.as_str(),
            name: product.display_name(language),
            category: product.display_category(language),
            price: product.price,
            price_display: format_price(&product.price, language),
            badges: product.badges().iter().map(|b| b.label(language)).collect(),
        }
    }
}

/// List products.
pub fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.open_storefront()?;
    let language = storefront.language();

    let sort: SortKey = args.sort.parse()?;
    let mut query = storefront
        .default_query()
        .with_categories(args.categories)
        .with_sort(sort);
    if args.exact {
        query = query.with_category_match(CategoryMatch::Exact);
    }
    if args.min.is_some() || args.max.is_some() {
        let range = price_range(
            args.min.as_deref(),
            args.max.as_deref(),
            query.price_range,
        )?;
        query = query.with_price_range(range);
    }

    let results = storefront.browse(&query);

    if ctx.output.is_json() {
        let rows: Vec<ProductSummary> =
            results.iter().map(|p| ProductSummary::new(p, language)).collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    let i18n = storefront.i18n();
    ctx.output.header(i18n.t("products.title"));
    ctx.output.subtitle(&format!(
        "{} · {}: {}",
        format("products.count", language, &[("count", results.len().to_string())]),
        i18n.t("products.sort"),
        sort.label(language),
    ));

    if results.is_empty() {
        ctx.output.info(i18n.t("products.empty.title"));
        ctx.output.info(i18n.t("products.empty.hint"));
        return Ok(());
    }

    print_table(&results, language, ctx);
    Ok(())
}

/// List featured products.
pub fn featured(ctx: &Context) -> Result<()> {
    let storefront = ctx.open_storefront()?;
    let language = storefront.language();
    let featured = storefront.catalog().featured();

    if ctx.output.is_json() {
        let rows: Vec<ProductSummary> =
            featured.iter().map(|p| ProductSummary::new(p, language)).collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(storefront.i18n().t("featured.title"));
    ctx.output.subtitle(storefront.i18n().t("featured.subtitle"));
    print_table(&featured, language, ctx);
    Ok(())
}

/// List browse categories with their product counts.
pub fn categories(ctx: &Context) -> Result<()> {
    let storefront = ctx.open_storefront()?;
    let language = storefront.language();

    let mut rows = Vec::new();
    for category in storefront.catalog().categories() {
        let (_, products) = storefront.browse_category(category.id.as_str())?;
        rows.push((category, products.len()));
    }

    if ctx.output.is_json() {
        let json: Vec<serde_json::Value> = rows
            .iter()
            .map(|(category, count)| {
                serde_json::json!({
                    "id": category.id,
                    "name": category.display_name(language),
                    "title": storefront.i18n().t(&category.translation_key()),
                    "products": count,
                })
            })
            .collect();
        ctx.output.json(&json);
        return Ok(());
    }

    ctx.output.header(storefront.i18n().t("categories.title"));
    ctx.output.subtitle(storefront.i18n().t("categories.subtitle"));
    let widths = [12, 30, 10];
    for (category, count) in &rows {
        let key = category.translation_key();
        let count = format("products.count", language, &[("count", count.to_string())]);
        ctx.output
            .table_row(&[category.id.as_str(), storefront.i18n().t(&key), &count], &widths);
    }
    if storefront.settings().category_match == CategoryMatch::Substring {
        ctx.output
            .debug("counts use label substring matching (category_match = \"substring\")");
    }
    Ok(())
}

/// Show one product.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.open_storefront()?;
    let language = storefront.language();
    let product = storefront.product(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "badges": product.badges(),
            "stock_status": product.stock_status(),
            "discount_percentage": product.discount_percentage(),
            "in_cart": storefront.cart().line(&args.id).map_or(0, |line| line.quantity),
        }));
        return Ok(());
    }

    let i18n = storefront.i18n();
    ctx.output.header(product.display_name(language));
    ctx.output.subtitle(product.display_category(language));

    let mut price = format_price(&product.price, language);
    if let (Some(original), Some(savings)) = (product.original_price, product.savings()) {
        let saved = format(
            "products.save",
            language,
            &[("amount", format_price(&savings, language))],
        );
        price = format!(
            "{price}  {}  {saved}",
            console::style(format_price(&original, language)).dim().strikethrough()
        );
    }
    ctx.output.kv(i18n.t("products.price"), &price);
    ctx.output
        .kv("stock", &stock_label(&product.stock_status(), language));

    let badges: Vec<String> = product
        .badges()
        .iter()
        .map(|b| badge_label(b, language))
        .collect();
    if !badges.is_empty() {
        ctx.output.kv("badges", &badges.join(" "));
    }

    for (name, values) in product.variants.options() {
        ctx.output.kv(name, &values.join(", "));
    }

    let description = product.display_description(language);
    if !description.is_empty() {
        println!();
        println!("{}", description);
    }

    if let Some(line) = storefront.cart().line(&args.id) {
        ctx.output
            .info(&format!("{}: {}", i18n.t("nav.cart"), line.quantity));
    }
    Ok(())
}

fn print_table(products: &[&Product], language: Language, ctx: &Context) {
    ctx.output.table_row(&["ID", "NAME", "PRICE", "CATEGORY", "BADGES"], &WIDTHS);
    ctx.output.rule(&WIDTHS);

    for product in products {
        let name = truncate(product.display_name(language), WIDTHS[1]);
        let price = format_price(&product.price, language);
        let category = truncate(product.display_category(language), WIDTHS[3]);
        let badges: Vec<String> = product
            .badges()
            .iter()
            .map(|b| badge_label(b, language))
            .collect();
        ctx.output.table_row(
            &[product.id.as_str(), &name, &price, &category, &badges.join(" ")],
            &WIDTHS,
        );
    }
}

/// Parse `--min`/`--max` dinar amounts over the configured bounds.
fn price_range(min: Option<&str>, max: Option<&str>, bounds: PriceRange) -> Result<PriceRange> {
    let parse = |value: Option<&str>, fallback: Money, flag: &str| -> Result<Money> {
        match value {
            Some(v) => Money::parse_decimal(v, Currency::KWD)
                .with_context(|| format!("Invalid --{flag} price")),
            None => Ok(fallback),
        }
    };
    Ok(PriceRange::new(
        parse(min, bounds.min, "min")?,
        parse(max, bounds.max, "max")?,
    ))
}
