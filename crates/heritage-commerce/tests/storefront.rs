//! Session persistence across storefront reopen.

use heritage_cache::{FileStore, KeyValueStore, MemoryStore};
use heritage_commerce::cart::{cart_storage_key, CartStore};
use heritage_commerce::prelude::*;
use heritage_commerce::storefront::language_storage_key;
use heritage_i18n::Language;

fn line_quantities<S: KeyValueStore>(storefront: &Storefront<S>) -> Vec<(String, i64)> {
    storefront
        .cart()
        .items()
        .iter()
        .map(|line| (line.product_id.to_string(), line.quantity))
        .collect()
}

#[test]
fn reopen_restores_cart_and_language() {
    let store = MemoryStore::new();

    let mut first = Storefront::open(store.clone());
    first.add_to_cart("1", Some("Walnut".into()), 1).unwrap();
    first.add_to_cart("8", None, 3).unwrap();
    first.add_to_cart("1", None, 1).unwrap();
    first.set_language(Language::Ar);
    let saved = line_quantities(&first);
    let total = first.cart().total_price();

    let second = Storefront::open(store);
    assert_eq!(line_quantities(&second), saved);
    assert_eq!(saved, vec![("1".to_string(), 2), ("8".to_string(), 3)]);
    assert_eq!(second.cart().total_price(), total);
    assert_eq!(second.cart().line("1").unwrap().variant.as_deref(), Some("Walnut"));
    assert_eq!(second.language(), Language::Ar);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::open(dir.path()).unwrap();
        let mut storefront = Storefront::open(store);
        storefront.add_to_cart("6", None, 2).unwrap();
        storefront.cart_mut().update_quantity("6", 5);
    }

    let store = FileStore::open(dir.path()).unwrap();
    assert!(store.exists(&cart_storage_key()).unwrap());

    let storefront = Storefront::open(store);
    assert_eq!(line_quantities(&storefront), vec![("6".to_string(), 5)]);
    assert_eq!(storefront.cart().total_price(), Money::kwd(475_000));
}

#[test]
fn corrupt_snapshot_opens_empty_and_recovers() {
    let store = MemoryStore::new();
    store.set(&cart_storage_key(), b"\x00\xffgarbage").unwrap();
    store.set(&language_storage_key(), b"42").unwrap();

    let mut storefront = Storefront::open(store.clone());
    assert!(storefront.cart().is_empty());
    assert_eq!(storefront.language(), Language::En);

    // The next change overwrites the bad value.
    storefront.add_to_cart("4", None, 1).unwrap();
    let reloaded = CartStore::restore(store);
    assert_eq!(reloaded.total_items(), 1);
}

#[test]
fn clear_persists_empty_cart() {
    let store = MemoryStore::new();
    let mut storefront = Storefront::open(store.clone());
    storefront.add_to_cart("7", None, 2).unwrap();
    storefront.cart_mut().clear_cart();

    let reopened = Storefront::open(store);
    assert!(reopened.cart().is_empty());
    assert_eq!(reopened.cart().total_items(), 0);
    assert!(reopened.cart().total_price().is_zero());
}

#[test]
fn browse_and_buy_from_listing() {
    let mut storefront = Storefront::open(MemoryStore::new());

    let query = storefront
        .default_query()
        .with_category("stone")
        .with_sort(SortKey::PriceHigh);
    let ids: Vec<String> = storefront
        .browse(&query)
        .iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, vec!["4"]);

    for id in &ids {
        storefront.add_to_cart(id, None, 1).unwrap();
    }
    assert_eq!(storefront.cart().total_price(), Money::kwd(175_000));
}
