//! Integration tests for the product store against the mock server.
//!
//! Exercises the action table end to end: collection effects on success,
//! error capture on failure, re-throw semantics, and the derived
//! filtered+sorted view.

use catalogo_core::{FilterUpdate, ProductId, ProductPatch, SortKey, SortOrder};
use catalogo_integration_tests::{TestCatalog, dec, new_product, product};

#[tokio::test]
async fn test_fetch_all_replaces_collection() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "B", "Livros", "10"),
        product(2, "A", "Livros", "5"),
    ])
    .await;
    let store = server.store();

    store.fetch_all().await;

    assert_eq!(store.products().len(), 2);
    assert!(!store.is_loading());
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn test_default_filters_yield_name_ascending_view() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "B", "Livros", "10"),
        product(2, "A", "Livros", "5"),
    ])
    .await;
    let store = server.store();
    store.fetch_all().await;

    let view = store.filtered_products();
    let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);

    // The raw collection keeps server order.
    let products = store.products();
    let raw: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(raw, ["B", "A"]);
}

#[tokio::test]
async fn test_category_filter_counts_match_manual_count() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "Livro de Rust", "Livros", "89.90"),
        product(2, "Fone Bluetooth", "Áudio", "199.90"),
        product(3, "Livro de Go", "Livros", "74.90"),
        product(4, "Teclado", "Informática", "120"),
    ])
    .await;
    let store = server.store();
    store.fetch_all().await;

    store.set_filters(FilterUpdate {
        category: Some("Livros".to_string()),
        ..FilterUpdate::default()
    });

    let view = store.filtered_products();
    let manual = store
        .products()
        .iter()
        .filter(|p| p.category == "Livros")
        .count();
    assert_eq!(view.len(), manual);
    assert!(view.iter().all(|p| p.category == "Livros"));
}

#[tokio::test]
async fn test_price_sort_descending() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "Caro", "Outros", "300"),
        product(2, "Barato", "Outros", "10"),
        product(3, "Médio", "Outros", "150"),
    ])
    .await;
    let store = server.store();
    store.fetch_all().await;

    store.set_filters(FilterUpdate {
        sort_by: Some(SortKey::Price),
        sort_order: Some(SortOrder::Desc),
        ..FilterUpdate::default()
    });

    let names: Vec<String> = store
        .filtered_products()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(names, ["Caro", "Médio", "Barato"]);
}

#[tokio::test]
async fn test_inverted_price_range_yields_empty_view() {
    let server = TestCatalog::spawn_with(vec![product(1, "Teclado", "Informática", "120")]).await;
    let store = server.store();
    store.fetch_all().await;

    store.set_filters(FilterUpdate {
        price_min: Some(dec("500")),
        price_max: Some(dec("100")),
        ..FilterUpdate::default()
    });

    assert!(store.filtered_products().is_empty());
    assert_eq!(store.products().len(), 1);
}

#[tokio::test]
async fn test_create_then_fetch_round_trips() {
    let server = TestCatalog::spawn().await;
    let store = server.store();

    let created = store
        .create(new_product("Fone Bluetooth", "Áudio", "199.90"))
        .await
        .expect("create");
    assert_eq!(store.products().len(), 1);

    store.fetch_all().await;
    assert!(store.products().contains(&created));
}

#[tokio::test]
async fn test_update_replaces_matching_entry_in_place() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "Teclado", "Informática", "120"),
        product(2, "Mouse", "Informática", "60"),
    ])
    .await;
    let store = server.store();
    store.fetch_all().await;

    let patch = ProductPatch {
        name: Some("Teclado Mecânico".to_string()),
        ..ProductPatch::default()
    };
    store.update(ProductId::new(1), patch).await.expect("update");

    let names: Vec<String> = store.products().iter().map(|p| p.name.clone()).collect();
    // Same position, same neighbours.
    assert_eq!(names, ["Teclado Mecânico", "Mouse"]);
}

#[tokio::test]
async fn test_update_missing_id_records_error_and_rethrows() {
    let server = TestCatalog::spawn_with(vec![product(1, "Teclado", "Informática", "120")]).await;
    let store = server.store();
    store.fetch_all().await;

    let error = store
        .update(ProductId::new(99), ProductPatch::default())
        .await
        .expect_err("missing id must fail");

    assert_eq!(error.message(), "Not found");
    assert_eq!(store.error().as_deref(), Some("Not found"));
    // Collection unchanged: nothing added, nothing replaced.
    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].name, "Teclado");
}

#[tokio::test]
async fn test_delete_removes_exactly_one_preserving_order() {
    let server = TestCatalog::spawn_with(vec![
        product(1, "Primeiro", "Outros", "1"),
        product(2, "Segundo", "Outros", "2"),
        product(3, "Terceiro", "Outros", "3"),
    ])
    .await;
    let store = server.store();
    store.fetch_all().await;

    store.delete(ProductId::new(2)).await.expect("delete");

    let names: Vec<String> = store.products().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["Primeiro", "Terceiro"]);
}

#[tokio::test]
async fn test_create_failure_records_error_and_rethrows() {
    let server = TestCatalog::spawn_broken().await;
    let store = server.store();

    let error = store
        .create(new_product("Fone", "Áudio", "10"))
        .await
        .expect_err("broken server must fail");

    assert_eq!(error.message(), "unknown error (status 500)");
    assert_eq!(store.error().as_deref(), Some("unknown error (status 500)"));
    assert!(store.products().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_failure_keeps_collection_unchanged() {
    let server = TestCatalog::spawn_with(vec![product(1, "Teclado", "Informática", "120")]).await;
    let store = server.store();
    store.fetch_all().await;
    assert_eq!(store.products().len(), 1);

    server.set_failing(true);
    store.fetch_all().await;

    assert_eq!(store.error().as_deref(), Some("unknown error (status 500)"));
    assert!(!store.is_loading());
    // The previously loaded collection survives the failed refresh.
    assert_eq!(store.products().len(), 1);

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn test_new_action_clears_previous_error() {
    let server = TestCatalog::spawn().await;
    let store = server.store();

    store
        .delete(ProductId::new(5))
        .await
        .expect_err("missing id must fail");
    assert!(store.error().is_some());

    store.fetch_all().await;
    assert_eq!(store.error(), None);
}
