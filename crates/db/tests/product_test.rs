//! Integration tests for the Product repository against in-memory SQLite.

use catalog_core::Product;
use catalog_db::{ProductRepository, ProductStore, StoreError};
use catalog_shared::config::DatabaseConfig;
use catalog_shared::types::{PageRequest, ProductId};

async fn setup_repo() -> ProductRepository {
    let db = catalog_db::setup(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to set up database");
    ProductRepository::new(db)
}

/// Inserts `count` products named "Product 1".."Product N" in order.
async fn seed_products(repo: &ProductRepository, count: u32) {
    for i in 1..=count {
        let product = Product::new(format!("Product {i}"), f64::from(i) * 1.5)
            .expect("valid product");
        repo.create(&product).await.expect("Failed to create product");
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_product_create_and_get_by_id() {
    let repo = setup_repo().await;
    let product = Product::new("Test Product 1", 10.0).unwrap();

    repo.create(&product).await.expect("Failed to create product");

    let found = repo
        .get_by_id(product.id)
        .await
        .expect("Product should exist");

    assert_eq!(found, product);
}

#[tokio::test]
async fn test_product_get_by_id_not_found() {
    let repo = setup_repo().await;

    let result = repo.get_by_id(ProductId::new()).await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_product_update() {
    let repo = setup_repo().await;
    let product = Product::new("Test Product 2", 10.0).unwrap();
    repo.create(&product).await.unwrap();

    let mut found = repo.get_by_id(product.id).await.unwrap();
    found.name = "Updated Product 2".to_string();
    found.price = 12.5;
    repo.update(found.id, &found).await.expect("Failed to update");

    let updated = repo.get_by_id(product.id).await.unwrap();
    assert_eq!(updated.name, "Updated Product 2");
    assert!((updated.price - 12.5).abs() < f64::EPSILON);
    assert_eq!(updated.created_at, product.created_at);
}

#[tokio::test]
async fn test_product_update_missing_row() {
    let repo = setup_repo().await;
    let product = Product::new("Never stored", 10.0).unwrap();

    let result = repo.update(product.id, &product).await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_product_delete_then_get_is_not_found() {
    let repo = setup_repo().await;
    let product = Product::new("Test Product 3", 10.0).unwrap();
    repo.create(&product).await.unwrap();

    repo.delete(product.id).await.expect("Failed to delete");

    let result = repo.get_by_id(product.id).await;
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_product_delete_missing_row() {
    let repo = setup_repo().await;

    let result = repo.delete(ProductId::new()).await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_get_all_paginates_in_creation_order() {
    let repo = setup_repo().await;
    seed_products(&repo, 23).await;

    let page = repo.get_all(PageRequest::new(1, 10, "asc")).await.unwrap();
    assert_eq!(page.len(), 10);
    assert_eq!(page[0].name, "Product 1");
    assert_eq!(page[9].name, "Product 10");

    let page = repo.get_all(PageRequest::new(2, 10, "asc")).await.unwrap();
    let expected: Vec<String> = (11..=20).map(|i| format!("Product {i}")).collect();
    assert_eq!(names(&page), expected);

    let page = repo.get_all(PageRequest::new(3, 10, "asc")).await.unwrap();
    assert_eq!(names(&page), vec!["Product 21", "Product 22", "Product 23"]);

    let page = repo.get_all(PageRequest::new(4, 10, "asc")).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_get_all_without_pagination_returns_everything() {
    let repo = setup_repo().await;
    seed_products(&repo, 12).await;

    let all = repo.get_all(PageRequest::new(0, 10, "asc")).await.unwrap();
    assert_eq!(all.len(), 12);

    let all = repo.get_all(PageRequest::new(2, 0, "asc")).await.unwrap();
    assert_eq!(all.len(), 12);
}

#[tokio::test]
async fn test_get_all_desc() {
    let repo = setup_repo().await;
    seed_products(&repo, 5).await;

    let page = repo.get_all(PageRequest::new(1, 2, "desc")).await.unwrap();

    assert_eq!(names(&page), vec!["Product 5", "Product 4"]);
}

#[tokio::test]
async fn test_get_all_unknown_sort_is_ascending() {
    let repo = setup_repo().await;
    seed_products(&repo, 3).await;

    let page = repo
        .get_all(PageRequest::new(0, 0, "DROP TABLE products"))
        .await
        .unwrap();

    assert_eq!(names(&page), vec!["Product 1", "Product 2", "Product 3"]);
}
