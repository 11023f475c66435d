//! Integration tests for the User repository against in-memory SQLite.

use catalog_core::User;
use catalog_db::{StoreError, UserRepository, UserStore};
use catalog_shared::config::DatabaseConfig;

async fn setup_repo() -> UserRepository {
    let db = catalog_db::setup(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to set up database");
    UserRepository::new(db)
}

#[tokio::test]
async fn test_user_create_and_get_by_email() {
    let repo = setup_repo().await;
    let user = User::new("John Doe", "j@j.com", "123456").unwrap();

    repo.create(&user).await.expect("Failed to create user");

    let found = repo
        .get_by_email("j@j.com")
        .await
        .expect("User should exist");

    assert_eq!(found.id, user.id);
    assert_eq!(found.name, "John Doe");
    assert_eq!(found.password, user.password);
}

#[tokio::test]
async fn test_stored_password_is_a_hash() {
    let repo = setup_repo().await;
    let user = User::new("John Doe", "j@j.com", "123456").unwrap();
    repo.create(&user).await.unwrap();

    let found = repo.get_by_email("j@j.com").await.unwrap();

    assert_ne!(found.password.as_str(), "123456");
    assert!(found.compare_password("123456").unwrap());
    assert!(!found.compare_password("654321").unwrap());
}

#[tokio::test]
async fn test_user_get_by_email_not_found() {
    let repo = setup_repo().await;

    let result = repo.get_by_email("nonexistent@example.com").await;

    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let repo = setup_repo().await;
    let first = User::new("John Doe", "j@j.com", "123456").unwrap();
    let second = User::new("Jane Doe", "j@j.com", "abcdef").unwrap();

    repo.create(&first).await.unwrap();
    let result = repo.create(&second).await;

    assert!(matches!(result, Err(StoreError::Conflict(_))));
}
