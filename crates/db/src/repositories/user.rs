//! User repository for database operations.

use async_trait::async_trait;
use catalog_core::{User, auth::HashedPassword};
use catalog_shared::types::UserId;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::{StoreError, UserStore};
use crate::entities::users;

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId::from_uuid(model.id),
            name: model.name,
            email: model.email,
            password: HashedPassword::from_stored(model.password),
        }
    }
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &User) -> Result<(), StoreError> {
        let model = users::ActiveModel {
            id: Set(user.id.into_inner()),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.as_str().to_string()),
        };

        users::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| StoreError::on_insert(e, &format!("User with email {}", user.email)))?;

        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> Result<User, StoreError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or_else(|| StoreError::NotFound(format!("User with email {email}")))
    }
}
