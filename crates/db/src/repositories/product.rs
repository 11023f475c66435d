//! Product repository for database operations.

use async_trait::async_trait;
use catalog_core::Product;
use catalog_shared::types::{PageRequest, ProductId, SortOrder};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, DatabaseConnection, EntityTrait, ModelTrait,
    QueryOrder, QuerySelect, Set, sea_query::Order,
};
use tracing::debug;

use super::{ProductStore, StoreError};
use crate::entities::products;

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: ProductId::from_uuid(model.id),
            name: model.name,
            price: model.price,
            created_at: model.created_at,
        }
    }
}

impl From<&Product> for products::ActiveModel {
    fn from(product: &Product) -> Self {
        Self {
            id: Set(product.id.into_inner()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at.clone()),
        }
    }
}

/// Product repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: ProductId) -> Result<products::Model, StoreError> {
        products::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("Product {id}")))
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn create(&self, product: &Product) -> Result<(), StoreError> {
        products::Entity::insert(products::ActiveModel::from(product))
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| StoreError::on_insert(e, &format!("Product {}", product.id)))?;

        debug!(product_id = %product.id, "Product inserted");
        Ok(())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, StoreError> {
        self.find_model(id).await.map(Product::from)
    }

    async fn update(&self, id: ProductId, product: &Product) -> Result<(), StoreError> {
        // Target row must exist before the save
        self.find_model(id).await?;

        let model = products::ActiveModel {
            id: Unchanged(id.into_inner()),
            name: Set(product.name.clone()),
            price: Set(product.price),
            created_at: Set(product.created_at.clone()),
        };
        model.update(&self.db).await?;

        debug!(product_id = %id, "Product updated");
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let model = self.find_model(id).await?;
        model.delete(&self.db).await?;

        debug!(product_id = %id, "Product deleted");
        Ok(())
    }

    async fn get_all(&self, request: PageRequest) -> Result<Vec<Product>, StoreError> {
        let order = match request.sort {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        // Ties on created_at fall back to the time-ordered id
        let mut query = products::Entity::find()
            .order_by(products::Column::CreatedAt, order.clone())
            .order_by(products::Column::Id, order);

        if let Some((offset, limit)) = request.window() {
            query = query.offset(offset).limit(limit);
        }

        let models = query.all(&self.db).await?;
        Ok(models.into_iter().map(Product::from).collect())
    }
}
