//! Product CRUD routes. Every route here sits behind the auth middleware.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use catalog_core::{Product, ProductChanges};
use catalog_shared::{
    AppError,
    types::{ListQuery, PageRequest},
};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiResult, middleware::AuthUser};

/// Request payload for `POST /products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// Creates the products router (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// POST /products - Create a product.
async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(payload) = payload?;

    let product = Product::new(payload.name, payload.price)?;
    state.products.create(&product).await?;

    info!(product_id = %product.id, user_id = %auth.user_id(), "Product created");
    Ok(StatusCode::CREATED)
}

/// GET /products - List products, optionally paginated.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Product>>> {
    let request = PageRequest::from(query);

    let products = state.products.get_all(request).await?;
    if products.is_empty() {
        return Err(AppError::NotFound("No products found".to_string()).into());
    }

    Ok(Json(products))
}

/// GET /products/{id} - Fetch one product.
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = Product::parse_id(&id)?;

    let product = state.products.get_by_id(id).await?;
    Ok(Json(product))
}

/// PUT /products/{id} - Apply a partial update and return the result.
async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<ProductChanges>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = Product::parse_id(&id)?;
    let Json(changes) = payload?;

    let mut product = state.products.get_by_id(id).await?;
    product.apply(changes)?;
    state.products.update(id, &product).await?;

    info!(product_id = %id, user_id = %auth.user_id(), "Product updated");
    Ok(Json(product))
}

/// DELETE /products/{id} - Remove a product.
async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = Product::parse_id(&id)?;

    state.products.delete(id).await?;

    info!(product_id = %id, user_id = %auth.user_id(), "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
