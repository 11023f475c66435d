//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth_middleware};

pub mod health;
pub mod products;
pub mod users;

/// Creates the public routes (health, registration, login).
pub fn public_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(users::routes())
}

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Product routes require a valid access token
    let protected_routes =
        Router::new()
            .merge(products::routes())
            .layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ));

    public_routes().merge(protected_routes)
}
