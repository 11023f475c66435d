//! User registration and login routes.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use catalog_core::User;
use catalog_shared::{
    AppError,
    auth::{AccessTokenResponse, CreateUserRequest, LoginRequest},
};
use tracing::info;

use crate::{AppState, error::ApiResult};

/// Creates the users router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/login", post(login))
}

/// POST /users - Register a new user.
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(payload) = payload?;

    let user = User::new(&payload.name, &payload.email, &payload.password)?;
    state.users.create(&user).await?;

    info!(user_id = %user.id, "User created");
    Ok(StatusCode::CREATED)
}

/// POST /users/login - Exchange credentials for an access token.
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AccessTokenResponse>> {
    let Json(payload) = payload?;

    let email = User::normalize_email(&payload.email);
    let user = state.users.get_by_email(email).await?;

    if !user.compare_password(&payload.password)? {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(AppError::Unauthorized("Invalid email or password".to_string()).into());
    }

    let access_token = state
        .jwt_service
        .generate_access_token(user.id.into_inner())?;

    info!(user_id = %user.id, "User logged in");
    Ok(Json(AccessTokenResponse { access_token }))
}
