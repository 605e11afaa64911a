//! Account registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::user::{Credentials, TokenResponse, User},
};

/// Register a new user account
#[utoipa::path(
    post,
    path = "/register",
    tag = "accounts",
    request_body = Credentials,
    responses(
        (status = 201, description = "Account created", body = User),
        (status = 409, description = "Username already taken", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<(StatusCode, Json<User>)> {
    let created = state
        .services
        .accounts
        .register(&credentials.username, &credentials.password)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Log in and receive an access token
#[utoipa::path(
    post,
    path = "/login",
    tag = "accounts",
    request_body = Credentials,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Unknown username", body = crate::error::ErrorResponse),
        (status = 401, description = "Wrong password", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<TokenResponse>> {
    let access_token = state
        .services
        .accounts
        .login(&credentials.username, &credentials.password)
        .await?;
    Ok(Json(TokenResponse { access_token }))
}
