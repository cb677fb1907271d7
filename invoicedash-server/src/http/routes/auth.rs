//! Sign-in endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use invoicedash_core::models::User;
use serde::Deserialize;

use crate::auth::authorize;
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - the signed-in user, or 401
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    authorize(&state.pool, &req.email, &req.password)
        .await?
        .map(Json)
        .ok_or(ApiError::InvalidCredentials)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/login", post(login))
}
