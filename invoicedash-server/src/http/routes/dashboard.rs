//! Overview page endpoints: revenue chart and summary cards

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use invoicedash_core::models::{CardData, Revenue};

use crate::db::{CardRepo, RevenueRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /api/revenue
async fn revenue(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Revenue>>, ApiError> {
    let revenue = RevenueRepo::new(&state.pool)
        .with_delay(state.revenue_delay)
        .fetch()
        .await?;
    Ok(Json(revenue))
}

/// GET /api/cards
async fn cards(State(state): State<Arc<AppState>>) -> Result<Json<CardData>, ApiError> {
    Ok(Json(CardRepo::new(&state.pool).fetch().await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/revenue", get(revenue))
        .route("/api/cards", get(cards))
}
