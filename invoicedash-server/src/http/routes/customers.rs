//! Customer endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use invoicedash_core::models::{CustomerField, CustomersTableRow};
use serde::Deserialize;

use crate::db::CustomerRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerSearchParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/customers - select options for the invoice form
async fn all(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CustomerField>>, ApiError> {
    Ok(Json(CustomerRepo::new(&state.pool).all().await?))
}

/// GET /api/customers/table?query=
async fn table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CustomerSearchParams>,
) -> Result<Json<Vec<CustomersTableRow>>, ApiError> {
    Ok(Json(CustomerRepo::new(&state.pool).filtered(&params.query).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/customers", get(all))
        .route("/api/customers/table", get(table))
}
