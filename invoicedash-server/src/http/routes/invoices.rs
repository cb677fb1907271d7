//! Invoice endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use invoicedash_core::models::{InvoiceForm, InvoicesTableRow, LatestInvoice};
use invoicedash_core::pagination::InvoiceSearchParams;
use serde::{Deserialize, Serialize};

use crate::db::InvoiceRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidUuid;
use crate::http::server::AppState;

/// Search text for the page count
#[derive(Debug, Default, Deserialize)]
pub struct PagesParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub total_pages: u32,
}

/// GET /api/invoices/latest
async fn latest(State(state): State<Arc<AppState>>) -> Result<Json<Vec<LatestInvoice>>, ApiError> {
    Ok(Json(InvoiceRepo::new(&state.pool).latest().await?))
}

/// GET /api/invoices?query=&page= - one page of the filtered invoice table
async fn filtered(
    State(state): State<Arc<AppState>>,
    Query(params): Query<InvoiceSearchParams>,
) -> Result<Json<Vec<InvoicesTableRow>>, ApiError> {
    let rows = InvoiceRepo::new(&state.pool)
        .filtered(&params.query, params.window())
        .await?;
    Ok(Json(rows))
}

/// GET /api/invoices/pages?query=
async fn pages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PagesParams>,
) -> Result<Json<PagesResponse>, ApiError> {
    let total_pages = InvoiceRepo::new(&state.pool).pages(&params.query).await?;
    Ok(Json(PagesResponse { total_pages }))
}

/// GET /api/invoices/{id} - invoice in edit-form shape
async fn by_id(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<InvoiceForm>, ApiError> {
    Ok(Json(InvoiceRepo::new(&state.pool).by_id(id).await?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/invoices", get(filtered))
        .route("/api/invoices/latest", get(latest))
        .route("/api/invoices/pages", get(pages))
        .route("/api/invoices/{id}", get(by_id))
}
