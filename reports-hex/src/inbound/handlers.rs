//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use reports_types::{AppError, ListingParams, Month, SeedSource, TransactionStore};

use crate::ReportService;

/// Application state shared across handlers.
pub struct AppState<S: TransactionStore, F: SeedSource> {
    pub service: ReportService<S, F>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": msg }),
            ),
            AppError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "message": "Internal server error",
                    "error": detail,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

fn resolve_month(raw: &str) -> Result<Month, ApiError> {
    raw.parse::<Month>()
        .map_err(|e| ApiError(AppError::BadRequest(e.to_string())))
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Replaces the full dataset from the upstream seed source.
#[tracing::instrument(skip(state))]
pub async fn initialize<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.service.initialize().await?;
    Ok(Json(response))
}

/// Lists a page of a month's transactions, optionally filtered by search.
#[tracing::instrument(skip(state), fields(month = %params.month, page = params.page))]
pub async fn list_transactions<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
    Query(params): Query<ListingParams>,
) -> Result<impl IntoResponse, ApiError> {
    let month = resolve_month(&params.month)?;

    let page = state
        .service
        .list(month, &params.search, params.page, params.per_page)
        .await?;

    Ok(Json(page))
}

/// Summary statistics for a month.
#[tracing::instrument(skip(state), fields(month = %month))]
pub async fn statistics<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let month = resolve_month(&month)?;
    let stats = state.service.statistics(month).await?;
    Ok(Json(stats))
}

/// Price histogram for a month.
#[tracing::instrument(skip(state), fields(month = %month))]
pub async fn bar_chart<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let month = resolve_month(&month)?;
    let buckets = state.service.bar_chart(month).await?;
    Ok(Json(buckets))
}

/// Category distribution for a month.
#[tracing::instrument(skip(state), fields(month = %month))]
pub async fn pie_chart<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let month = resolve_month(&month)?;
    let categories = state.service.pie_chart(month).await?;
    Ok(Json(categories))
}

/// All three analytics views for a month, in one envelope.
#[tracing::instrument(skip(state), fields(month = %month))]
pub async fn combined<S: TransactionStore, F: SeedSource>(
    State(state): State<Arc<AppState<S, F>>>,
    Path(month): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let month = resolve_month(&month)?;
    let report = state.service.combined(month).await?;
    Ok(Json(report))
}
