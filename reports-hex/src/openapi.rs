//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use reports_types::domain::TransactionId;
use reports_types::dto::{
    CategoryCount, CombinedReport, InitializeResponse, ListingParams, PriceBucket, Statistics,
    TransactionPage,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Replace the full dataset from the upstream seed source
#[utoipa::path(
    get,
    path = "/initialize",
    tag = "seed",
    responses(
        (status = 200, description = "Collection replaced", body = InitializeResponse),
        (status = 500, description = "Seed fetch or store failure")
    )
)]
async fn initialize() {}

/// List a page of a month's transactions
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "reports",
    params(ListingParams),
    responses(
        (status = 200, description = "One page of matching transactions", body = TransactionPage),
        (status = 400, description = "Invalid month name"),
        (status = 500, description = "Store failure")
    )
)]
async fn list_transactions() {}

/// Summary statistics for a month
#[utoipa::path(
    get,
    path = "/statistics/{month}",
    tag = "reports",
    params(
        ("month" = String, Path, description = "Full English month name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Month statistics", body = Statistics),
        (status = 400, description = "Invalid month name"),
        (status = 500, description = "Store failure")
    )
)]
async fn statistics() {}

/// Price histogram for a month
#[utoipa::path(
    get,
    path = "/bar-chart/{month}",
    tag = "reports",
    params(
        ("month" = String, Path, description = "Full English month name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Ordered histogram buckets", body = Vec<PriceBucket>),
        (status = 400, description = "Invalid month name"),
        (status = 500, description = "Store failure")
    )
)]
async fn bar_chart() {}

/// Category distribution for a month
#[utoipa::path(
    get,
    path = "/pie-chart/{month}",
    tag = "reports",
    params(
        ("month" = String, Path, description = "Full English month name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Per-category record counts", body = Vec<CategoryCount>),
        (status = 400, description = "Invalid month name"),
        (status = 500, description = "Store failure")
    )
)]
async fn pie_chart() {}

/// Statistics, histogram, and category distribution in one envelope
#[utoipa::path(
    get,
    path = "/combined/{month}",
    tag = "reports",
    params(
        ("month" = String, Path, description = "Full English month name, case-insensitive")
    ),
    responses(
        (status = 200, description = "All three analytics views", body = CombinedReport),
        (status = 400, description = "Invalid month name"),
        (status = 500, description = "Any sub-query failure; no partial results")
    )
)]
async fn combined() {}

/// OpenAPI documentation for the Reports API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Monthly Sales Reports API",
        version = "1.0.0",
        description = "A reporting API over product sale transactions: bulk seed ingestion, filtered listings, and three per-month analytics views (statistics, price histogram, category distribution).",
        license(name = "MIT"),
    ),
    paths(
        health,
        initialize,
        list_transactions,
        statistics,
        bar_chart,
        pie_chart,
        combined,
    ),
    components(
        schemas(
            TransactionPage,
            Statistics,
            PriceBucket,
            CategoryCount,
            CombinedReport,
            InitializeResponse,
            TransactionId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "seed", description = "Dataset ingestion"),
        (name = "reports", description = "Listing and analytics queries"),
    )
)]
pub struct ApiDoc;
