//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Response bodies use camelCase field names; the SPA that consumes this
//! API was built against that shape.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Transaction;

// ─────────────────────────────────────────────────────────────────────────────
// Listing DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for the transaction listing endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    /// Full English month name, case-insensitive (required)
    #[param(example = "march")]
    pub month: String,
    /// Free-text search over title and description; a numeric search also
    /// matches the price exactly
    #[serde(default)]
    pub search: String,
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(example = 1)]
    pub page: u32,
    /// Page size
    #[serde(default = "default_per_page")]
    #[param(example = 10)]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

/// One page of matching transactions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    /// The records on this page
    pub transactions: Vec<Transaction>,
    /// Total match count across all pages
    #[schema(example = 42)]
    pub total: i64,
    /// The page that was requested
    #[schema(example = 1)]
    pub current_page: u32,
    /// ceil(total / perPage)
    #[schema(example = 5)]
    pub total_pages: i64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Analytics DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Summary statistics for one month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Sum of price over all matching records (0 when none match)
    #[schema(example = 1234.5)]
    pub total_sales: f64,
    /// Count of matching records with sold = true
    #[schema(example = 7)]
    pub total_items_sold: i64,
    /// Count of matching records with sold = false
    #[schema(example = 3)]
    pub total_items_not_sold: i64,
}

/// One histogram bucket of the price distribution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceBucket {
    /// Bucket label, e.g. "101-200" or "901-above"
    #[schema(example = "101-200")]
    pub range: String,
    /// Records whose price falls inclusively within the bucket
    #[schema(example = 4)]
    pub count: i64,
}

/// Record count for one category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    #[schema(example = "electronics")]
    pub category: String,
    #[schema(example = 6)]
    pub count: i64,
}

/// The three analytics views for one month, bundled.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CombinedReport {
    pub statistics: Statistics,
    pub bar_chart: Vec<PriceBucket>,
    pub pie_chart: Vec<CategoryCount>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Seed DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response after reseeding the collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitializeResponse {
    #[schema(example = "Database initialized successfully.")]
    pub message: String,
    /// Number of records the collection now holds
    #[schema(example = 60)]
    pub inserted: u64,
}
