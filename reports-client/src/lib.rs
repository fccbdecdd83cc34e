//! # Reports Client SDK
//!
//! A typed Rust client for the sales reports API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use reports_types::{
    CategoryCount, CombinedReport, InitializeResponse, PriceBucket, Statistics, TransactionPage,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reports API client.
pub struct ReportsClient {
    base_url: String,
    http: Client,
}

impl ReportsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Replaces the full dataset from the upstream seed source.
    pub async fn initialize(&self) -> Result<InitializeResponse, ClientError> {
        self.get("/initialize").await
    }

    /// Lists a page of a month's transactions.
    pub async fn transactions(
        &self,
        month: &str,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<TransactionPage, ClientError> {
        let resp = self
            .http
            .get(format!("{}/transactions", self.base_url))
            .query(&[
                ("month", month),
                ("search", search),
                ("page", &page.to_string()),
                ("perPage", &per_page.to_string()),
            ])
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Fetches summary statistics for a month.
    pub async fn statistics(&self, month: &str) -> Result<Statistics, ClientError> {
        self.get(&format!("/statistics/{}", month)).await
    }

    /// Fetches the price histogram for a month.
    pub async fn bar_chart(&self, month: &str) -> Result<Vec<PriceBucket>, ClientError> {
        self.get(&format!("/bar-chart/{}", month)).await
    }

    /// Fetches the category distribution for a month.
    pub async fn pie_chart(&self, month: &str) -> Result<Vec<CategoryCount>, ClientError> {
        self.get(&format!("/pie-chart/{}", month)).await
    }

    /// Fetches all three analytics views in one envelope.
    pub async fn combined(&self, month: &str) -> Result<CombinedReport, ClientError> {
        self.get(&format!("/combined/{}", month)).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| status.to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json().await?)
    }
}
