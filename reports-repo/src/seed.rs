//! HTTP seed source adapter.

use async_trait::async_trait;
use reqwest::Client;

use reports_types::{SeedError, SeedRecord, SeedSource};

/// The fixed upstream dataset the collection is seeded from.
pub const DEFAULT_SEED_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Fetches the seed dataset over HTTP.
pub struct HttpSeedSource {
    http: Client,
    url: String,
}

impl HttpSeedSource {
    /// Creates a seed source for the given dataset URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    /// Returns the configured dataset URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpSeedSource {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_URL)
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError> {
        tracing::info!(url = %self.url, "fetching seed dataset");

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SeedError::Http(e.to_string()))?
            .error_for_status()
            .map_err(|e| SeedError::Http(e.to_string()))?;

        let records: Vec<SeedRecord> = response
            .json()
            .await
            .map_err(|e| SeedError::Decode(e.to_string()))?;

        tracing::info!(count = records.len(), "seed dataset fetched");
        Ok(records)
    }
}
