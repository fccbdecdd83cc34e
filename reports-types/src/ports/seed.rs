//! Seed source port trait.

use crate::domain::SeedRecord;
use crate::error::SeedError;

/// Provides the upstream dataset the collection is reseeded from.
///
/// One-shot fetch: no retry, no partial-failure recovery. Any transport
/// or decode failure surfaces to the caller as a server error.
#[async_trait::async_trait]
pub trait SeedSource: Send + Sync + 'static {
    /// Fetches the full upstream dataset.
    async fn fetch(&self) -> Result<Vec<SeedRecord>, SeedError>;
}
