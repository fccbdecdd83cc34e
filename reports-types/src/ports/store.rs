//! Store port trait.
//!
//! This is the primary port in our hexagonal architecture. The query
//! service speaks only this trait; the SQLite adapter (or an in-memory
//! test double) implements it.

use crate::domain::{Month, Transaction};
use crate::dto::CategoryCount;
use crate::error::RepoError;

/// The store port for transaction persistence and aggregation.
///
/// All reads are independent and stateless; the store may serve them
/// concurrently. The only write, `replace_all`, must be atomic so a crash
/// mid-reseed cannot leave the collection empty.
#[async_trait::async_trait]
pub trait TransactionStore: Send + Sync + 'static {
    /// Deletes every record, then inserts the given ones. Atomic.
    /// Returns the number of records inserted.
    async fn replace_all(&self, records: Vec<Transaction>) -> Result<u64, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the records whose sale month matches and which satisfy the
    /// search filter, skipping `skip` matches and returning at most
    /// `limit`.
    ///
    /// The search filter: title or description contains `search`
    /// case-insensitively, OR - when the trimmed search parses as a
    /// number - the price equals that number exactly. An empty search
    /// matches everything in the month.
    async fn find_page(
        &self,
        month: Month,
        search: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, RepoError>;

    /// Counts all records matching the same filter as [`find_page`],
    /// independent of paging.
    ///
    /// [`find_page`]: TransactionStore::find_page
    async fn count_matching(&self, month: Month, search: &str) -> Result<i64, RepoError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum of `price` over the month's records; 0.0 when none match.
    async fn sales_total(&self, month: Month) -> Result<f64, RepoError>;

    /// Counts the month's records with the given sold state.
    async fn count_by_sold(&self, month: Month, sold: bool) -> Result<i64, RepoError>;

    /// Counts the month's records with `min <= price <= max` (both bounds
    /// inclusive); `max = None` means unbounded above.
    async fn count_in_price_range(
        &self,
        month: Month,
        min: f64,
        max: Option<f64>,
    ) -> Result<i64, RepoError>;

    /// Groups the month's records by category.
    async fn count_by_category(&self, month: Month) -> Result<Vec<CategoryCount>, RepoError>;
}
