//! Report Application Service
//!
//! Orchestrates the reporting queries through the store and seed ports.
//! Contains NO infrastructure logic - pure query orchestration.

use reports_types::{
    AppError, CategoryCount, CombinedReport, InitializeResponse, Month, PriceBucket, SeedSource,
    Statistics, Transaction, TransactionPage, TransactionStore,
};

/// The fixed histogram buckets, in output order. Bounds are inclusive;
/// the last bucket is unbounded above.
const PRICE_BUCKETS: [(f64, Option<f64>); 10] = [
    (0.0, Some(100.0)),
    (101.0, Some(200.0)),
    (201.0, Some(300.0)),
    (301.0, Some(400.0)),
    (401.0, Some(500.0)),
    (501.0, Some(600.0)),
    (601.0, Some(700.0)),
    (701.0, Some(800.0)),
    (801.0, Some(900.0)),
    (901.0, None),
];

fn bucket_label(min: f64, max: Option<f64>) -> String {
    match max {
        Some(max) => format!("{}-{}", min as i64, max as i64),
        None => format!("{}-above", min as i64),
    }
}

/// Application service for the reporting queries.
///
/// Generic over `S: TransactionStore` and `F: SeedSource` - the adapters
/// are injected at compile time. This enables:
/// - Swapping the store without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
///
/// The service holds no cross-request state and performs no locking; every
/// method is an independent read (or, for `initialize`, a single atomic
/// replace).
pub struct ReportService<S: TransactionStore, F: SeedSource> {
    store: S,
    seed: F,
}

impl<S: TransactionStore, F: SeedSource> ReportService<S, F> {
    /// Creates a new report service with the given adapters.
    pub fn new(store: S, seed: F) -> Self {
        Self { store, seed }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Seeding
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetches the upstream dataset and replaces the whole collection.
    pub async fn initialize(&self) -> Result<InitializeResponse, AppError> {
        let records = self.seed.fetch().await?;

        let transactions = records
            .into_iter()
            .map(Transaction::from_seed)
            .collect::<Result<Vec<_>, _>>()?;

        let inserted = self.store.replace_all(transactions).await?;
        tracing::info!(inserted, "collection reseeded");

        Ok(InitializeResponse {
            message: "Database initialized successfully.".to_string(),
            inserted,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns one page of the month's records matching the search filter,
    /// together with the paging envelope.
    ///
    /// `page` is 1-based; page 0 is clamped to the first page. The page
    /// slice and the total count are independent reads and run
    /// concurrently.
    pub async fn list(
        &self,
        month: Month,
        search: &str,
        page: u32,
        per_page: u32,
    ) -> Result<TransactionPage, AppError> {
        let skip = i64::from(page.saturating_sub(1)) * i64::from(per_page);
        let limit = i64::from(per_page);

        let (transactions, total) = tokio::try_join!(
            self.store.find_page(month, search, skip, limit),
            self.store.count_matching(month, search),
        )?;

        let divisor = i64::from(per_page.max(1));
        let total_pages = (total + divisor - 1) / divisor;

        Ok(TransactionPage {
            transactions,
            total,
            current_page: page,
            total_pages,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Analytics
    // ─────────────────────────────────────────────────────────────────────────

    /// Summary statistics: price sum plus sold / not-sold counts.
    pub async fn statistics(&self, month: Month) -> Result<Statistics, AppError> {
        let (total_sales, total_items_sold, total_items_not_sold) = tokio::try_join!(
            self.store.sales_total(month),
            self.store.count_by_sold(month, true),
            self.store.count_by_sold(month, false),
        )?;

        Ok(Statistics {
            total_sales,
            total_items_sold,
            total_items_not_sold,
        })
    }

    /// Price histogram over the fixed buckets, in bucket order.
    pub async fn bar_chart(&self, month: Month) -> Result<Vec<PriceBucket>, AppError> {
        let mut buckets = Vec::with_capacity(PRICE_BUCKETS.len());

        for (min, max) in PRICE_BUCKETS {
            let count = self.store.count_in_price_range(month, min, max).await?;
            buckets.push(PriceBucket {
                range: bucket_label(min, max),
                count,
            });
        }

        Ok(buckets)
    }

    /// Category distribution of the month's records.
    pub async fn pie_chart(&self, month: Month) -> Result<Vec<CategoryCount>, AppError> {
        self.store.count_by_category(month).await.map_err(Into::into)
    }

    /// All three analytics views, bundled.
    ///
    /// Fans out to the same methods the individual endpoints use - direct
    /// in-process calls, joined concurrently. If any sub-query fails the
    /// whole call fails; there are no partial results.
    pub async fn combined(&self, month: Month) -> Result<CombinedReport, AppError> {
        let (statistics, bar_chart, pie_chart) = tokio::try_join!(
            self.statistics(month),
            self.bar_chart(month),
            self.pie_chart(month),
        )?;

        Ok(CombinedReport {
            statistics,
            bar_chart,
            pie_chart,
        })
    }
}
