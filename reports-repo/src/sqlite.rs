//! SQLite store adapter.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use reports_types::{CategoryCount, Month, RepoError, Transaction, TransactionStore};

use crate::types::{DbCategoryCount, DbTransaction};

/// Month-matching predicate shared by every query below. The timestamp
/// column holds RFC 3339 text, so strftime can extract the month.
const MONTH_MATCHES: &str = "CAST(strftime('%m', date_of_sale) AS INTEGER) = ?1";

/// SQLite store implementation.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Each pooled connection to ":memory:" would get its own empty
        // database; pin in-memory URLs to a single connection.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        let ddl = include_str!("../migrations/0001_create_transactions.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The trimmed search string as a number, when it is one. Only a
    /// non-empty numeric search widens the filter to exact price matches.
    fn numeric_search(search: &str) -> Option<f64> {
        let trimmed = search.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }
}

#[async_trait]
impl TransactionStore for SqliteStore {
    async fn replace_all(&self, records: Vec<Transaction>) -> Result<u64, RepoError> {
        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM transactions")
            .execute(&mut *db_tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        let inserted = records.len() as u64;

        for record in records {
            sqlx::query(
                r#"INSERT INTO transactions (id, title, description, price, date_of_sale, category, sold, image)
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind(record.id.to_string())
            .bind(&record.title)
            .bind(&record.description)
            .bind(record.price)
            .bind(record.date_of_sale.to_rfc3339())
            .bind(&record.category)
            .bind(record.sold)
            .bind(&record.image)
            .execute(&mut *db_tx)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        }

        db_tx
            .commit()
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(inserted)
    }

    async fn find_page(
        &self,
        month: Month,
        search: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, RepoError> {
        let pattern = format!("%{}%", search);
        let price = Self::numeric_search(search);

        let rows: Vec<DbTransaction> = sqlx::query_as(&format!(
            r#"SELECT id, title, description, price, date_of_sale, category, sold, image
               FROM transactions
               WHERE {MONTH_MATCHES}
                 AND (title LIKE ?2 OR description LIKE ?2 OR (?3 IS NOT NULL AND price = ?3))
               ORDER BY date_of_sale, id
               LIMIT ?4 OFFSET ?5"#
        ))
        .bind(month.index())
        .bind(&pattern)
        .bind(price)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        rows.into_iter().map(DbTransaction::into_domain).collect()
    }

    async fn count_matching(&self, month: Month, search: &str) -> Result<i64, RepoError> {
        let pattern = format!("%{}%", search);
        let price = Self::numeric_search(search);

        sqlx::query_scalar(&format!(
            r#"SELECT COUNT(*) FROM transactions
               WHERE {MONTH_MATCHES}
                 AND (title LIKE ?2 OR description LIKE ?2 OR (?3 IS NOT NULL AND price = ?3))"#
        ))
        .bind(month.index())
        .bind(&pattern)
        .bind(price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))
    }

    async fn sales_total(&self, month: Month) -> Result<f64, RepoError> {
        sqlx::query_scalar(&format!(
            "SELECT COALESCE(SUM(price), 0.0) FROM transactions WHERE {MONTH_MATCHES}"
        ))
        .bind(month.index())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))
    }

    async fn count_by_sold(&self, month: Month, sold: bool) -> Result<i64, RepoError> {
        sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM transactions WHERE {MONTH_MATCHES} AND sold = ?2"
        ))
        .bind(month.index())
        .bind(sold)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))
    }

    async fn count_in_price_range(
        &self,
        month: Month,
        min: f64,
        max: Option<f64>,
    ) -> Result<i64, RepoError> {
        sqlx::query_scalar(&format!(
            r#"SELECT COUNT(*) FROM transactions
               WHERE {MONTH_MATCHES}
                 AND price >= ?2
                 AND (?3 IS NULL OR price <= ?3)"#
        ))
        .bind(month.index())
        .bind(min)
        .bind(max)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))
    }

    async fn count_by_category(&self, month: Month) -> Result<Vec<CategoryCount>, RepoError> {
        let rows: Vec<DbCategoryCount> = sqlx::query_as(&format!(
            r#"SELECT category, COUNT(*) AS count FROM transactions
               WHERE {MONTH_MATCHES}
               GROUP BY category"#
        ))
        .bind(month.index())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbCategoryCount::into_dto).collect())
    }
}
