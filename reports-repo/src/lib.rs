//! # Reports Repo
//!
//! Concrete adapters for the sales reporting service:
//! - [`SqliteStore`] implements the `TransactionStore` port over sqlx.
//! - [`HttpSeedSource`] implements the `SeedSource` port over reqwest.

pub mod seed;
pub mod sqlite;

mod types;

#[cfg(test)]
mod sqlite_tests;

pub use seed::{DEFAULT_SEED_URL, HttpSeedSource};
pub use sqlite::SqliteStore;

/// Build and initialize a store from a database URL.
///
/// Connects, runs the schema migration, and returns a ready-to-use store.
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://reports.db?mode=rwc").await?;
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<SqliteStore> {
    SqliteStore::new(database_url).await
}
