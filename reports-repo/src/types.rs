//! Database row structs mapped to domain types.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use reports_types::{CategoryCount, RepoError, Transaction, TransactionId};

/// Transaction row from the database.
///
/// SQLite stores the id as a TEXT uuid and the timestamp as RFC 3339
/// text; conversion failures mean the row was written by something other
/// than this adapter and surface as database errors.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: String,
    pub category: String,
    pub sold: bool,
    pub image: String,
}

impl DbTransaction {
    pub fn into_domain(self) -> Result<Transaction, RepoError> {
        let id: TransactionId = self
            .id
            .parse()
            .map_err(|e: uuid::Error| RepoError::Database(e.to_string()))?;

        let date_of_sale: DateTime<Utc> = DateTime::parse_from_rfc3339(&self.date_of_sale)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Transaction::from_parts(
            id,
            self.title,
            self.description,
            self.price,
            date_of_sale,
            self.category,
            self.sold,
            self.image,
        ))
    }
}

/// Category aggregation row.
#[derive(FromRow)]
pub struct DbCategoryCount {
    pub category: String,
    pub count: i64,
}

impl DbCategoryCount {
    pub fn into_dto(self) -> CategoryCount {
        CategoryCount {
            category: self.category,
            count: self.count,
        }
    }
}
