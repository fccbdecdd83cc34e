//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A product sale record.
///
/// Records are immutable once inserted - the seed loader replaces the
/// entire collection wholesale and nothing updates rows in place. The
/// record is flat and denormalized: no relationships, no uniqueness
/// beyond the synthetic id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, minted at ingestion time
    pub id: TransactionId,
    /// Product title
    #[schema(example = "Mens Cotton Jacket")]
    pub title: String,
    /// Free-text product description
    pub description: String,
    /// Sale price, non-negative
    #[schema(example = 150.0)]
    pub price: f64,
    /// When the sale happened; only the month component is ever queried
    pub date_of_sale: DateTime<Utc>,
    /// Product category tag, low cardinality
    #[schema(example = "men's clothing")]
    pub category: String,
    /// Whether the item actually sold
    pub sold: bool,
    /// Product image URL, never queried
    pub image: String,
}

/// One item of the upstream seed dataset, as fetched.
///
/// Identical to [`Transaction`] minus the id, which the seed loader mints
/// on ingestion. `sold` is a JSON boolean in the upstream dataset and is
/// kept boolean end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub date_of_sale: DateTime<Utc>,
    pub category: String,
    pub sold: bool,
    pub image: String,
}

impl Transaction {
    /// Builds a transaction from a seed record, minting a fresh id.
    ///
    /// Rejects negative prices; the upstream dataset should never contain
    /// one, but the invariant lives here rather than in every adapter.
    pub fn from_seed(record: SeedRecord) -> Result<Self, DomainError> {
        if record.price < 0.0 {
            return Err(DomainError::NegativePrice(record.price));
        }

        Ok(Self {
            id: TransactionId::new(),
            title: record.title,
            description: record.description,
            price: record.price,
            date_of_sale: record.date_of_sale,
            category: record.category,
            sold: record.sold,
            image: record.image,
        })
    }

    /// Reconstructs a transaction from database fields.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: TransactionId,
        title: String,
        description: String,
        price: f64,
        date_of_sale: DateTime<Utc>,
        category: String,
        sold: bool,
        image: String,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            date_of_sale,
            category,
            sold,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(price: f64) -> SeedRecord {
        SeedRecord {
            title: "Widget".to_string(),
            description: "A widget".to_string(),
            price,
            date_of_sale: Utc::now(),
            category: "gadgets".to_string(),
            sold: true,
            image: "https://example.com/widget.png".to_string(),
        }
    }

    #[test]
    fn test_from_seed_mints_distinct_ids() {
        let a = Transaction::from_seed(seed(10.0)).unwrap();
        let b = Transaction::from_seed(seed(10.0)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_from_seed_rejects_negative_price() {
        assert!(matches!(
            Transaction::from_seed(seed(-1.0)),
            Err(DomainError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let tx = Transaction::from_seed(seed(99.5)).unwrap();
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("dateOfSale").is_some());
        assert!(json.get("date_of_sale").is_none());
        assert_eq!(json["sold"], serde_json::Value::Bool(true));
    }
}
