//! Pure domain types for the reporting service.

mod month;
mod transaction;

pub use month::Month;
pub use transaction::{SeedRecord, Transaction, TransactionId};
