//! Port traits implemented by the adapters.

mod seed;
mod store;

pub use seed::SeedSource;
pub use store::TransactionStore;
