//! Error types for the reporting service.

/// Domain-level errors (invalid input against business rules).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid month: {0}")]
    UnknownMonth(String),

    #[error("Price cannot be negative: {0}")]
    NegativePrice(f64),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),
}

/// Seed source errors (upstream dataset fetch failures).
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seed fetch failed: {0}")]
    Http(String),

    #[error("Seed payload could not be decoded: {0}")]
    Decode(String),
}

/// Application-level errors (for HTTP responses).
///
/// The API distinguishes exactly two kinds of failure: a client error
/// (an unresolvable month name) and a server error (any store or network
/// failure). Nothing is retried or recovered locally.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => AppError::BadRequest(e.to_string()),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        AppError::Internal(err.to_string())
    }
}
