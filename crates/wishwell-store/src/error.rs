use thiserror::Error;

/// Failures surfaced by store operations. Io/Malformed are fatal to the
/// operation that hit them and are never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found")]
    NotFound,

    #[error("Already fulfilled")]
    AlreadyFulfilled,

    #[error("Empty comment")]
    EmptyComment,

    #[error("document unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("document malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("store lock poisoned")]
    LockPoisoned,
}
