//! Error types for the study scheduler.
//!
//! Failures from the store propagate unchanged; nothing is swallowed or
//! retried here. Retry policy belongs to the caller.

use thiserror::Error;

/// Failures from the review record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by study operations.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The flashcard does not exist or belongs to another user. The two
    /// cases are indistinguishable on purpose: callers must not learn
    /// whether someone else's card exists.
    #[error("flashcard {flashcard_id} not found")]
    NotFound { flashcard_id: i64 },

    /// The card changed between read and write. Nothing was persisted; the
    /// caller should re-fetch and retry.
    #[error("flashcard {flashcard_id} was modified concurrently")]
    Conflict { flashcard_id: i64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for scheduler operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;
