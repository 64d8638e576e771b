//! Review record store abstraction.
//!
//! The scheduler never talks to a database directly; it goes through
//! [`ReviewStore`] so the persistence backend stays swappable. Every method
//! is scoped by owner: a store must never return or touch another user's
//! cards.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use study_core::{Flashcard, Source};

use crate::error::StoreError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Scheduling fields written by a rating.
///
/// `expected_review_count` guards the write: the update applies only if the
/// stored count still matches what the transaction read, so two concurrent
/// ratings cannot both land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub next_review_date: DateTime<Utc>,
    pub review_count: u32,
    pub last_reviewed_at: DateTime<Utc>,
    pub expected_review_count: u32,
}

/// A flashcard to create; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewFlashcard {
    pub owner_id: Uuid,
    pub front: String,
    pub back: String,
    pub source: Source,
}

/// Storage collaborator consumed by the study service.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// All flashcards owned by the user, in no particular order.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Flashcard>, StoreError>;

    /// Fetch one flashcard, scoped by both owner and id.
    async fn find_by_owner_and_id(
        &self,
        owner_id: Uuid,
        id: i64,
    ) -> Result<Option<Flashcard>, StoreError>;

    /// Apply a rating's scheduling fields. Returns `false` when no row
    /// matched, either because the card is gone (or foreign) or because the
    /// compare-and-swap guard failed.
    async fn update_review_fields(
        &self,
        owner_id: Uuid,
        id: i64,
        update: ReviewUpdate,
    ) -> Result<bool, StoreError>;

    /// Create a flashcard with a fresh review state.
    async fn insert(&self, card: NewFlashcard) -> Result<Flashcard, StoreError>;
}
