//! Shared fixtures for scheduler integration tests.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use study_core::{Flashcard, Source};
use studycards_scheduler::error::StoreError;
use studycards_scheduler::store::{MemoryStore, NewFlashcard, ReviewStore, ReviewUpdate};

/// Initialize tracing output for a test run. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".into()),
        ))
        .with_test_writer()
        .try_init();
}

/// Build a flashcard with exact creation order and review state.
///
/// `created_offset_min` and `next_review_offset` are relative to now, so a
/// negative review offset makes the card overdue.
pub fn card(
    owner_id: Uuid,
    id: i64,
    created_offset_min: i64,
    review_count: u32,
    next_review_offset: Option<Duration>,
) -> Flashcard {
    let now = Utc::now();
    Flashcard {
        id,
        owner_id,
        front: format!("question {id}"),
        back: format!("answer {id}"),
        source: Source::Manual,
        created_at: now + Duration::minutes(created_offset_min),
        next_review_date: next_review_offset.map(|offset| now + offset),
        review_count,
        last_reviewed_at: (review_count > 0).then(|| now - Duration::hours(6)),
    }
}

/// Memory store pre-populated with the given cards.
pub fn seeded_store(cards: Vec<Flashcard>) -> MemoryStore {
    let store = MemoryStore::new();
    for c in cards {
        store.seed(c);
    }
    store
}

/// Store whose every call fails, for error-propagation tests.
pub struct FailingStore;

#[async_trait]
impl ReviewStore for FailingStore {
    async fn list_by_owner(&self, _owner_id: Uuid) -> Result<Vec<Flashcard>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn find_by_owner_and_id(
        &self,
        _owner_id: Uuid,
        _id: i64,
    ) -> Result<Option<Flashcard>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn update_review_fields(
        &self,
        _owner_id: Uuid,
        _id: i64,
        _update: ReviewUpdate,
    ) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn insert(&self, _card: NewFlashcard) -> Result<Flashcard, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Store where every write loses to a concurrent rating: reads pass through,
/// updates never match.
pub struct ContendedStore(pub MemoryStore);

#[async_trait]
impl ReviewStore for ContendedStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Flashcard>, StoreError> {
        self.0.list_by_owner(owner_id).await
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: Uuid,
        id: i64,
    ) -> Result<Option<Flashcard>, StoreError> {
        self.0.find_by_owner_and_id(owner_id, id).await
    }

    async fn update_review_fields(
        &self,
        _owner_id: Uuid,
        _id: i64,
        _update: ReviewUpdate,
    ) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn insert(&self, card: NewFlashcard) -> Result<Flashcard, StoreError> {
        self.0.insert(card).await
    }
}
