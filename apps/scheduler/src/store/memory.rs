//! In-memory review store.
//!
//! Reference implementation of [`ReviewStore`] semantics; used by the
//! integration tests and handy for local experiments. Not durable.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use study_core::Flashcard;

use crate::error::StoreError;
use crate::store::{NewFlashcard, ReviewStore, ReviewUpdate};

/// Store backed by a vector behind a lock. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    cards: RwLock<Vec<Flashcard>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully specified card, keeping its id and timestamps.
    ///
    /// Tests use this to pin creation order and review state exactly.
    pub fn seed(&self, card: Flashcard) {
        let mut cards = self.inner.cards.write().expect("store lock poisoned");
        self.inner
            .next_id
            .fetch_max(card.id, Ordering::SeqCst);
        cards.push(card);
    }

    /// Number of cards across all owners.
    pub fn len(&self) -> usize {
        self.inner.cards.read().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Flashcard>, StoreError> {
        let cards = self.inner.cards.read().expect("store lock poisoned");
        Ok(cards
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: Uuid,
        id: i64,
    ) -> Result<Option<Flashcard>, StoreError> {
        let cards = self.inner.cards.read().expect("store lock poisoned");
        Ok(cards
            .iter()
            .find(|c| c.owner_id == owner_id && c.id == id)
            .cloned())
    }

    async fn update_review_fields(
        &self,
        owner_id: Uuid,
        id: i64,
        update: ReviewUpdate,
    ) -> Result<bool, StoreError> {
        let mut cards = self.inner.cards.write().expect("store lock poisoned");
        let Some(card) = cards.iter_mut().find(|c| {
            c.owner_id == owner_id && c.id == id && c.review_count == update.expected_review_count
        }) else {
            return Ok(false);
        };

        card.next_review_date = Some(update.next_review_date);
        card.review_count = update.review_count;
        card.last_reviewed_at = Some(update.last_reviewed_at);
        Ok(true)
    }

    async fn insert(&self, card: NewFlashcard) -> Result<Flashcard, StoreError> {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let flashcard = Flashcard {
            id,
            owner_id: card.owner_id,
            front: card.front,
            back: card.back,
            source: card.source,
            created_at: Utc::now(),
            next_review_date: None,
            review_count: 0,
            last_reviewed_at: None,
        };
        self.inner
            .cards
            .write()
            .expect("store lock poisoned")
            .push(flashcard.clone());
        Ok(flashcard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use study_core::Source;

    fn new_card(owner_id: Uuid) -> NewFlashcard {
        NewFlashcard {
            owner_id,
            front: "question".to_string(),
            back: "answer".to_string(),
            source: Source::Manual,
        }
    }

    #[tokio::test]
    async fn insert_starts_with_fresh_review_state() {
        let store = MemoryStore::new();
        let card = store.insert(new_card(Uuid::new_v4())).await.unwrap();
        assert_eq!(card.review_count, 0);
        assert!(card.next_review_date.is_none());
        assert!(card.last_reviewed_at.is_none());
    }

    #[tokio::test]
    async fn list_is_scoped_by_owner() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.insert(new_card(alice)).await.unwrap();
        store.insert(new_card(alice)).await.unwrap();
        store.insert(new_card(bob)).await.unwrap();

        assert_eq!(store.list_by_owner(alice).await.unwrap().len(), 2);
        assert_eq!(store.list_by_owner(bob).await.unwrap().len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn update_misses_on_stale_review_count() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let card = store.insert(new_card(owner)).await.unwrap();
        let now = Utc::now();

        let update = ReviewUpdate {
            next_review_date: now + Duration::days(1),
            review_count: 1,
            last_reviewed_at: now,
            expected_review_count: 0,
        };
        assert!(store
            .update_review_fields(owner, card.id, update)
            .await
            .unwrap());

        // Same guard again: the count moved on, so the write must not land.
        assert!(!store
            .update_review_fields(owner, card.id, update)
            .await
            .unwrap());

        let stored = store
            .find_by_owner_and_id(owner, card.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.review_count, 1);
    }

    #[tokio::test]
    async fn update_misses_for_foreign_owner() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let card = store.insert(new_card(owner)).await.unwrap();
        let now = Utc::now();

        let update = ReviewUpdate {
            next_review_date: now + Duration::days(1),
            review_count: 1,
            last_reviewed_at: now,
            expected_review_count: 0,
        };
        assert!(!store
            .update_review_fields(Uuid::new_v4(), card.id, update)
            .await
            .unwrap());
    }
}
