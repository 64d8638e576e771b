//! Study operations over a review record store.
//!
//! The service is stateless and request-scoped: each call reads from the
//! store, computes with the pure core, and writes back. The only
//! concurrency concern is the read-then-write window in [`StudyService::rate`],
//! closed with a compare-and-swap on `review_count`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use study_core::{policy, queue, stats, Flashcard, SessionStats, StudyStats};

use crate::error::{Result, SchedulerError};
use crate::store::{ReviewStore, ReviewUpdate};

/// Outcome of asking for the next card to study.
///
/// "None due" is not an error: it means the session is complete. It is kept
/// distinct from "no cards at all", which should prompt card creation
/// instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextCard {
    Found {
        flashcard: Flashcard,
        session_stats: SessionStats,
    },
    NoneDueNow {
        session_stats: SessionStats,
    },
    NoFlashcards,
}

/// Result of rating a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingOutcome {
    pub next_review_date: DateTime<Utc>,
    pub interval_days: u32,
}

/// Study scheduler over an injected store.
#[derive(Clone)]
pub struct StudyService<S> {
    store: S,
}

impl<S: ReviewStore> StudyService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The next flashcard to study, with session statistics.
    ///
    /// One fetch of the user's full card set feeds both the aggregator and
    /// the selector, which is also what distinguishes an empty collection
    /// from a finished session.
    pub async fn get_next(&self, owner_id: Uuid) -> Result<NextCard> {
        let cards = self.store.list_by_owner(owner_id).await?;
        if cards.is_empty() {
            debug!(%owner_id, "user has no flashcards");
            return Ok(NextCard::NoFlashcards);
        }

        let now = Utc::now();
        let session_stats = stats::session_stats(&cards, now);

        match queue::select_next(&cards, now) {
            Some(card) => {
                debug!(%owner_id, flashcard_id = card.id, "selected next flashcard");
                Ok(NextCard::Found {
                    flashcard: card.clone(),
                    session_stats,
                })
            }
            None => {
                debug!(%owner_id, "no flashcards due");
                Ok(NextCard::NoneDueNow { session_stats })
            }
        }
    }

    /// Record a rating and reschedule the card.
    ///
    /// A card that does not exist and a card owned by someone else both come
    /// back as [`SchedulerError::NotFound`]. The write is conditioned on the
    /// `review_count` read in step one; if anything moved it in between
    /// (including deletion), nothing is persisted and the caller gets
    /// [`SchedulerError::Conflict`].
    pub async fn rate(&self, owner_id: Uuid, flashcard_id: i64, known: bool) -> Result<RatingOutcome> {
        let card = self
            .store
            .find_by_owner_and_id(owner_id, flashcard_id)
            .await?
            .ok_or(SchedulerError::NotFound { flashcard_id })?;

        let now = Utc::now();
        let scheduled = policy::schedule(card.review_count, known, now);

        let updated = self
            .store
            .update_review_fields(
                owner_id,
                flashcard_id,
                ReviewUpdate {
                    next_review_date: scheduled.next_review_date,
                    review_count: card.review_count + 1,
                    last_reviewed_at: now,
                    expected_review_count: card.review_count,
                },
            )
            .await?;

        if !updated {
            warn!(%owner_id, flashcard_id, "review update matched no row");
            return Err(SchedulerError::Conflict { flashcard_id });
        }

        info!(
            %owner_id,
            flashcard_id,
            known,
            review_count = card.review_count + 1,
            interval_days = scheduled.interval_days,
            "flashcard rated"
        );

        Ok(RatingOutcome {
            next_review_date: scheduled.next_review_date,
            interval_days: scheduled.interval_days,
        })
    }

    /// Counts for the study session header.
    pub async fn session_stats(&self, owner_id: Uuid) -> Result<SessionStats> {
        let cards = self.store.list_by_owner(owner_id).await?;
        Ok(stats::session_stats(&cards, Utc::now()))
    }

    /// Full statistics for the stats view.
    pub async fn study_stats(&self, owner_id: Uuid) -> Result<StudyStats> {
        let cards = self.store.list_by_owner(owner_id).await?;
        Ok(stats::study_stats(&cards, Utc::now()))
    }
}
