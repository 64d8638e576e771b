//! Study-queue ordering and next-card selection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::types::Flashcard;

/// Whether a card is eligible for study right now.
///
/// New cards (no review date yet) are always eligible.
pub fn is_due(card: &Flashcard, now: DateTime<Utc>) -> bool {
    match card.next_review_date {
        None => true,
        Some(due) => due <= now,
    }
}

/// Canonical study ordering.
///
/// Primary key: `next_review_date` ascending with `None` first, so brand-new
/// cards are surfaced before any due card, however overdue. Tie-break:
/// `created_at` ascending, oldest card first.
pub fn study_order(a: &Flashcard, b: &Flashcard) -> Ordering {
    a.next_review_date
        .cmp(&b.next_review_date)
        .then(a.created_at.cmp(&b.created_at))
}

/// Select the single highest-priority eligible card, or `None` when nothing
/// is due. Ties on both keys keep the first card in slice order.
pub fn select_next(cards: &[Flashcard], now: DateTime<Utc>) -> Option<&Flashcard> {
    cards
        .iter()
        .filter(|card| is_due(card, now))
        .min_by(|a, b| study_order(a, b))
}
