//! Statistics aggregation over a user's full flashcard set.
//!
//! All counts come from one in-memory scan with predicate filters; there are
//! no stored aggregates to drift out of sync.

use chrono::{DateTime, Utc};

use crate::queue::is_due;
use crate::types::{Flashcard, SessionStats, StudyStats};

/// Cards rated at least this many times count as mastered.
const MASTERED_THRESHOLD: u32 = 5;

/// Counts shown in the study session header.
///
/// New cards satisfy the due predicate too, so `due_count` counts them as
/// well. That overlap is intended; see [`SessionStats`].
pub fn session_stats(cards: &[Flashcard], now: DateTime<Utc>) -> SessionStats {
    SessionStats {
        due_count: cards.iter().filter(|c| is_due(c, now)).count(),
        new_count: cards.iter().filter(|c| c.is_new()).count(),
        learned_count: cards.iter().filter(|c| c.review_count > 0).count(),
    }
}

/// Full study statistics for the stats view.
pub fn study_stats(cards: &[Flashcard], now: DateTime<Utc>) -> StudyStats {
    let total = cards.len();
    let learned = cards
        .iter()
        .filter(|c| c.review_count > 0 && c.review_count < MASTERED_THRESHOLD)
        .count();
    let mastered = cards
        .iter()
        .filter(|c| c.review_count >= MASTERED_THRESHOLD)
        .count();

    StudyStats {
        total_flashcards: total,
        due_today: cards.iter().filter(|c| is_due(c, now)).count(),
        new_cards: cards.iter().filter(|c| c.is_new()).count(),
        learned_cards: learned,
        mastered_cards: mastered,
        retention_rate: if total > 0 {
            (learned + mastered) as f64 / total as f64
        } else {
            0.0
        },
    }
}
