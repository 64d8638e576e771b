//! Core types for the study scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a flashcard was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Manual,
    #[serde(rename = "ai-full")]
    AiFull,
    #[serde(rename = "ai-edited")]
    AiEdited,
}

impl Default for Source {
    fn default() -> Self {
        Self::Manual
    }
}

impl Source {
    /// Get the source name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::AiFull => "ai-full",
            Self::AiEdited => "ai-edited",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(Self::Manual),
            "ai-full" => Some(Self::AiFull),
            "ai-edited" => Some(Self::AiEdited),
            _ => None,
        }
    }
}

/// A flashcard with its review schedule.
///
/// `next_review_date == None` means the card has never been studied; such a
/// card always has `review_count == 0`. Both fields are only ever written
/// together by a rating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: i64,
    pub owner_id: Uuid,
    pub front: String,
    pub back: String,
    pub source: Source,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review_date: Option<DateTime<Utc>>,
    pub review_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
}

impl Flashcard {
    /// Whether the card has never been studied.
    pub fn is_new(&self) -> bool {
        self.next_review_date.is_none()
    }
}

/// Counts shown during a study session.
///
/// `due_count` includes every new card, so `due_count >= new_count` always.
/// Callers sum due and new knowing they overlap; do not change one predicate
/// without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub due_count: usize,
    pub new_count: usize,
    pub learned_count: usize,
}

/// Full study statistics for a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyStats {
    pub total_flashcards: usize,
    pub due_today: usize,
    pub new_cards: usize,
    pub learned_cards: usize,
    pub mastered_cards: usize,
    /// Fraction of cards reviewed at least once, 0.0 to 1.0.
    pub retention_rate: f64,
}
