//! Core scheduling logic for the flashcard study application.
//!
//! Provides:
//! - Interval-ladder scheduling policy for rating outcomes
//! - Study-queue ordering and next-card selection
//! - Session and study statistics aggregation
//! - Shared types (Flashcard, Source, SessionStats, etc.)
//!
//! Everything here is pure and synchronous; callers supply "now" explicitly
//! so behavior stays deterministic and testable. Storage and transport live
//! in the scheduler crate.

pub mod policy;
pub mod queue;
pub mod stats;
pub mod types;

pub use policy::{interval_days, schedule, Scheduled};
pub use queue::{is_due, select_next, study_order};
pub use stats::{session_stats, study_stats};
pub use types::{Flashcard, SessionStats, Source, StudyStats};
