//! Interval-ladder scheduling policy.
//!
//! Deliberately simple: no ease factor, no fuzz, no per-card difficulty.
//! The interval depends only on how many times the card has been rated and
//! whether the current answer was correct, so the whole policy is a pure
//! function of its inputs.

use chrono::{DateTime, Duration, Utc};

/// Review intervals in days for correct answers, indexed by total rating
/// count. Clamped to the last entry once a card has been rated more often
/// than the ladder is long.
const INTERVALS: [u32; 5] = [1, 3, 7, 14, 30];

/// New schedule for a card after a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub interval_days: u32,
    pub next_review_date: DateTime<Utc>,
}

/// Interval in days for a card whose rating count, including the rating
/// being applied, is `new_review_count`.
///
/// A wrong answer always resets to the shortest interval. The rating count
/// itself keeps incrementing on failures; it tracks total attempts, not
/// streak length.
pub fn interval_days(new_review_count: u32, known: bool) -> u32 {
    if !known {
        return 1;
    }
    let idx = new_review_count.saturating_sub(1).min(INTERVALS.len() as u32 - 1);
    INTERVALS[idx as usize]
}

/// Compute the next schedule for a card rated `known` whose review count
/// before this rating was `review_count_before`.
///
/// The next review date is a fixed multiple of 24 hours from `now`; no
/// calendar-day rounding is applied.
pub fn schedule(review_count_before: u32, known: bool, now: DateTime<Utc>) -> Scheduled {
    let new_review_count = review_count_before + 1;
    let days = interval_days(new_review_count, known);
    Scheduled {
        interval_days: days,
        next_review_date: now + Duration::days(i64::from(days)),
    }
}
