//! Common types and constants
//!
//! Shared data structures used by the scheduling engine: the per-item review
//! state, the discrete performance rating, and the review log entry callers
//! append after each scheduled review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

// ==================== Constants ====================

/// Easiness factor assigned to a never-reviewed item
pub const INITIAL_EASINESS: f64 = 2.5;

/// Lower bound for the easiness factor; prevents runaway interval collapse
pub const MIN_EASINESS: f64 = 1.3;

/// Interval (days) after the first successful review
pub const FIRST_INTERVAL_DAYS: u32 = 1;

/// Interval (days) after the second consecutive successful review
pub const SECOND_INTERVAL_DAYS: u32 = 6;

/// Upper bound of the mastery score
pub const MAX_MASTERY: u8 = 100;

/// Cap on the review interval (100 years); keeps the geometric growth from
/// overflowing timestamp arithmetic on very long pass streaks
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// Smallest rating ordinal that counts as a successful recall
pub const PASS_ORDINAL: u8 = 2;

// ==================== Performance rating ====================

/// Recall quality reported for a single review event.
///
/// The ordinal is semantically meaningful: higher means better recall, and
/// the numeric value feeds directly into the easiness-factor formula. The
/// enum stays closed so unrelated integers never reach that arithmetic; wire
/// values come in through [`PerformanceRating::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PerformanceRating {
    Forgot = 0,
    Difficult = 1,
    Hesitant = 2,
    Easy = 3,
    Perfect = 4,
}

impl PerformanceRating {
    /// The underlying ordinal in `0..=4`, exposed for the SM-2 formula.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Whether this rating counts as a successful recall (`Hesitant` and up).
    pub fn is_pass(&self) -> bool {
        self.ordinal() >= PASS_ORDINAL
    }
}

impl TryFrom<u8> for PerformanceRating {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PerformanceRating::Forgot),
            1 => Ok(PerformanceRating::Difficult),
            2 => Ok(PerformanceRating::Hesitant),
            3 => Ok(PerformanceRating::Easy),
            4 => Ok(PerformanceRating::Perfect),
            other => Err(ScheduleError::InvalidRating(other)),
        }
    }
}

// ==================== Review state ====================

/// One past review event, appended by the caller after each scheduling call.
///
/// The scheduler itself never reads the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLogEntry {
    pub date: DateTime<Utc>,
    pub performance: PerformanceRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub context: Option<String>,
}

/// Scheduling state for one learner×word pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Cumulative retention confidence in [0, 100]
    pub mastery: u8,
    /// SM-2 easiness factor, never below [`MIN_EASINESS`]
    pub easiness_factor: f64,
    /// Consecutive successful reviews since the last reset
    pub repetitions: u32,
    /// Days until the next review; 0 only for a never-passed item
    pub interval: u32,
    /// Set by the caller at review time, not by the scheduler
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
    /// When this item next becomes due
    pub next_review: DateTime<Utc>,
    /// Append-only review log, owned by the caller
    #[serde(default)]
    pub review_history: Vec<ReviewLogEntry>,
}

impl ReviewState {
    /// State for a word that just entered a learner's review set.
    ///
    /// The item is immediately due: `next_review == now`.
    pub fn new_item(now: DateTime<Utc>) -> Self {
        Self {
            mastery: 0,
            easiness_factor: INITIAL_EASINESS,
            repetitions: 0,
            interval: 0,
            last_reviewed: None,
            next_review: now,
            review_history: Vec::new(),
        }
    }

    /// Whether this item should be surfaced for review at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    /// Check the state against the scheduling invariants.
    ///
    /// A violation means the state was corrupted upstream (bad migration,
    /// hand-edited row, buggy caller); it is surfaced rather than repaired so
    /// the corruption stays visible.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if !self.easiness_factor.is_finite() {
            return Err(ScheduleError::InvalidState(format!(
                "easinessFactor must be finite, got {}",
                self.easiness_factor
            )));
        }
        if self.easiness_factor < MIN_EASINESS {
            return Err(ScheduleError::InvalidState(format!(
                "easinessFactor {} is below the {MIN_EASINESS} floor",
                self.easiness_factor
            )));
        }
        if self.mastery > MAX_MASTERY {
            return Err(ScheduleError::InvalidState(format!(
                "mastery {} exceeds {MAX_MASTERY}",
                self.mastery
            )));
        }
        if self.repetitions >= 1 && self.interval == 0 {
            return Err(ScheduleError::InvalidState(format!(
                "interval must be at least 1 when repetitions is {}",
                self.repetitions
            )));
        }
        Ok(())
    }
}

// ==================== Tests ====================
