//! Review scheduling
//!
//! The engine's single entry point: given an item's current review state and
//! a performance rating, recompute the mastery score, the SM-2 parameters,
//! and the next-review timestamp. Pure and deterministic; the only clock it
//! knows is the `now` the caller supplies.

use chrono::{DateTime, Duration, Utc};

use crate::error::ScheduleError;
use crate::mastery::next_mastery;
use crate::sm2::{next_easiness, next_progress};
use crate::types::{PerformanceRating, ReviewLogEntry, ReviewState};

/// Compute the post-review state for one item.
///
/// Recomputes `mastery`, `easiness_factor`, `repetitions`, `interval`, and
/// `next_review`; `last_reviewed` and `review_history` pass through untouched
/// (those belong to the caller, see [`apply_review`]). The input state is
/// validated first and an invariant violation fails the call without any
/// partial update.
///
/// Day arithmetic is a pure 86 400-second duration on UTC timestamps; no
/// timezone normalization is applied.
///
/// Concurrent reviews of the *same* learner×word pair are a lost-update
/// hazard at the persistence layer: callers must serialize the
/// read-compute-write cycle per pair (version check or per-key lock). The
/// function itself shares nothing and needs no coordination.
pub fn schedule(
    state: &ReviewState,
    rating: PerformanceRating,
    now: DateTime<Utc>,
) -> Result<ReviewState, ScheduleError> {
    state.validate()?;

    let easiness_factor = next_easiness(state.easiness_factor, rating);
    let (repetitions, interval) =
        next_progress(state.repetitions, state.interval, easiness_factor, rating);

    Ok(ReviewState {
        mastery: next_mastery(state.mastery, rating),
        easiness_factor,
        repetitions,
        interval,
        last_reviewed: state.last_reviewed,
        next_review: now + Duration::days(interval as i64),
        review_history: state.review_history.clone(),
    })
}

/// [`schedule`] plus the caller-side bookkeeping of a review event: stamps
/// `last_reviewed = now` and appends a history entry. Still a pure
/// value-in/value-out computation.
pub fn apply_review(
    state: &ReviewState,
    rating: PerformanceRating,
    now: DateTime<Utc>,
    context: Option<String>,
) -> Result<ReviewState, ScheduleError> {
    let mut next = schedule(state, rating, now)?;
    next.last_reviewed = Some(now);
    next.review_history.push(ReviewLogEntry {
        date: now,
        performance: rating,
        context,
    });
    Ok(next)
}
