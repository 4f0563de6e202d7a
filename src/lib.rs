//! # srs-engine - spaced-repetition scheduling core
//!
//! The pure scheduling engine behind vocabulary review: an SM-2-derived
//! algorithm paired with a 0-100 mastery score. One call,
//! [`schedule`](scheduler::schedule), maps an item's current review state and
//! a discrete performance rating to the updated state and the next-review
//! timestamp.
//!
//! Design goals:
//! - **Pure** - no I/O, no clock reads, no hidden state; a deterministic
//!   function of `(state, rating, now)`
//! - **Caller-owned persistence** - storage, due-item queries, and
//!   per-item write serialization live in the surrounding system
//! - **Closed rating domain** - the five-valued rating enum keeps unrelated
//!   integers out of the easiness arithmetic
//! - **Fully tested** - unit tests per module plus a property-based suite
//!
//! ## Modules
//!
//! - [`types`] - review state, performance rating, constants
//! - [`sm2`] - easiness-factor and interval arithmetic
//! - [`mastery`] - mastery score deltas and progress bands
//! - [`scheduler`] - the `schedule` entry point and review application
//! - [`error`] - error taxonomy
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use srs_engine::{schedule, PerformanceRating, ReviewState};
//!
//! let now = Utc::now();
//! let fresh = ReviewState::new_item(now);
//! let after = schedule(&fresh, PerformanceRating::Easy, now).unwrap();
//! assert_eq!(after.mastery, 10);
//! assert_eq!(after.interval, 1);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

pub mod error;
pub mod mastery;
pub mod scheduler;
pub mod sm2;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ScheduleError;
pub use mastery::{mastery_delta, next_mastery, MasteryLevel};
pub use scheduler::{apply_review, schedule};
pub use sm2::{next_easiness, next_progress};
pub use types::{
    PerformanceRating, ReviewLogEntry, ReviewState, FIRST_INTERVAL_DAYS, INITIAL_EASINESS,
    MAX_INTERVAL_DAYS, MAX_MASTERY, MIN_EASINESS, PASS_ORDINAL, SECOND_INTERVAL_DAYS,
};
