//! Error types for the scheduling engine.

/// Failure modes of a scheduling call.
///
/// A call either produces a fully recomputed state or fails with one of
/// these; there is no partially updated output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A wire value outside the five-valued rating domain.
    #[error("invalid performance rating: {0} is outside 0..=4")]
    InvalidRating(u8),
    /// The supplied review state violates a scheduling invariant.
    #[error("invalid review state: {0}")]
    InvalidState(String),
}
