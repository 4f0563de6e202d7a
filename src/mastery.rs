//! Mastery score tracking
//!
//! A 0-100 retention-confidence score updated by a fixed delta per rating,
//! independent of the SM-2 parameters. Calling layers surface it directly as
//! a progress percentage, or bucketed through [`MasteryLevel`].

use serde::{Deserialize, Serialize};

use crate::types::{PerformanceRating, MAX_MASTERY};

/// Score change applied for a single review, before clamping.
pub fn mastery_delta(rating: PerformanceRating) -> i8 {
    match rating {
        PerformanceRating::Forgot => -15,
        PerformanceRating::Difficult => -5,
        PerformanceRating::Hesitant => 5,
        PerformanceRating::Easy => 10,
        PerformanceRating::Perfect => 15,
    }
}

/// Updated mastery score, clamped to `[0, 100]`.
pub fn next_mastery(mastery: u8, rating: PerformanceRating) -> u8 {
    let raw = mastery as i16 + mastery_delta(rating) as i16;
    raw.clamp(0, MAX_MASTERY as i16) as u8
}

/// Coarse progress band derived from the mastery score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MasteryLevel {
    New,
    Learning,
    Familiar,
    Mastered,
}

impl MasteryLevel {
    /// Band boundaries follow the low/medium/high split used for word
    /// scores elsewhere in the system, with 0 kept distinct for items that
    /// never demonstrated recall.
    pub fn from_score(mastery: u8) -> Self {
        match mastery {
            0 => MasteryLevel::New,
            1..=39 => MasteryLevel::Learning,
            40..=79 => MasteryLevel::Familiar,
            _ => MasteryLevel::Mastered,
        }
    }
}
