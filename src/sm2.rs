//! SM-2 arithmetic
//!
//! The easiness-factor update and the repetition/interval progression from
//! the SuperMemo-2 family. Both are pure functions of their arguments; the
//! scheduler composes them with the mastery update in [`crate::scheduler`].

use crate::types::{
    PerformanceRating, FIRST_INTERVAL_DAYS, MAX_INTERVAL_DAYS, MIN_EASINESS, SECOND_INTERVAL_DAYS,
};

/// Updated easiness factor after a review with the given rating.
///
/// `EF' = max(1.3, EF + (0.1 - (5 - p) * (0.08 + (5 - p) * 0.02)))` with `p`
/// the rating ordinal. Monotonically non-decreasing in `p`: poor recall
/// shrinks the factor so the item comes back sooner, excellent recall grows
/// it. The floor keeps intervals from collapsing under repeated failures.
pub fn next_easiness(easiness: f64, rating: PerformanceRating) -> f64 {
    let p = rating.ordinal() as f64;
    let delta = 0.1 - (5.0 - p) * (0.08 + (5.0 - p) * 0.02);
    (easiness + delta).max(MIN_EASINESS)
}

/// Updated `(repetitions, interval)` after a review.
///
/// A failed recall resets the streak and forces a next-day retry regardless
/// of history. A pass extends the streak: fixed intervals of 1 and 6 days for
/// the first two passes, then geometric growth against the updated easiness
/// factor, capped at [`MAX_INTERVAL_DAYS`].
///
/// `easiness` must be the post-review value from [`next_easiness`].
pub fn next_progress(
    repetitions: u32,
    interval: u32,
    easiness: f64,
    rating: PerformanceRating,
) -> (u32, u32) {
    if !rating.is_pass() {
        return (0, 1);
    }

    let repetitions = repetitions + 1;
    let interval = match repetitions {
        1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => (interval as f64 * easiness)
            .round()
            .min(MAX_INTERVAL_DAYS as f64) as u32,
    };
    (repetitions, interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INITIAL_EASINESS;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_easiness_deltas_from_default() {
        // Hand-computed deltas for EF = 2.5
        let cases = [
            (PerformanceRating::Forgot, 2.5 - 0.8),
            (PerformanceRating::Difficult, 2.5 - 0.54),
            (PerformanceRating::Hesitant, 2.5 - 0.32),
            (PerformanceRating::Easy, 2.5 - 0.14),
            (PerformanceRating::Perfect, 2.5 + 0.1),
        ];
        for (rating, expected) in cases {
            let got = next_easiness(INITIAL_EASINESS, rating);
            assert!(
                (got - expected).abs() < EPSILON,
                "{rating:?}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn test_easiness_monotone_in_rating() {
        for ef in [1.3, 1.7, 2.5, 3.4] {
            let mut prev = f64::NEG_INFINITY;
            for ordinal in 0u8..=4 {
                let rating = PerformanceRating::try_from(ordinal).unwrap();
                let next = next_easiness(ef, rating);
                assert!(next >= prev, "EF' not monotone at ef={ef} p={ordinal}");
                prev = next;
            }
        }
    }

    #[test]
    fn test_easiness_floor_holds() {
        let ef = next_easiness(1.3, PerformanceRating::Forgot);
        assert_eq!(ef, MIN_EASINESS);

        // Repeated failures converge to the floor and stay there
        let mut ef = INITIAL_EASINESS;
        for _ in 0..10 {
            ef = next_easiness(ef, PerformanceRating::Forgot);
        }
        assert_eq!(ef, MIN_EASINESS);
    }

    #[test]
    fn test_only_perfect_grows_easiness() {
        for ordinal in 0u8..=3 {
            let rating = PerformanceRating::try_from(ordinal).unwrap();
            assert!(next_easiness(2.5, rating) < 2.5, "{rating:?} should shrink EF");
        }
        assert!(next_easiness(2.5, PerformanceRating::Perfect) > 2.5);
    }

    #[test]
    fn test_fail_resets_progress() {
        for rating in [PerformanceRating::Forgot, PerformanceRating::Difficult] {
            assert_eq!(next_progress(5, 20, 1.3, rating), (0, 1));
            assert_eq!(next_progress(0, 0, 2.5, rating), (0, 1));
        }
    }

    #[test]
    fn test_first_two_passes_use_fixed_intervals() {
        for rating in [
            PerformanceRating::Hesitant,
            PerformanceRating::Easy,
            PerformanceRating::Perfect,
        ] {
            assert_eq!(next_progress(0, 0, 2.6, rating), (1, 1));
            assert_eq!(next_progress(1, 1, 2.6, rating), (2, 6));
        }
    }

    #[test]
    fn test_third_pass_grows_geometrically() {
        let (reps, interval) = next_progress(2, 6, 2.5, PerformanceRating::Easy);
        assert_eq!(reps, 3);
        assert_eq!(interval, 15); // round(6 * 2.5)

        let (reps, interval) = next_progress(3, 15, 2.08, PerformanceRating::Easy);
        assert_eq!(reps, 4);
        assert_eq!(interval, 31); // round(15 * 2.08)
    }

    #[test]
    fn test_interval_rounds_to_nearest_day() {
        // 6 * 2.08 = 12.48 rounds down, 6 * 2.09 = 12.54 rounds up
        assert_eq!(next_progress(2, 6, 2.08, PerformanceRating::Easy).1, 12);
        assert_eq!(next_progress(2, 6, 2.09, PerformanceRating::Easy).1, 13);
    }

    #[test]
    fn test_interval_caps_at_100_years() {
        let (_, interval) = next_progress(10, MAX_INTERVAL_DAYS, 2.5, PerformanceRating::Perfect);
        assert_eq!(interval, MAX_INTERVAL_DAYS);
    }

    #[test]
    fn test_interval_never_shrinks_on_pass_at_floor() {
        // Even at the EF floor, a pass beyond the second keeps interval >= prior
        let (_, interval) = next_progress(2, 6, MIN_EASINESS, PerformanceRating::Hesitant);
        assert_eq!(interval, 8); // round(6 * 1.3)
    }
}
