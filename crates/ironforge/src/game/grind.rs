//! Diminishing returns for repeated same-day workouts.

use serde::Serialize;

/// Reward multipliers for the Nth workout of a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrindVerdict {
    pub xp_multiplier: f64,
    pub gold_multiplier: f64,
    pub message: &'static str,
    pub recommended_to_stop: bool,
}

impl GrindVerdict {
    /// True once the daily limit zeroes out both reward streams.
    pub fn rewards_exhausted(&self) -> bool {
        self.xp_multiplier == 0.0 && self.gold_multiplier == 0.0
    }
}

/// Multipliers over the day's workout ordinal. The count is maintained by the
/// caller; an ordinal of 0 is treated as the first workout.
pub fn diminishing_returns(workout_number: u32) -> GrindVerdict {
    let (multiplier, message) = match workout_number {
        0 | 1 => (1.0, "Full rewards"),
        2 => (0.5, "Second workout today, rewards reduced to 50%"),
        3 => (0.1, "Minimal rewards, consider resting"),
        _ => (0.0, "Daily reward limit reached"),
    };

    GrindVerdict {
        xp_multiplier: multiplier,
        gold_multiplier: multiplier,
        message,
        recommended_to_stop: workout_number >= 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_workout_pays_in_full() {
        let verdict = diminishing_returns(1);
        assert_eq!(verdict.xp_multiplier, 1.0);
        assert_eq!(verdict.gold_multiplier, 1.0);
        assert!(!verdict.recommended_to_stop);
        assert!(!verdict.rewards_exhausted());
    }

    #[test]
    fn second_workout_halves_rewards() {
        let verdict = diminishing_returns(2);
        assert_eq!(verdict.xp_multiplier, 0.5);
        assert!(!verdict.recommended_to_stop);
    }

    #[test]
    fn third_workout_is_minimal_and_flags_rest() {
        let verdict = diminishing_returns(3);
        assert_eq!(verdict.xp_multiplier, 0.1);
        assert!(verdict.recommended_to_stop);
        assert!(!verdict.rewards_exhausted());
    }

    #[test]
    fn fourth_workout_hits_the_daily_limit() {
        let verdict = diminishing_returns(4);
        assert_eq!(verdict.xp_multiplier, 0.0);
        assert_eq!(verdict.gold_multiplier, 0.0);
        assert!(verdict.recommended_to_stop);
        assert!(verdict.rewards_exhausted());
    }

    #[test]
    fn zero_ordinal_counts_as_the_first_workout() {
        assert_eq!(diminishing_returns(0).xp_multiplier, 1.0);
    }
}
