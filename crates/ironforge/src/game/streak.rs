//! Consecutive-day streak bonuses.

/// Streak thresholds and their gold bonus percent, in ascending order.
const STREAK_BONUS_TABLE: &[(u32, u32)] = &[
    (3, 5),
    (7, 10),
    (14, 15),
    (30, 25),
    (60, 35),
    (90, 50),
    (180, 75),
    (365, 100),
];

/// Highest bonus whose threshold the streak has reached, or 0 below day 3.
pub fn streak_bonus_percent(consecutive_days: u32) -> u32 {
    STREAK_BONUS_TABLE
        .iter()
        .take_while(|(threshold, _)| *threshold <= consecutive_days)
        .last()
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0)
}

/// Multiplier applied to gold payouts for the given streak.
pub fn gold_multiplier(consecutive_days: u32) -> f64 {
    1.0 + f64::from(streak_bonus_percent(consecutive_days)) / 100.0
}
