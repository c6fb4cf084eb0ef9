//! XP and gold payouts plus the level curve.

use serde::{Deserialize, Serialize};

use crate::game::grind::GrindVerdict;

/// Payout rates for a logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRates {
    pub xp_per_minute: f64,
    pub xp_intensity_bonus: f64,
    pub gold_per_minute: f64,
    pub gold_intensity_bonus: f64,
    pub duration_cap_minutes: f64,
}

impl Default for RewardRates {
    fn default() -> Self {
        Self {
            xp_per_minute: 2.0,
            xp_intensity_bonus: 50.0,
            gold_per_minute: 1.0,
            gold_intensity_bonus: 25.0,
            duration_cap_minutes: 120.0,
        }
    }
}

/// XP and gold awarded for one workout after streak and grind scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkoutPayout {
    pub xp: u64,
    pub gold: u64,
}

impl RewardRates {
    /// Base rewards scale with capped duration and intensity; the streak bonus
    /// applies to gold only, the grind verdict scales both streams.
    pub fn payout(
        &self,
        duration_minutes: f64,
        intensity: f64,
        streak_bonus_percent: u32,
        grind: &GrindVerdict,
    ) -> WorkoutPayout {
        let minutes = duration_minutes.clamp(0.0, self.duration_cap_minutes);
        let intensity = intensity.clamp(0.0, 1.0);

        let base_xp = minutes * self.xp_per_minute + intensity * self.xp_intensity_bonus;
        let base_gold = minutes * self.gold_per_minute + intensity * self.gold_intensity_bonus;
        let streak_multiplier = 1.0 + f64::from(streak_bonus_percent) / 100.0;

        WorkoutPayout {
            xp: (base_xp * grind.xp_multiplier).round() as u64,
            gold: (base_gold * streak_multiplier * grind.gold_multiplier).round() as u64,
        }
    }
}

/// Cumulative XP required to reach a level; level 1 starts at zero.
pub fn xp_to_reach(level: u32) -> u64 {
    let level = u64::from(level);
    50 * level.saturating_sub(1) * level
}

/// Level for a lifetime XP total; monotonic and total.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let mut level = 1;
    while xp_to_reach(level + 1) <= total_xp {
        level += 1;
    }
    level
}
