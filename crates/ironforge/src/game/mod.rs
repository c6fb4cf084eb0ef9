//! Game domain: pure progression calculators and the workout workflow that
//! composes them behind repository traits.

pub mod grind;
pub mod history;
pub mod loot;
pub mod oracle;
pub mod progression;
pub mod rating;
pub mod streak;
pub mod workouts;

use serde::{Deserialize, Serialize};

use crate::config::GameTuningConfig;

/// Bundle of tuning dials for every calculator, defaulted to the shipped
/// balance numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameConfig {
    pub loot: loot::LootConfig,
    pub rating: rating::RatingConfig,
    pub rewards: progression::RewardRates,
    pub oracle: oracle::OracleConfig,
}

impl GameConfig {
    /// Apply environment overrides on top of the compiled defaults.
    pub fn with_tuning(mut self, tuning: &GameTuningConfig) -> Self {
        if let Some(threshold) = tuning.readiness_rest_threshold {
            self.oracle.readiness_rest_threshold = threshold;
        }
        if let Some(window) = tuning.duel_rally_window_days {
            self.oracle.duel_rally_window_days = window;
        }
        self
    }
}
