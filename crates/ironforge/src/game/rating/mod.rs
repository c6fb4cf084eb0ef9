//! Power rating: Wilks and FTP normalization into 0..=1000 indexes, a
//! path-weighted composite with an adherence bonus, and weekly inactivity
//! decay.

mod config;

pub use config::{PathWeights, RatingConfig, TrainingPath};

use serde::{Deserialize, Serialize};

const INDEX_CEILING: f64 = 1000.0;

/// Training stats feeding one rating computation. Assembled fresh per call;
/// only the output is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingInputs {
    pub wilks_score: f64,
    pub ftp_watts_per_kg: f64,
    pub training_path: Option<TrainingPath>,
    pub mrv_adherence: f64,
    pub cardio_adherence: f64,
}

/// Composite rating output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRating {
    pub strength_index: f64,
    pub cardio_index: f64,
    pub power_rating: u32,
}

/// Stateless rating calculator parameterized by [`RatingConfig`].
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    /// Linear map of a Wilks score onto `[0, 1000]`, clamped at both ends.
    pub fn normalize_strength(&self, wilks: f64) -> f64 {
        normalize(
            wilks,
            self.config.strength_floor,
            self.config.strength_ceiling,
        )
    }

    /// Linear map of FTP watts-per-kilogram onto `[0, 1000]`, clamped at both
    /// ends.
    pub fn normalize_cardio(&self, watts_per_kg: f64) -> f64 {
        normalize(
            watts_per_kg,
            self.config.cardio_floor,
            self.config.cardio_ceiling,
        )
    }

    /// Multiplier in `[1.0, 1.0 + cap]` rewarding volume adherence, weighted
    /// by the path's emphasis.
    pub fn adherence_bonus(
        &self,
        mrv_adherence: f64,
        cardio_adherence: f64,
        path: Option<TrainingPath>,
    ) -> f64 {
        let weights = PathWeights::for_path(path);
        let mrv = sanitize_fraction(mrv_adherence);
        let cardio = sanitize_fraction(cardio_adherence);
        let weighted = mrv * weights.strength + cardio * weights.cardio;

        (1.0 + weighted * self.config.adherence_bonus_cap)
            .clamp(1.0, 1.0 + self.config.adherence_bonus_cap)
    }

    /// Composite 0..=1000 power rating.
    pub fn power_rating(&self, inputs: &RatingInputs) -> PowerRating {
        let strength_index = self.normalize_strength(inputs.wilks_score);
        let cardio_index = self.normalize_cardio(inputs.ftp_watts_per_kg);
        let weights = PathWeights::for_path(inputs.training_path);
        let bonus = self.adherence_bonus(
            inputs.mrv_adherence,
            inputs.cardio_adherence,
            inputs.training_path,
        );

        let base = strength_index * weights.strength + cardio_index * weights.cardio;
        let power_rating = (base * bonus).min(INDEX_CEILING).round() as u32;

        PowerRating {
            strength_index,
            cardio_index,
            power_rating,
        }
    }

    /// Multiplicative decay per whole idle week; the first six days are free.
    pub fn apply_decay(&self, current_rating: u32, days_since_activity: u32) -> u32 {
        let weeks = days_since_activity / 7;
        if weeks == 0 {
            return current_rating;
        }

        let decayed = f64::from(current_rating) * self.config.weekly_decay.powi(weeks as i32);
        decayed.round() as u32
    }
}

fn normalize(value: f64, floor: f64, ceiling: f64) -> f64 {
    if !value.is_finite() || ceiling <= floor {
        return 0.0;
    }
    ((value - floor) / (ceiling - floor) * INDEX_CEILING).clamp(0.0, INDEX_CEILING)
}

fn sanitize_fraction(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
