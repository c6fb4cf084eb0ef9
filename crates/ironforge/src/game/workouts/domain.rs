use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::game::rating::{RatingInputs, TrainingPath};

/// Identifier wrapper for player profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TitanId(pub String);

/// Profile row persisted by the caller-owned store. Training inputs (Wilks,
/// FTP, adherence) are refreshed by external sync jobs; the service only
/// reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitanProfile {
    pub titan_id: TitanId,
    pub name: String,
    pub training_path: Option<TrainingPath>,
    pub wilks_score: f64,
    pub ftp_watts_per_kg: f64,
    pub mrv_adherence: f64,
    pub cardio_adherence: f64,
    pub loot_luck: f64,
    pub total_xp: u64,
    pub level: u32,
    pub gold: u64,
    pub power_rating: u32,
    pub strength_index: f64,
    pub cardio_index: f64,
    pub streak_days: u32,
    pub last_activity_on: Option<NaiveDate>,
}

impl TitanProfile {
    pub fn rating_inputs(&self) -> RatingInputs {
        RatingInputs {
            wilks_score: self.wilks_score,
            ftp_watts_per_kg: self.ftp_watts_per_kg,
            training_path: self.training_path,
            mrv_adherence: self.mrv_adherence,
            cardio_adherence: self.cardio_adherence,
        }
    }

    pub fn view(&self) -> TitanView {
        TitanView {
            titan_id: self.titan_id.clone(),
            name: self.name.clone(),
            training_path: self.training_path.map(TrainingPath::label),
            level: self.level,
            total_xp: self.total_xp,
            gold: self.gold,
            power_rating: self.power_rating,
            streak_days: self.streak_days,
            last_activity_on: self.last_activity_on,
        }
    }
}

/// Sanitized representation of a profile for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TitanView {
    pub titan_id: TitanId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_path: Option<&'static str>,
    pub level: u32,
    pub total_xp: u64,
    pub gold: u64,
    pub power_rating: u32,
    pub streak_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_on: Option<NaiveDate>,
}

/// Enrollment payload for a new titan. The path arrives as a raw label so an
/// unknown value degrades to the balanced weighting instead of a 4xx.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TitanEnrollment {
    pub name: String,
    #[serde(default)]
    pub training_path: Option<String>,
    pub wilks_score: f64,
    pub ftp_watts_per_kg: f64,
    #[serde(default)]
    pub mrv_adherence: f64,
    #[serde(default)]
    pub cardio_adherence: f64,
    #[serde(default = "default_loot_luck")]
    pub loot_luck: f64,
}

fn default_loot_luck() -> f64 {
    1.0
}

/// Inbound workout payload before sanitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSubmission {
    #[serde(default)]
    pub logged_on: Option<NaiveDate>,
    pub duration_minutes: f64,
    pub intensity: f64,
}

/// Validated workout values the reward pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanitizedWorkout {
    pub duration_minutes: f64,
    pub intensity: f64,
}

const MAX_WORKOUT_MINUTES: f64 = 24.0 * 60.0;

impl WorkoutSubmission {
    /// Clamp what can be clamped, reject what cannot: intensity saturates
    /// into `[0, 1]`, durations must land in `(0, 24h]`.
    pub fn sanitized(&self) -> Result<SanitizedWorkout, SubmissionRejection> {
        if !self.duration_minutes.is_finite() || self.duration_minutes <= 0.0 {
            return Err(SubmissionRejection::NonPositiveDuration(
                self.duration_minutes,
            ));
        }
        if self.duration_minutes > MAX_WORKOUT_MINUTES {
            return Err(SubmissionRejection::ImplausibleDuration(
                self.duration_minutes,
            ));
        }

        let intensity = if self.intensity.is_finite() {
            self.intensity.clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(SanitizedWorkout {
            duration_minutes: self.duration_minutes,
            intensity,
        })
    }
}

/// Validation errors raised before any repository call.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionRejection {
    #[error("workout duration must be positive, got {0}")]
    NonPositiveDuration(f64),
    #[error("workout duration {0} minutes exceeds the 24 hour cap")]
    ImplausibleDuration(f64),
}

/// Row appended to the per-titan workout log; backs the same-day ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub logged_on: NaiveDate,
    pub duration_minutes: f64,
    pub intensity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(duration: f64, intensity: f64) -> WorkoutSubmission {
        WorkoutSubmission {
            logged_on: None,
            duration_minutes: duration,
            intensity,
        }
    }

    #[test]
    fn sanitation_clamps_intensity_but_rejects_bad_durations() {
        let workout = submission(45.0, 1.7).sanitized().expect("valid");
        assert_eq!(workout.intensity, 1.0);
        assert_eq!(workout.duration_minutes, 45.0);

        assert!(matches!(
            submission(0.0, 0.5).sanitized(),
            Err(SubmissionRejection::NonPositiveDuration(_))
        ));
        assert!(matches!(
            submission(-10.0, 0.5).sanitized(),
            Err(SubmissionRejection::NonPositiveDuration(_))
        ));
        assert!(matches!(
            submission(2000.0, 0.5).sanitized(),
            Err(SubmissionRejection::ImplausibleDuration(_))
        ));
    }

    #[test]
    fn unknown_training_path_degrades_to_none() {
        assert_eq!(TrainingPath::parse("BERSERKER"), None);
    }
}
