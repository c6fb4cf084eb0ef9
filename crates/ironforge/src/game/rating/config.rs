use serde::{Deserialize, Serialize};

/// Training focus chosen at enrollment; shifts how much each index counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingPath {
    Juggernaut,
    Warden,
    Pathfinder,
}

impl TrainingPath {
    /// Parse a stored or user-supplied path label. Unknown labels return
    /// `None`; callers fall back to the balanced weighting.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "JUGGERNAUT" => Some(Self::Juggernaut),
            "WARDEN" => Some(Self::Warden),
            "PATHFINDER" => Some(Self::Pathfinder),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrainingPath::Juggernaut => "juggernaut",
            TrainingPath::Warden => "warden",
            TrainingPath::Pathfinder => "pathfinder",
        }
    }
}

/// Relative emphasis a path places on the two indexes; weights sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathWeights {
    pub strength: f64,
    pub cardio: f64,
}

impl PathWeights {
    /// Balanced split used when no path is chosen or the stored value is
    /// unknown.
    pub const BALANCED: PathWeights = PathWeights {
        strength: 0.5,
        cardio: 0.5,
    };

    pub const fn for_path(path: Option<TrainingPath>) -> PathWeights {
        match path {
            Some(TrainingPath::Juggernaut) => PathWeights {
                strength: 0.8,
                cardio: 0.2,
            },
            Some(TrainingPath::Pathfinder) => PathWeights {
                strength: 0.2,
                cardio: 0.8,
            },
            Some(TrainingPath::Warden) | None => Self::BALANCED,
        }
    }
}

/// Normalization bounds and decay dials for the power rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub strength_floor: f64,
    pub strength_ceiling: f64,
    pub cardio_floor: f64,
    pub cardio_ceiling: f64,
    pub adherence_bonus_cap: f64,
    pub weekly_decay: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            strength_floor: 200.0,
            strength_ceiling: 600.0,
            cardio_floor: 1.5,
            cardio_ceiling: 5.0,
            adherence_bonus_cap: 0.15,
            weekly_decay: 0.95,
        }
    }
}
