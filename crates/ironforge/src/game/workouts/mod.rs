//! Workout intake: submission sanitation, the reward pipeline, and the HTTP
//! surface over it.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    SubmissionRejection, TitanEnrollment, TitanId, TitanProfile, TitanView, WorkoutLogEntry,
    WorkoutSubmission,
};
pub use repository::{
    DuelSchedule, InventoryRepository, ItemCatalog, RepositoryError, TitanRepository,
    WellnessProvider, WellnessSnapshot,
};
pub use router::{oracle_router, workout_router};
pub use service::{
    OracleService, RatingSnapshot, WorkoutRewardOutcome, WorkoutService, WorkoutServiceError,
};
