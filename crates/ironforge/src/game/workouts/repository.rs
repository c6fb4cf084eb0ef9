use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{TitanId, TitanProfile, WorkoutLogEntry};
use crate::game::loot::{Item, ItemId};

/// Storage abstraction for profile rows and the per-day workout log, so the
/// service module can be exercised in isolation.
pub trait TitanRepository: Send + Sync {
    fn insert(&self, profile: TitanProfile) -> Result<TitanProfile, RepositoryError>;
    fn update(&self, profile: TitanProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &TitanId) -> Result<Option<TitanProfile>, RepositoryError>;
    /// Workouts already logged for the given day; feeds the grind ordinal.
    fn workouts_on(&self, id: &TitanId, date: NaiveDate) -> Result<u32, RepositoryError>;
    fn append_workout(&self, id: &TitanId, entry: WorkoutLogEntry) -> Result<(), RepositoryError>;
}

/// Ownership store. `grant` must enforce `(titan, item)` uniqueness and
/// answer duplicates with [`RepositoryError::Conflict`].
pub trait InventoryRepository: Send + Sync {
    fn owned_items(&self, id: &TitanId) -> Result<HashSet<ItemId>, RepositoryError>;
    fn grant(&self, id: &TitanId, item: &ItemId) -> Result<(), RepositoryError>;
}

/// Read-only item catalog provider.
pub trait ItemCatalog: Send + Sync {
    fn items(&self) -> Result<Vec<Item>, RepositoryError>;
}

/// Daily biometric snapshot from the wellness integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WellnessSnapshot {
    pub readiness: u8,
    pub sleep_score: Option<u8>,
    pub is_injured: bool,
}

pub trait WellnessProvider: Send + Sync {
    fn snapshot(&self, id: &TitanId) -> Result<WellnessSnapshot, RepositoryError>;
}

/// Upcoming-duel lookups for the rally decree.
pub trait DuelSchedule: Send + Sync {
    /// Days until the nearest active duel deadline, if any. Negative values
    /// mean the deadline already passed.
    fn next_deadline_days(
        &self,
        id: &TitanId,
        today: NaiveDate,
    ) -> Result<Option<i64>, RepositoryError>;
}

/// Error enumeration for repository and collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
