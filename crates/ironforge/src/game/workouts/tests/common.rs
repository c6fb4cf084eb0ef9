use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::game::loot::{Item, ItemId, Rarity};
use crate::game::oracle::OracleConfig;
use crate::game::workouts::domain::{
    TitanEnrollment, TitanId, TitanProfile, WorkoutLogEntry, WorkoutSubmission,
};
use crate::game::workouts::repository::{
    DuelSchedule, InventoryRepository, ItemCatalog, RepositoryError, TitanRepository,
    WellnessProvider, WellnessSnapshot,
};
use crate::game::workouts::service::{OracleService, WorkoutService};
use crate::game::GameConfig;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
}

pub(super) fn enrollment(name: &str) -> TitanEnrollment {
    TitanEnrollment {
        name: name.to_string(),
        training_path: Some("WARDEN".to_string()),
        wilks_score: 400.0,
        ftp_watts_per_kg: 3.25,
        mrv_adherence: 1.0,
        cardio_adherence: 1.0,
        loot_luck: 1.0,
    }
}

pub(super) fn submission(duration: f64, intensity: f64) -> WorkoutSubmission {
    WorkoutSubmission {
        logged_on: None,
        duration_minutes: duration,
        intensity,
    }
}

pub(super) fn catalog_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId("iron-plate".to_string()),
            name: "Iron Plate".to_string(),
            rarity: Rarity::Common,
            power: 5,
        },
        Item {
            id: ItemId("chalk-of-focus".to_string()),
            name: "Chalk of Focus".to_string(),
            rarity: Rarity::Rare,
            power: 15,
        },
        Item {
            id: ItemId("mjolnir-fragment".to_string()),
            name: "Mjolnir Fragment".to_string(),
            rarity: Rarity::Legendary,
            power: 90,
        },
    ]
}

/// RNG stub yielding a scripted sequence, then repeating the final draw.
pub(super) fn scripted_rng(draws: Vec<f64>) -> impl FnMut() -> f64 {
    let mut remaining = draws.into_iter();
    let mut last = 0.0;
    move || {
        if let Some(next) = remaining.next() {
            last = next;
        }
        last
    }
}

pub(super) type Service = WorkoutService<MemoryTitans, MemoryInventory, StaticCatalog>;

pub(super) fn build_service() -> (Arc<Service>, Arc<MemoryTitans>, Arc<MemoryInventory>) {
    let titans = Arc::new(MemoryTitans::default());
    let inventory = Arc::new(MemoryInventory::default());
    let catalog = Arc::new(StaticCatalog::default());
    let service = Arc::new(WorkoutService::new(
        titans.clone(),
        inventory.clone(),
        catalog,
        GameConfig::default(),
    ));
    (service, titans, inventory)
}

pub(super) fn build_oracle(
    snapshot: WellnessSnapshot,
    deadline: Option<i64>,
) -> OracleService<StaticWellness, StaticDuels> {
    OracleService::new(
        Arc::new(StaticWellness { snapshot }),
        Arc::new(StaticDuels { deadline }),
        OracleConfig::default(),
    )
}

#[derive(Default)]
pub(super) struct MemoryTitans {
    profiles: Mutex<HashMap<TitanId, TitanProfile>>,
    log: Mutex<Vec<(TitanId, WorkoutLogEntry)>>,
}

impl MemoryTitans {
    pub(super) fn stored(&self, id: &TitanId) -> Option<TitanProfile> {
        self.profiles
            .lock()
            .expect("titan mutex poisoned")
            .get(id)
            .cloned()
    }
}

impl TitanRepository for MemoryTitans {
    fn insert(&self, profile: TitanProfile) -> Result<TitanProfile, RepositoryError> {
        let mut guard = self.profiles.lock().expect("titan mutex poisoned");
        if guard.contains_key(&profile.titan_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(profile.titan_id.clone(), profile.clone());
        Ok(profile)
    }

    fn update(&self, profile: TitanProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("titan mutex poisoned");
        if guard.contains_key(&profile.titan_id) {
            guard.insert(profile.titan_id.clone(), profile);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &TitanId) -> Result<Option<TitanProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("titan mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn workouts_on(&self, id: &TitanId, date: NaiveDate) -> Result<u32, RepositoryError> {
        let guard = self.log.lock().expect("log mutex poisoned");
        Ok(guard
            .iter()
            .filter(|(owner, entry)| owner == id && entry.logged_on == date)
            .count() as u32)
    }

    fn append_workout(&self, id: &TitanId, entry: WorkoutLogEntry) -> Result<(), RepositoryError> {
        let mut guard = self.log.lock().expect("log mutex poisoned");
        guard.push((id.clone(), entry));
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct MemoryInventory {
    granted: Mutex<HashSet<(TitanId, ItemId)>>,
}

impl MemoryInventory {
    pub(super) fn owned_by(&self, id: &TitanId) -> HashSet<ItemId> {
        self.granted
            .lock()
            .expect("inventory mutex poisoned")
            .iter()
            .filter(|(owner, _)| owner == id)
            .map(|(_, item)| item.clone())
            .collect()
    }
}

impl InventoryRepository for MemoryInventory {
    fn owned_items(&self, id: &TitanId) -> Result<HashSet<ItemId>, RepositoryError> {
        Ok(self.owned_by(id))
    }

    fn grant(&self, id: &TitanId, item: &ItemId) -> Result<(), RepositoryError> {
        let mut guard = self.granted.lock().expect("inventory mutex poisoned");
        if !guard.insert((id.clone(), item.clone())) {
            return Err(RepositoryError::Conflict);
        }
        Ok(())
    }
}

pub(super) struct StaticCatalog {
    items: Vec<Item>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self {
            items: catalog_items(),
        }
    }
}

impl ItemCatalog for StaticCatalog {
    fn items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.items.clone())
    }
}

pub(super) struct StaticWellness {
    pub(super) snapshot: WellnessSnapshot,
}

impl WellnessProvider for StaticWellness {
    fn snapshot(&self, _id: &TitanId) -> Result<WellnessSnapshot, RepositoryError> {
        Ok(self.snapshot.clone())
    }
}

pub(super) struct StaticDuels {
    pub(super) deadline: Option<i64>,
}

impl DuelSchedule for StaticDuels {
    fn next_deadline_days(
        &self,
        _id: &TitanId,
        _today: NaiveDate,
    ) -> Result<Option<i64>, RepositoryError> {
        Ok(self.deadline)
    }
}

pub(super) struct UnavailableTitans;

impl TitanRepository for UnavailableTitans {
    fn insert(&self, _profile: TitanProfile) -> Result<TitanProfile, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _profile: TitanProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &TitanId) -> Result<Option<TitanProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn workouts_on(&self, _id: &TitanId, _date: NaiveDate) -> Result<u32, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn append_workout(
        &self,
        _id: &TitanId,
        _entry: WorkoutLogEntry,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
