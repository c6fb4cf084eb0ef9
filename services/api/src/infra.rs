use chrono::NaiveDate;
use ironforge::config::GameTuningConfig;
use ironforge::game::loot::{Item, ItemId, Rarity};
use ironforge::game::workouts::{
    DuelSchedule, InventoryRepository, ItemCatalog, RepositoryError, TitanId, TitanProfile,
    TitanRepository, WellnessProvider, WellnessSnapshot, WorkoutLogEntry,
};
use ironforge::game::GameConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
pub(crate) struct InMemoryTitanRepository {
    profiles: Mutex<HashMap<TitanId, TitanProfile>>,
    log: Mutex<Vec<(TitanId, WorkoutLogEntry)>>,
}

impl TitanRepository for InMemoryTitanRepository {
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
pub(crate) struct InMemoryInventoryRepository {
    granted: Mutex<HashSet<(TitanId, ItemId)>>,
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn owned_items(&self, id: &TitanId) -> Result<HashSet<ItemId>, RepositoryError> {
        let guard = self.granted.lock().expect("inventory mutex poisoned");
        Ok(guard
            .iter()
            .filter(|(owner, _)| owner == id)
            .map(|(_, item)| item.clone())
            .collect())
    }

    fn grant(&self, id: &TitanId, item: &ItemId) -> Result<(), RepositoryError> {
        let mut guard = self.granted.lock().expect("inventory mutex poisoned");
        if !guard.insert((id.clone(), item.clone())) {
            return Err(RepositoryError::Conflict);
        }
        Ok(())
    }
}

pub(crate) struct StaticItemCatalog {
    items: Vec<Item>,
}

impl Default for StaticItemCatalog {
    fn default() -> Self {
        Self {
            items: starter_catalog(),
        }
    }
}

impl ItemCatalog for StaticItemCatalog {
    fn items(&self) -> Result<Vec<Item>, RepositoryError> {
        Ok(self.items.clone())
    }
}

/// Fixed wellness feed standing in for the readiness integration.
pub(crate) struct StubWellnessProvider {
    pub(crate) snapshot: WellnessSnapshot,
}

impl Default for StubWellnessProvider {
    fn default() -> Self {
        Self {
            snapshot: WellnessSnapshot {
                readiness: 70,
                sleep_score: Some(75),
                is_injured: false,
            },
        }
    }
}

impl WellnessProvider for StubWellnessProvider {
    fn snapshot(&self, _id: &TitanId) -> Result<WellnessSnapshot, RepositoryError> {
        Ok(self.snapshot.clone())
    }
}

/// Duel calendar stand-in; no active duels unless configured.
#[derive(Default)]
pub(crate) struct StubDuelSchedule {
    pub(crate) deadline_days: Option<i64>,
}

impl DuelSchedule for StubDuelSchedule {
    fn next_deadline_days(
        &self,
        _id: &TitanId,
        _today: NaiveDate,
    ) -> Result<Option<i64>, RepositoryError> {
        Ok(self.deadline_days)
    }
}

pub(crate) fn game_config(tuning: &GameTuningConfig) -> GameConfig {
    GameConfig::default().with_tuning(tuning)
}

fn item(id: &str, name: &str, rarity: Rarity, power: u32) -> Item {
    Item {
        id: ItemId(id.to_string()),
        name: name.to_string(),
        rarity,
        power,
    }
}

/// Launch catalog. Rows would normally come from the item store.
pub(crate) fn starter_catalog() -> Vec<Item> {
    vec![
        item("pig-iron-dumbbell", "Pig Iron Dumbbell", Rarity::Common, 3),
        item("ashwood-roller", "Ashwood Roller", Rarity::Common, 4),
        item("ragged-wraps", "Ragged Wrist Wraps", Rarity::Common, 5),
        item("chalk-of-focus", "Chalk of Focus", Rarity::Rare, 12),
        item("springsteel-band", "Springsteel Band", Rarity::Rare, 14),
        item("girdle-of-bracing", "Girdle of Bracing", Rarity::Epic, 32),
        item("stormcaller-bell", "Stormcaller Kettlebell", Rarity::Epic, 38),
        item("mjolnir-fragment", "Mjolnir Fragment", Rarity::Legendary, 88),
    ]
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
