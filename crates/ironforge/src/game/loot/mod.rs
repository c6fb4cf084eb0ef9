//! Loot rolls: the drop-chance formula and rarity-weighted selection over the
//! items a titan does not own yet.

mod domain;

pub use domain::{Item, ItemId, Rarity};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Dials for the drop-chance formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootConfig {
    pub base_chance: f64,
    pub intensity_weight: f64,
    pub per_minute: f64,
    pub duration_cap_minutes: f64,
    pub max_chance: f64,
}

impl Default for LootConfig {
    fn default() -> Self {
        Self {
            base_chance: 20.0,
            intensity_weight: 30.0,
            per_minute: 0.5,
            duration_cap_minutes: 60.0,
            max_chance: 95.0,
        }
    }
}

/// Why a roll produced no item. Both cases are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LootMiss {
    /// The percentile roll came in above the drop chance.
    RollFailed,
    /// Every catalog item is already owned.
    NothingUnowned,
}

impl LootMiss {
    pub const fn label(self) -> &'static str {
        match self {
            LootMiss::RollFailed => "no drop this time",
            LootMiss::NothingUnowned => "catalog exhausted",
        }
    }
}

/// Result of a loot roll.
#[derive(Debug, Clone, PartialEq)]
pub enum LootOutcome {
    Dropped(Item),
    Missed(LootMiss),
}

impl LootOutcome {
    pub fn item(&self) -> Option<&Item> {
        match self {
            LootOutcome::Dropped(item) => Some(item),
            LootOutcome::Missed(_) => None,
        }
    }
}

/// Stateless loot roller parameterized by [`LootConfig`].
pub struct LootEngine {
    config: LootConfig,
}

impl LootEngine {
    pub fn new(config: LootConfig) -> Self {
        Self { config }
    }

    /// Percent chance in `[0, max_chance]` that a workout drops an item.
    /// Monotonic in intensity, duration (up to the cap), and luck; negative
    /// inputs clamp to zero contribution.
    pub fn drop_chance(&self, intensity: f64, duration_minutes: f64, loot_luck: f64) -> f64 {
        let intensity = if intensity.is_finite() {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let minutes = if duration_minutes.is_finite() {
            duration_minutes.clamp(0.0, self.config.duration_cap_minutes)
        } else {
            0.0
        };
        let luck = if loot_luck.is_finite() {
            loot_luck.max(0.0)
        } else {
            1.0
        };

        let raw = (self.config.base_chance
            + intensity * self.config.intensity_weight
            + minutes * self.config.per_minute)
            * luck;
        raw.clamp(0.0, self.config.max_chance)
    }

    /// Roll for one item. `rng` draws uniformly from `[0, 1)`: the first draw
    /// decides whether anything drops at all (a roll exactly on the drop
    /// chance still drops), a second draw picks from the rarity-weighted pool
    /// of unowned items. No side effects beyond the RNG draws; persisting the
    /// grant is the caller's job.
    pub fn roll(
        &self,
        owned: &HashSet<ItemId>,
        catalog: &[Item],
        drop_chance: f64,
        rng: &mut dyn FnMut() -> f64,
    ) -> LootOutcome {
        let roll = rng() * 100.0;
        if roll > drop_chance {
            return LootOutcome::Missed(LootMiss::RollFailed);
        }

        let unowned: Vec<&Item> = catalog
            .iter()
            .filter(|item| !owned.contains(&item.id))
            .collect();
        if unowned.is_empty() {
            return LootOutcome::Missed(LootMiss::NothingUnowned);
        }

        let total_weight: u32 = unowned.iter().map(|item| item.rarity.drop_weight()).sum();
        let mut pick = rng() * f64::from(total_weight);
        for item in &unowned {
            let weight = f64::from(item.rarity.drop_weight());
            if pick < weight {
                return LootOutcome::Dropped((*item).clone());
            }
            pick -= weight;
        }

        // A draw at the very top of [0, 1) lands past the cumulative walk;
        // the final entry owns the remainder of the pool.
        LootOutcome::Dropped(unowned[unowned.len() - 1].clone())
    }
}
