use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{
    SubmissionRejection, TitanEnrollment, TitanId, TitanProfile, WorkoutLogEntry,
    WorkoutSubmission,
};
use super::repository::{
    DuelSchedule, InventoryRepository, ItemCatalog, RepositoryError, TitanRepository,
    WellnessProvider,
};
use crate::game::loot::{Item, LootEngine, LootOutcome};
use crate::game::oracle::{DecreeContext, DecreeSelector, OracleConfig, OracleDecree};
use crate::game::progression::{self, RewardRates};
use crate::game::rating::{RatingEngine, TrainingPath};
use crate::game::{grind, streak, GameConfig};

static TITAN_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_titan_id() -> TitanId {
    let id = TITAN_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    TitanId(format!("titan-{id:06}"))
}

/// Service composing the loot, rating, and payout engines over the storage
/// traits. Each operation is one sanitize → compute → persist pass.
pub struct WorkoutService<T, I, C> {
    titans: Arc<T>,
    inventory: Arc<I>,
    catalog: Arc<C>,
    loot: LootEngine,
    rating: RatingEngine,
    rewards: RewardRates,
}

impl<T, I, C> WorkoutService<T, I, C>
where
    T: TitanRepository + 'static,
    I: InventoryRepository + 'static,
    C: ItemCatalog + 'static,
{
    pub fn new(titans: Arc<T>, inventory: Arc<I>, catalog: Arc<C>, config: GameConfig) -> Self {
        Self {
            titans,
            inventory,
            catalog,
            loot: LootEngine::new(config.loot),
            rating: RatingEngine::new(config.rating),
            rewards: config.rewards,
        }
    }

    /// Enroll a new titan with a sequence-assigned id and a fresh rating.
    pub fn register(
        &self,
        enrollment: TitanEnrollment,
    ) -> Result<TitanProfile, WorkoutServiceError> {
        let training_path = enrollment
            .training_path
            .as_deref()
            .and_then(TrainingPath::parse);

        let mut profile = TitanProfile {
            titan_id: next_titan_id(),
            name: enrollment.name,
            training_path,
            wilks_score: enrollment.wilks_score,
            ftp_watts_per_kg: enrollment.ftp_watts_per_kg,
            mrv_adherence: enrollment.mrv_adherence,
            cardio_adherence: enrollment.cardio_adherence,
            loot_luck: enrollment.loot_luck.max(0.0),
            total_xp: 0,
            level: 1,
            gold: 0,
            power_rating: 0,
            strength_index: 0.0,
            cardio_index: 0.0,
            streak_days: 0,
            last_activity_on: None,
        };

        let rating = self.rating.power_rating(&profile.rating_inputs());
        profile.power_rating = rating.power_rating;
        profile.strength_index = rating.strength_index;
        profile.cardio_index = rating.cardio_index;

        let stored = self.titans.insert(profile)?;
        info!(titan = %stored.titan_id.0, rating = stored.power_rating, "titan enrolled");
        Ok(stored)
    }

    /// Run one workout through the reward pipeline and persist the results.
    pub fn log_workout(
        &self,
        id: &TitanId,
        submission: &WorkoutSubmission,
        today: NaiveDate,
        rng: &mut dyn FnMut() -> f64,
    ) -> Result<WorkoutRewardOutcome, WorkoutServiceError> {
        let workout = submission.sanitized()?;
        let logged_on = submission.logged_on.unwrap_or(today);

        let mut profile = self
            .titans
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let workout_number = self.titans.workouts_on(id, logged_on)? + 1;
        let verdict = grind::diminishing_returns(workout_number);

        let streak_days = updated_streak(&profile, logged_on);
        let bonus_percent = streak::streak_bonus_percent(streak_days);
        let payout = self.rewards.payout(
            workout.duration_minutes,
            workout.intensity,
            bonus_percent,
            &verdict,
        );

        let drop_chance = self.loot.drop_chance(
            workout.intensity,
            workout.duration_minutes,
            profile.loot_luck,
        );

        let (loot, loot_note) = if verdict.rewards_exhausted() {
            (None, Some("daily limit reached, loot withheld"))
        } else {
            let owned = self.inventory.owned_items(id)?;
            let catalog = self.catalog.items()?;
            match self.loot.roll(&owned, &catalog, drop_chance, rng) {
                LootOutcome::Dropped(item) => {
                    match self.inventory.grant(id, &item.id) {
                        Ok(()) => {}
                        Err(RepositoryError::Conflict) => {
                            // Uniqueness backstop at the store held; the roll stands.
                            warn!(titan = %id.0, item = %item.id.0, "duplicate grant suppressed");
                        }
                        Err(other) => return Err(other.into()),
                    }
                    (Some(item), None)
                }
                LootOutcome::Missed(miss) => (None, Some(miss.label())),
            }
        };

        let previous_level = profile.level;
        profile.total_xp += payout.xp;
        profile.gold += payout.gold;
        profile.level = progression::level_for_xp(profile.total_xp);
        profile.streak_days = streak_days;
        profile.last_activity_on = Some(logged_on);

        let rating = self.rating.power_rating(&profile.rating_inputs());
        profile.power_rating = rating.power_rating;
        profile.strength_index = rating.strength_index;
        profile.cardio_index = rating.cardio_index;

        self.titans.append_workout(
            id,
            WorkoutLogEntry {
                logged_on,
                duration_minutes: workout.duration_minutes,
                intensity: workout.intensity,
            },
        )?;
        self.titans.update(profile.clone())?;

        info!(
            titan = %id.0,
            workout_number,
            xp = payout.xp,
            gold = payout.gold,
            "workout logged"
        );

        Ok(WorkoutRewardOutcome {
            titan_id: profile.titan_id,
            workout_number,
            xp_awarded: payout.xp,
            gold_awarded: payout.gold,
            reward_note: verdict.message,
            recommended_to_stop: verdict.recommended_to_stop,
            streak_days,
            streak_bonus_percent: bonus_percent,
            drop_chance,
            loot,
            loot_note,
            level: profile.level,
            leveled_up: profile.level > previous_level,
            power_rating: profile.power_rating,
        })
    }

    /// Recompute the power rating with inactivity decay applied, persist it,
    /// and return the snapshot.
    pub fn rating_snapshot(
        &self,
        id: &TitanId,
        today: NaiveDate,
    ) -> Result<RatingSnapshot, WorkoutServiceError> {
        let mut profile = self
            .titans
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let rating = self.rating.power_rating(&profile.rating_inputs());
        let days_idle = profile
            .last_activity_on
            .map(|last| (today - last).num_days().max(0) as u32)
            .unwrap_or(0);
        let decayed = self.rating.apply_decay(rating.power_rating, days_idle);

        profile.power_rating = decayed;
        profile.strength_index = rating.strength_index;
        profile.cardio_index = rating.cardio_index;
        self.titans.update(profile.clone())?;

        Ok(RatingSnapshot {
            titan_id: profile.titan_id,
            strength_index: rating.strength_index,
            cardio_index: rating.cardio_index,
            power_rating: decayed,
            days_since_activity: days_idle,
            decay_applied: decayed < rating.power_rating,
        })
    }

    /// Fetch a profile for API responses.
    pub fn profile(&self, id: &TitanId) -> Result<TitanProfile, WorkoutServiceError> {
        let profile = self
            .titans
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }
}

fn updated_streak(profile: &TitanProfile, logged_on: NaiveDate) -> u32 {
    match profile.last_activity_on {
        Some(last) if last == logged_on => profile.streak_days.max(1),
        Some(last) if (logged_on - last).num_days() == 1 => profile.streak_days + 1,
        _ => 1,
    }
}

/// Everything a client needs to render the post-workout reward screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRewardOutcome {
    pub titan_id: TitanId,
    pub workout_number: u32,
    pub xp_awarded: u64,
    pub gold_awarded: u64,
    pub reward_note: &'static str,
    pub recommended_to_stop: bool,
    pub streak_days: u32,
    pub streak_bonus_percent: u32,
    pub drop_chance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot: Option<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot_note: Option<&'static str>,
    pub level: u32,
    pub leveled_up: bool,
    pub power_rating: u32,
}

/// Decayed rating view returned by the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSnapshot {
    pub titan_id: TitanId,
    pub strength_index: f64,
    pub cardio_index: f64,
    pub power_rating: u32,
    pub days_since_activity: u32,
    pub decay_applied: bool,
}

/// Assembles the decree context from collaborators and runs the selector.
pub struct OracleService<W, D> {
    wellness: Arc<W>,
    duels: Arc<D>,
    selector: DecreeSelector,
}

impl<W, D> OracleService<W, D>
where
    W: WellnessProvider + 'static,
    D: DuelSchedule + 'static,
{
    pub fn new(wellness: Arc<W>, duels: Arc<D>, config: OracleConfig) -> Self {
        Self {
            wellness,
            duels,
            selector: DecreeSelector::new(config),
        }
    }

    pub fn daily_decree(
        &self,
        id: &TitanId,
        today: NaiveDate,
    ) -> Result<OracleDecree, WorkoutServiceError> {
        let wellness = self.wellness.snapshot(id)?;
        let days_until_duel = self.duels.next_deadline_days(id, today)?;

        let context = DecreeContext {
            readiness: wellness.readiness,
            is_injured: wellness.is_injured,
            days_until_duel,
        };

        let decree = self.selector.select(&context);
        info!(titan = %id.0, code = ?decree.code, "decree issued");
        Ok(decree)
    }
}

/// Error raised by the workout and oracle services.
#[derive(Debug, thiserror::Error)]
pub enum WorkoutServiceError {
    #[error(transparent)]
    Rejected(#[from] SubmissionRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
