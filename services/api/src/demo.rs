use crate::infra::{
    game_config, parse_date, InMemoryInventoryRepository, InMemoryTitanRepository,
    StaticItemCatalog,
};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use ironforge::config::GameTuningConfig;
use ironforge::error::AppError;
use ironforge::game::history::TrainingLogImporter;
use ironforge::game::oracle::{DecreeContext, DecreeSelector, OracleConfig};
use ironforge::game::workouts::{TitanEnrollment, WorkoutService, WorkoutSubmission};
use ironforge::game::{grind, streak};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Number of simulated training days
    #[arg(long, default_value_t = 7)]
    pub(crate) days: u32,
    /// RNG seed so loot outcomes reproduce across runs
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
    /// Training path label for the demo titan
    #[arg(long, default_value = "JUGGERNAUT")]
    pub(crate) path: String,
    /// First simulated day (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct HistoryReportArgs {
    /// CSV training-log export to summarize
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        days,
        seed,
        path,
        start,
    } = args;

    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let service = WorkoutService::new(
        Arc::new(InMemoryTitanRepository::default()),
        Arc::new(InMemoryInventoryRepository::default()),
        Arc::new(StaticItemCatalog::default()),
        game_config(&GameTuningConfig::default()),
    );

    let profile = service.register(TitanEnrollment {
        name: "Demo Titan".to_string(),
        training_path: Some(path),
        wilks_score: 380.0,
        ftp_watts_per_kg: 3.1,
        mrv_adherence: 0.9,
        cardio_adherence: 0.6,
        loot_luck: 1.0,
    })?;
    let id = profile.titan_id.clone();

    println!("IronForge demo");
    println!(
        "Enrolled {} ({}), power rating {}",
        profile.name,
        profile
            .training_path
            .map(|path| path.label())
            .unwrap_or("no path"),
        profile.power_rating
    );

    let mut seeded = StdRng::seed_from_u64(seed);
    let mut draw = move || seeded.gen::<f64>();

    for offset in 0..days {
        let date = start + Duration::days(i64::from(offset));
        // Every third day doubles up to show the diminishing returns.
        let sessions = if offset % 3 == 2 { 2 } else { 1 };

        println!("\nDay {} ({date})", offset + 1);
        for _ in 0..sessions {
            let submission = WorkoutSubmission {
                logged_on: Some(date),
                duration_minutes: 40.0 + f64::from(offset % 4) * 10.0,
                intensity: 0.5 + f64::from(offset % 3) * 0.2,
            };
            let outcome = service.log_workout(&id, &submission, date, &mut draw)?;

            let loot_line = match (&outcome.loot, outcome.loot_note) {
                (Some(item), _) => format!("loot: {} ({})", item.name, item.rarity.label()),
                (None, Some(note)) => format!("loot: none ({note})"),
                (None, None) => "loot: none".to_string(),
            };
            println!(
                "- workout #{}: +{} xp, +{} gold, streak {} (+{}%), {}",
                outcome.workout_number,
                outcome.xp_awarded,
                outcome.gold_awarded,
                outcome.streak_days,
                outcome.streak_bonus_percent,
                loot_line
            );
            if outcome.recommended_to_stop {
                println!("  {}", outcome.reward_note);
            }
        }
    }

    let final_profile = service.profile(&id)?;
    println!(
        "\nAfter {} days: level {}, {} xp, {} gold, power rating {}",
        days, final_profile.level, final_profile.total_xp, final_profile.gold,
        final_profile.power_rating
    );

    render_decree_showcase();
    Ok(())
}

/// The decree rules are pure; show the priority order directly instead of
/// wiring stub providers per scenario.
fn render_decree_showcase() {
    let selector = DecreeSelector::new(OracleConfig::default());
    let scenarios: [(&str, DecreeContext); 4] = [
        (
            "injured, exhausted, duel tomorrow",
            DecreeContext {
                readiness: 15,
                is_injured: true,
                days_until_duel: Some(1),
            },
        ),
        (
            "healthy but drained",
            DecreeContext {
                readiness: 22,
                is_injured: false,
                days_until_duel: None,
            },
        ),
        (
            "fresh with a duel in two days",
            DecreeContext {
                readiness: 85,
                is_injured: false,
                days_until_duel: Some(2),
            },
        ),
        (
            "ordinary day",
            DecreeContext {
                readiness: 70,
                is_injured: false,
                days_until_duel: None,
            },
        ),
    ];

    println!("\nOracle decrees");
    for (label, context) in scenarios {
        let decree = selector.select(&context);
        println!("- {label}: {} ({})", decree.label, decree.description);
    }
}

pub(crate) fn run_history_report(args: HistoryReportArgs) -> Result<(), AppError> {
    let HistoryReportArgs { csv, today } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let history = TrainingLogImporter::from_path(csv)?;

    let streak_days = history.consecutive_day_streak(today);
    let bonus = streak::streak_bonus_percent(streak_days);
    let logged_today = history.workouts_on(today);
    let next = grind::diminishing_returns(logged_today + 1);

    println!("Training log report for {today}");
    println!(
        "{} workouts on record, {} today",
        history.entries().len(),
        logged_today
    );
    println!("Current streak: {streak_days} day(s), gold bonus +{bonus}%");
    println!(
        "Next workout would pay {}% rewards: {}",
        (next.xp_multiplier * 100.0).round() as u32,
        next.message
    );
    if next.recommended_to_stop {
        println!("Recommendation: rest and come back tomorrow.");
    }

    println!("\nLast 7 days");
    for offset in (0i64..7).rev() {
        let date = today - Duration::days(offset);
        let count = history.workouts_on(date);
        let marker = if count > 0 { "x" } else { "." };
        println!("- {date}: {marker} ({count})");
    }

    Ok(())
}
