//! Training-log import: parses a CSV export of logged workouts and derives
//! the per-day counts and streaks the reward pipeline consumes.

mod parser;

pub use parser::TrainingLogEntry;

use chrono::{Duration, NaiveDate};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum TrainingLogImportError {
    #[error("failed to read training log: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid training log data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unrecognized date '{value}' in training log")]
    InvalidDate { value: String },
}

/// Parsed training log with derived streak and day-count lookups.
#[derive(Debug, Clone, Default)]
pub struct TrainingHistory {
    entries: Vec<TrainingLogEntry>,
}

impl TrainingHistory {
    pub fn from_entries(mut entries: Vec<TrainingLogEntry>) -> Self {
        entries.sort_by_key(|entry| entry.logged_on);
        Self { entries }
    }

    pub fn entries(&self) -> &[TrainingLogEntry] {
        &self.entries
    }

    /// Number of workouts logged on the given date.
    pub fn workouts_on(&self, date: NaiveDate) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.logged_on == date)
            .count() as u32
    }

    /// Consecutive training days ending today or yesterday. A day without
    /// training before that breaks the chain; an untouched today does not,
    /// since the streak is only lost once the day is over.
    pub fn consecutive_day_streak(&self, today: NaiveDate) -> u32 {
        let trained_days: HashSet<NaiveDate> =
            self.entries.iter().map(|entry| entry.logged_on).collect();

        let mut cursor = if trained_days.contains(&today) {
            today
        } else {
            today - Duration::days(1)
        };

        let mut streak = 0;
        while trained_days.contains(&cursor) {
            streak += 1;
            cursor -= Duration::days(1);
        }
        streak
    }
}

/// Importer for CSV training-log exports.
pub struct TrainingLogImporter;

impl TrainingLogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TrainingHistory, TrainingLogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<TrainingHistory, TrainingLogImportError> {
        Ok(TrainingHistory::from_entries(parser::parse_entries(
            reader,
        )?))
    }
}
