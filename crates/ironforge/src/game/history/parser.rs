use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::TrainingLogImportError;

/// One row of a training-log export.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingLogEntry {
    pub logged_on: NaiveDate,
    pub duration_minutes: f64,
    pub intensity: f64,
}

/// Intensity assumed for exports that do not carry one.
const DEFAULT_INTENSITY: f64 = 0.5;

pub(crate) fn parse_entries<R: Read>(
    reader: R,
) -> Result<Vec<TrainingLogEntry>, TrainingLogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for record in csv_reader.deserialize::<LogRow>() {
        let row = record?;
        let logged_on =
            parse_date(&row.date).ok_or_else(|| TrainingLogImportError::InvalidDate {
                value: row.date.clone(),
            })?;

        entries.push(TrainingLogEntry {
            logged_on,
            duration_minutes: row.duration_minutes.max(0.0),
            intensity: row.intensity.unwrap_or(DEFAULT_INTENSITY).clamp(0.0, 1.0),
        });
    }

    Ok(entries)
}

#[derive(Debug, Deserialize)]
struct LogRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Duration Minutes")]
    duration_minutes: f64,
    #[serde(rename = "Intensity", default, deserialize_with = "empty_as_none")]
    intensity: Option<f64>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
