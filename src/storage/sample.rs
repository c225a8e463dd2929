//! Random sample match data.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use rand::Rng;

use super::{MatchStore, StorageError};
use crate::models::MatchRecord;

pub const SAMPLE_MAPS: [&str; 4] = ["Altar", "Shipyard", "Bunker", "Factory"];
pub const SAMPLE_MODES: [&str; 3] = ["BR", "Multiplayer", "Duel"];

/// Generate `count` matches, one per day, ending today.
pub fn generate_matches<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<MatchRecord> {
    generate_matches_at(Utc::now(), count, rng)
}

/// Generate `count` matches, one per day, the last one dated `now`.
pub fn generate_matches_at<R: Rng + ?Sized>(
    now: DateTime<Utc>,
    count: usize,
    rng: &mut R,
) -> Vec<MatchRecord> {
    (0..count)
        .map(|i| {
            let days_ago = (count - 1 - i) as i64;
            let date = now - Duration::days(days_ago);
            let accuracy: f64 = rng.random_range(20.0..=70.0);
            let win = rng.random::<f64>() > 0.6;

            MatchRecord {
                match_id: (i + 1).to_string(),
                date: date.to_rfc3339_opts(SecondsFormat::Secs, true),
                map: SAMPLE_MAPS[i % SAMPLE_MAPS.len()].to_string(),
                mode: SAMPLE_MODES[i % SAMPLE_MODES.len()].to_string(),
                kills: rng.random_range(0..=18),
                deaths: rng.random_range(0..=12),
                assists: rng.random_range(0..=6),
                score: rng.random_range(200..=2500),
                accuracy: (accuracy * 10.0).round() / 10.0,
                impact: rng.random_range(0..=150),
                duration_min: rng.random_range(5..=30) as f64,
                mvp: rng.random::<f64>() > 0.8,
                result: if win { "Win" } else { "Loss" }.to_string(),
            }
        })
        .collect()
}

/// Read-only store producing a fresh random table on every load.
#[derive(Debug, Clone)]
pub struct SampleStore {
    count: usize,
}

impl SampleStore {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl MatchStore for SampleStore {
    fn load(&self) -> Result<Vec<MatchRecord>, StorageError> {
        Ok(generate_matches(self.count, &mut rand::rng()))
    }

    fn replace(&self, _records: &[MatchRecord]) -> Result<(), StorageError> {
        Err(StorageError::ReadOnly(
            "sample data is generated on every request".to_string(),
        ))
    }

    fn location(&self) -> String {
        "sample".to_string()
    }
}
