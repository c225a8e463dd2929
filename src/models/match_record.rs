//! Match record model.

use serde::{Deserialize, Deserializer, Serialize};

/// Column names every match table must carry, in canonical write order.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "match_id",
    "date",
    "map",
    "mode",
    "kills",
    "deaths",
    "assists",
    "score",
    "accuracy",
    "impact",
    "duration_min",
    "mvp",
    "result",
];

/// One row of gameplay statistics for a single match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: String,

    /// Date as stored (ISO date or RFC 3339 timestamp)
    pub date: String,

    pub map: String,
    pub mode: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub score: i64,

    /// Hit percentage, 0 to 100
    pub accuracy: f64,

    pub impact: u32,
    pub duration_min: f64,

    /// Stored as "Yes"/"No"; only a case-insensitive "yes" marks an MVP.
    #[serde(deserialize_with = "deserialize_mvp")]
    pub mvp: bool,

    /// Free-form outcome such as "Win", "Loss" or "Win by default"
    pub result: String,
}

impl MatchRecord {
    /// A match counts as won when its result contains "Win" (case-sensitive).
    pub fn is_win(&self) -> bool {
        self.result.contains("Win")
    }

    /// Kill/death ratio for this match, treating zero deaths as one.
    pub fn kd(&self) -> f64 {
        self.kills as f64 / self.deaths.max(1) as f64
    }

    /// Cell value for the MVP column.
    pub fn mvp_label(&self) -> &'static str {
        if self.mvp {
            "Yes"
        } else {
            "No"
        }
    }
}

fn deserialize_mvp<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().eq_ignore_ascii_case("yes"))
}
