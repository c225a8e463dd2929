//! Derived statistics models.

use serde::Serialize;

/// KPI summary over the full dataset.
///
/// An empty dataset serializes as `{"total_matches": 0}` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_matches: u32,

    #[serde(flatten)]
    pub stats: Option<SummaryStats>,
}

/// Aggregate figures, present only when at least one match exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_kills: u64,
    pub total_deaths: u64,

    /// `None` (null) when there are no deaths
    pub kd_ratio: Option<f64>,

    /// Percentage, 0 to 100
    pub win_rate: f64,

    pub avg_accuracy: f64,
    pub avg_impact: f64,

    /// Percentage, 0 to 100
    pub mvp_rate: f64,
}

/// Per-match values as parallel series, in record order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trends {
    pub matches: Vec<String>,
    pub kills: Vec<u32>,
    pub accuracy: Vec<f64>,
    pub impact: Vec<u32>,
    pub score: Vec<i64>,
}

impl Trends {
    /// Number of points in each series.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Statistics grouped and averaged by map name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapAggregate {
    pub map: String,

    /// Mean kills per game
    pub kills: f64,

    /// Mean impact per game
    pub impact: f64,

    /// Mean of per-game kill/death ratios
    pub kd_ratio: f64,

    pub games: u32,
}
