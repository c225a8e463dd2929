//! Statistics calculation engine.
//!
//! Derives the read views served by the API from a loaded record set:
//! - KPI summary (totals, ratios, rates)
//! - Per-match trend series
//! - Per-map aggregates

use std::collections::BTreeMap;

use crate::models::{MapAggregate, MatchRecord, Summary, SummaryStats, Trends};

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `count` over `total`, rounded. Zero when `total` is zero.
pub fn calculate_rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        round2(count as f64 / total as f64 * 100.0)
    }
}

/// Total kills over total deaths, rounded. `None` when nobody died.
pub fn calculate_kd_ratio(kills: u64, deaths: u64) -> Option<f64> {
    if deaths == 0 {
        None
    } else {
        Some(round2(kills as f64 / deaths as f64))
    }
}

fn mean<I>(values: I, count: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    if count == 0 {
        return 0.0;
    }
    values.into_iter().sum::<f64>() / count as f64
}

/// Compute the KPI summary.
pub fn summarize(records: &[MatchRecord]) -> Summary {
    let n = records.len();
    if n == 0 {
        return Summary {
            total_matches: 0,
            stats: None,
        };
    }

    let total_kills: u64 = records.iter().map(|r| r.kills as u64).sum();
    let total_deaths: u64 = records.iter().map(|r| r.deaths as u64).sum();
    let wins = records.iter().filter(|r| r.is_win()).count();
    let mvps = records.iter().filter(|r| r.mvp).count();

    Summary {
        total_matches: n as u32,
        stats: Some(SummaryStats {
            total_kills,
            total_deaths,
            kd_ratio: calculate_kd_ratio(total_kills, total_deaths),
            win_rate: calculate_rate(wins, n),
            avg_accuracy: round2(mean(records.iter().map(|r| r.accuracy), n)),
            avg_impact: round2(mean(records.iter().map(|r| r.impact as f64), n)),
            mvp_rate: calculate_rate(mvps, n),
        }),
    }
}

/// Split records into parallel per-match series, keeping record order.
pub fn trends(records: &[MatchRecord]) -> Trends {
    let mut out = Trends::default();
    for r in records {
        out.matches.push(r.match_id.clone());
        out.kills.push(r.kills);
        out.accuracy.push(r.accuracy);
        out.impact.push(r.impact);
        out.score.push(r.score);
    }
    out
}

/// Group records by map, ordered by map name ascending.
pub fn map_aggregates(records: &[MatchRecord]) -> Vec<MapAggregate> {
    let mut groups: BTreeMap<&str, Vec<&MatchRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.map.as_str()).or_default().push(r);
    }

    groups
        .into_iter()
        .map(|(map, games)| {
            let n = games.len();
            MapAggregate {
                map: map.to_string(),
                kills: round2(mean(games.iter().map(|r| r.kills as f64), n)),
                impact: round2(mean(games.iter().map(|r| r.impact as f64), n)),
                kd_ratio: round2(mean(games.iter().map(|r| r.kd()), n)),
                games: n as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, map: &str, kills: u32, deaths: u32) -> MatchRecord {
        MatchRecord {
            match_id: id.to_string(),
            date: "2026-01-15".to_string(),
            map: map.to_string(),
            mode: "Multiplayer".to_string(),
            kills,
            deaths,
            assists: 1,
            score: 1200,
            accuracy: 40.0,
            impact: 60,
            duration_min: 15.0,
            mvp: false,
            result: "Loss".to_string(),
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(7.5), 7.5);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }

    #[test]
    fn test_calculate_rate() {
        assert_eq!(calculate_rate(1, 2), 50.0);
        assert_eq!(calculate_rate(1, 3), 33.33);
        assert_eq!(calculate_rate(0, 0), 0.0);
    }

    #[test]
    fn test_calculate_kd_ratio() {
        assert_eq!(calculate_kd_ratio(15, 2), Some(7.5));
        assert_eq!(calculate_kd_ratio(15, 0), None);
        assert_eq!(calculate_kd_ratio(0, 4), Some(0.0));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_matches, 0);
        assert!(summary.stats.is_none());
    }

    #[test]
    fn test_summarize_totals_and_kd() {
        let records = vec![
            record("1", "Altar", 5, 2),
            record("2", "Altar", 0, 0),
            record("3", "Bunker", 10, 0),
        ];
        let summary = summarize(&records);
        let stats = summary.stats.unwrap();

        assert_eq!(summary.total_matches, 3);
        assert_eq!(stats.total_kills, 15);
        assert_eq!(stats.total_deaths, 2);
        assert_eq!(stats.kd_ratio, Some(7.5));
    }

    #[test]
    fn test_summarize_kd_null_without_deaths() {
        let records = vec![record("1", "Altar", 5, 0), record("2", "Altar", 3, 0)];
        let stats = summarize(&records).stats.unwrap();
        assert_eq!(stats.total_deaths, 0);
        assert_eq!(stats.kd_ratio, None);
    }

    #[test]
    fn test_summarize_win_rate() {
        let mut a = record("1", "Altar", 1, 1);
        a.result = "Win by default".to_string();
        let b = record("2", "Altar", 1, 1);

        let stats = summarize(&[a, b]).stats.unwrap();
        assert_eq!(stats.win_rate, 50.0);
    }

    #[test]
    fn test_summarize_mvp_rate_and_means() {
        let mut a = record("1", "Altar", 1, 1);
        a.mvp = true;
        a.accuracy = 35.5;
        a.impact = 100;
        let mut b = record("2", "Altar", 1, 1);
        b.accuracy = 60.0;
        b.impact = 21;
        let c = record("3", "Altar", 1, 1);

        let stats = summarize(&[a, b, c]).stats.unwrap();
        assert_eq!(stats.mvp_rate, 33.33);
        assert_eq!(stats.avg_accuracy, 45.17);
        assert_eq!(stats.avg_impact, 60.33);
    }

    #[test]
    fn test_summarize_rates_bounded() {
        let mut records: Vec<MatchRecord> = (0..7)
            .map(|i| record(&i.to_string(), "Altar", i, 1))
            .collect();
        for r in records.iter_mut().step_by(2) {
            r.result = "Win".to_string();
            r.mvp = true;
        }
        let stats = summarize(&records).stats.unwrap();
        assert!((0.0..=100.0).contains(&stats.win_rate));
        assert!((0.0..=100.0).contains(&stats.mvp_rate));
    }

    #[test]
    fn test_trends_preserve_order() {
        let records = vec![
            record("m3", "Altar", 3, 1),
            record("m1", "Bunker", 1, 1),
            record("m2", "Altar", 2, 1),
        ];
        let t = trends(&records);

        assert_eq!(t.matches, vec!["m3", "m1", "m2"]);
        assert_eq!(t.kills, vec![3, 1, 2]);
        assert_eq!(t.accuracy.len(), 3);
        assert_eq!(t.impact.len(), 3);
        assert_eq!(t.score.len(), 3);
    }

    #[test]
    fn test_trends_empty() {
        let t = trends(&[]);
        assert!(t.is_empty());
        assert!(t.kills.is_empty());
        assert!(t.score.is_empty());
    }

    #[test]
    fn test_map_aggregates() {
        let records = vec![
            record("1", "Shipyard", 4, 2),
            record("2", "Altar", 6, 0),
            record("3", "Shipyard", 9, 3),
        ];
        let maps = map_aggregates(&records);

        assert_eq!(
            maps,
            vec![
                MapAggregate {
                    map: "Altar".to_string(),
                    kills: 6.0,
                    impact: 60.0,
                    kd_ratio: 6.0,
                    games: 1,
                },
                MapAggregate {
                    map: "Shipyard".to_string(),
                    kills: 6.5,
                    impact: 60.0,
                    kd_ratio: 2.5,
                    games: 2,
                },
            ]
        );
    }

    #[test]
    fn test_map_games_sum_to_total() {
        let maps_cycle = ["Altar", "Shipyard", "Bunker", "Factory"];
        let records: Vec<MatchRecord> = (0..11)
            .map(|i| record(&i.to_string(), maps_cycle[i % 4], 1, 1))
            .collect();
        let total: u32 = map_aggregates(&records).iter().map(|m| m.games).sum();
        assert_eq!(total, 11);
    }

    #[test]
    fn test_map_aggregates_empty() {
        assert!(map_aggregates(&[]).is_empty());
    }
}
