//! Pure derivation of display metrics from team records
//!
//! Everything here is stateless and deterministic: the feed hands over an
//! immutable snapshot and these functions compute leaderboard entries, uptime
//! percentages, and status colors from it. Derived values are recomputed from
//! scratch on every poll cycle rather than patched incrementally.

use crate::models::TeamRecord;
use serde::{Deserialize, Serialize};

/// Uptime classification bucket for the status grid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusColor {
    DarkRed,
    Red,
    Orange,
    Green,
}

impl StatusColor {
    /// Hex token rendered by the uptime grid.
    pub fn hex(&self) -> &'static str {
        match self {
            StatusColor::DarkRed => "#831911",
            StatusColor::Red => "#F44336",
            StatusColor::Orange => "#F08928",
            StatusColor::Green => "#4CAF50",
        }
    }
}

/// One leaderboard entry: team label, summed score, and bar color.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedTeamScore {
    pub label: String,
    pub value: u64,
    pub color: String,
}

/// Uptime percentage and its status bucket for one team/service cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedUptime {
    pub uptime_percent: u8,
    pub status_color: StatusColor,
}

/// Sum of points across all of a team's services; empty map scores 0.
pub fn total_score(team: &TeamRecord) -> u64 {
    team.services.values().map(|service| service.points).sum()
}

/// Map teams to leaderboard entries, substituting `default_color` when a
/// team's color is absent or empty.
///
/// With more than one team the result is sorted descending by score; the
/// sort is stable, so tied teams keep their input order. With zero or one
/// team no sort is invoked and backend order is passed through.
pub fn ranked_scores(teams: &[TeamRecord], default_color: &str) -> Vec<DerivedTeamScore> {
    let mut scores: Vec<DerivedTeamScore> = teams
        .iter()
        .map(|team| DerivedTeamScore {
            label: team.name.clone(),
            value: total_score(team),
            color: match team.color.as_deref() {
                Some(color) if !color.is_empty() => color.to_string(),
                _ => default_color.to_string(),
            },
        })
        .collect();

    if scores.len() > 1 {
        scores.sort_by(|a, b| b.value.cmp(&a.value));
    }

    scores
}

/// Uptime percentage from check counters, rounded to the nearest integer.
///
/// `total == 0` is treated as 1 before dividing, so a never-checked service
/// reads 0% instead of dividing by zero. Counters where `successful > total`
/// are a data-quality anomaly; the result is clamped to 100.
pub fn uptime_percent(successful: u64, total: u64) -> u8 {
    let total = total.max(1);
    let percent = (successful as f64 / total as f64 * 100.0).round();
    percent.min(100.0) as u8
}

/// Bucket an uptime percentage into its status color.
pub fn status_color(uptime_percent: u8) -> StatusColor {
    if uptime_percent <= 20 {
        StatusColor::DarkRed
    } else if uptime_percent <= 50 {
        StatusColor::Red
    } else if uptime_percent < 75 {
        StatusColor::Orange
    } else {
        StatusColor::Green
    }
}

/// Uptime cell for one team/service, treating a missing service entry as
/// zero checks (0%, dark red) rather than an error.
pub fn service_uptime(team: &TeamRecord, service_name: &str) -> DerivedUptime {
    let (successful, total) = team
        .services
        .get(service_name)
        .map(|service| (service.successful_checks, service.total_checks))
        .unwrap_or((0, 0));

    let uptime_percent = uptime_percent(successful, total);
    DerivedUptime {
        uptime_percent,
        status_color: status_color(uptime_percent),
    }
}

/// Pass/fail state of a team's service; a missing entry reads as down.
pub fn is_service_up(team: &TeamRecord, service_name: &str) -> bool {
    team.services
        .get(service_name)
        .map(|service| service.is_up)
        .unwrap_or(false)
}

/// Service-name columns for grid rendering, read from the first team.
///
/// All teams in a poll are expected to share the same service keys; a team
/// that diverges renders degraded (missing entries show as 0%/down) but
/// never errors.
pub fn service_names(teams: &[TeamRecord]) -> Vec<String> {
    teams
        .first()
        .map(|team| team.services.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceResult;
    use std::collections::BTreeMap;

    fn team(name: &str, color: Option<&str>, services: &[(&str, u64)]) -> TeamRecord {
        TeamRecord {
            id: 1,
            name: name.to_string(),
            color: color.map(str::to_string),
            services: services
                .iter()
                .map(|(service_name, points)| {
                    (
                        service_name.to_string(),
                        ServiceResult {
                            points: *points,
                            is_up: true,
                            successful_checks: 0,
                            total_checks: 0,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_total_score_sums_services() {
        let team = team("X", None, &[("a", 10), ("b", 5)]);
        assert_eq!(total_score(&team), 15);
    }

    #[test]
    fn test_total_score_empty_services() {
        let team = team("X", None, &[]);
        assert_eq!(total_score(&team), 0);
    }

    #[test]
    fn test_uptime_percent_division_by_zero_guard() {
        assert_eq!(uptime_percent(0, 0), 0);
    }

    #[test]
    fn test_uptime_percent_rounding() {
        assert_eq!(uptime_percent(5, 10), 50);
        assert_eq!(uptime_percent(3, 4), 75);
        assert_eq!(uptime_percent(1, 3), 33);
        assert_eq!(uptime_percent(2, 3), 67);
    }

    #[test]
    fn test_uptime_percent_clamps_anomalous_counters() {
        // successful > total should never panic or exceed 100
        assert_eq!(uptime_percent(5, 4), 100);
        assert_eq!(uptime_percent(100, 1), 100);
    }

    #[test]
    fn test_status_color_boundaries() {
        assert_eq!(status_color(0), StatusColor::DarkRed);
        assert_eq!(status_color(20), StatusColor::DarkRed);
        assert_eq!(status_color(21), StatusColor::Red);
        assert_eq!(status_color(50), StatusColor::Red);
        assert_eq!(status_color(51), StatusColor::Orange);
        assert_eq!(status_color(74), StatusColor::Orange);
        assert_eq!(status_color(75), StatusColor::Green);
        assert_eq!(status_color(100), StatusColor::Green);
    }

    #[test]
    fn test_status_color_hex_tokens() {
        assert_eq!(StatusColor::DarkRed.hex(), "#831911");
        assert_eq!(StatusColor::Red.hex(), "#F44336");
        assert_eq!(StatusColor::Orange.hex(), "#F08928");
        assert_eq!(StatusColor::Green.hex(), "#4CAF50");
    }

    #[test]
    fn test_ranked_scores_sorts_descending_with_stable_ties() {
        let teams = vec![
            team("X", None, &[("a", 10)]),
            team("Y", None, &[("a", 30)]),
            team("Z", None, &[("a", 30)]),
        ];

        let ranked = ranked_scores(&teams, "#89CFF0");
        let labels: Vec<&str> = ranked.iter().map(|s| s.label.as_str()).collect();
        // Y and Z tie at 30; Y entered first and stays first
        assert_eq!(labels, vec!["Y", "Z", "X"]);
    }

    #[test]
    fn test_ranked_scores_single_team_skips_sort() {
        let teams = vec![team("Solo", None, &[("a", 5)])];

        let ranked = ranked_scores(&teams, "#89CFF0");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].label, "Solo");
        assert_eq!(ranked[0].value, 5);
    }

    #[test]
    fn test_ranked_scores_empty_input() {
        assert!(ranked_scores(&[], "#89CFF0").is_empty());
    }

    #[test]
    fn test_ranked_scores_color_fallback() {
        let teams = vec![
            team("Has", Some("#112233"), &[("a", 1)]),
            team("Empty", Some(""), &[("a", 2)]),
            team("None", None, &[("a", 3)]),
        ];

        let ranked = ranked_scores(&teams, "#89CFF0");
        let by_label = |label: &str| ranked.iter().find(|s| s.label == label).unwrap();
        assert_eq!(by_label("Has").color, "#112233");
        assert_eq!(by_label("Empty").color, "#89CFF0");
        assert_eq!(by_label("None").color, "#89CFF0");
    }

    #[test]
    fn test_service_uptime_missing_entry_is_zero() {
        let team = team("X", None, &[]);
        let uptime = service_uptime(&team, "ghost");
        assert_eq!(uptime.uptime_percent, 0);
        assert_eq!(uptime.status_color, StatusColor::DarkRed);
    }

    #[test]
    fn test_is_service_up_defaults_to_down() {
        let mut up_team = team("X", None, &[("ssh", 1)]);
        assert!(is_service_up(&up_team, "ssh"));
        assert!(!is_service_up(&up_team, "ftp"));

        up_team.services.get_mut("ssh").unwrap().is_up = false;
        assert!(!is_service_up(&up_team, "ssh"));
    }

    #[test]
    fn test_service_names_from_first_team() {
        let teams = vec![
            team("X", None, &[("ftp", 0), ("ssh", 0)]),
            team("Y", None, &[("dns", 0)]),
        ];
        assert_eq!(service_names(&teams), vec!["ftp", "ssh"]);
        assert!(service_names(&[]).is_empty());
    }
}
