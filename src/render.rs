//! Plain-text rendering of derived view models
//!
//! These are the binary's presentation adapters: pure functions turning
//! already-derived metrics into display lines. They hold no refresh or
//! aggregation logic of their own.

use crate::metrics::{self, DerivedTeamScore};
use crate::models::TeamRecord;

/// Leaderboard rows, one per team, in ranked order.
pub fn leaderboard_lines(scores: &[DerivedTeamScore]) -> Vec<String> {
    scores
        .iter()
        .enumerate()
        .map(|(rank, score)| {
            format!(
                "{:>2}. {:<24} {:>8}  {}",
                rank + 1,
                score.label,
                score.value,
                score.color
            )
        })
        .collect()
}

/// Pass/fail status grid: a header of service names, then one row per team
/// with an up/down mark per service. Missing entries render as down.
pub fn status_grid_lines(teams: &[TeamRecord]) -> Vec<String> {
    let services = metrics::service_names(teams);
    if services.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(teams.len() + 1);
    lines.push(grid_row("", services.iter().map(String::as_str)));

    for team in teams {
        let cells: Vec<&str> = services
            .iter()
            .map(|service| {
                if metrics::is_service_up(team, service) {
                    "up"
                } else {
                    "down"
                }
            })
            .collect();
        lines.push(grid_row(&team.name, cells.into_iter()));
    }

    lines
}

/// Uptime heat-map grid: one `NN% #RRGGBB` cell per team/service.
pub fn uptime_grid_lines(teams: &[TeamRecord]) -> Vec<String> {
    let services = metrics::service_names(teams);
    if services.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(teams.len() + 1);
    lines.push(grid_row("", services.iter().map(String::as_str)));

    for team in teams {
        let cells: Vec<String> = services
            .iter()
            .map(|service| {
                let uptime = metrics::service_uptime(team, service);
                format!("{}% {}", uptime.uptime_percent, uptime.status_color.hex())
            })
            .collect();
        lines.push(grid_row(&team.name, cells.iter().map(String::as_str)));
    }

    lines
}

fn grid_row<'a>(label: &str, cells: impl Iterator<Item = &'a str>) -> String {
    let mut row = format!("{:<24}", label);
    for cell in cells {
        row.push_str(&format!(" {:>14}", cell));
    }
    row
}
