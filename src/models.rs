//! Team and service record shapes shared by the fetch and derivation layers
//!
//! The wire format is pinned to the scoring backend: a JSON array of team
//! objects with PascalCase team fields and snake_case per-service fields.
//! Decoding rejects payloads missing `ID`, `Name`, or `Services`; a missing
//! or empty `Color` is tolerated and resolved to the configured default at
//! derivation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One service's scoring state for one team at the latest poll.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceResult {
    pub points: u64,
    pub is_up: bool,
    pub successful_checks: u64,
    pub total_checks: u64,
}

/// One team's full state as returned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamRecord {
    #[serde(rename = "ID")]
    pub id: i64,

    #[serde(rename = "Name")]
    pub name: String,

    /// Display color token; absent or empty falls back to the default.
    #[serde(rename = "Color", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Per-service results keyed by service name.
    #[serde(rename = "Services")]
    pub services: BTreeMap<String, ServiceResult>,
}

/// An immutable poll result: every team's state at one fetch, in backend
/// order, replaced wholesale each cycle.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub teams: Vec<TeamRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(teams: Vec<TeamRecord>) -> Self {
        Self {
            teams,
            fetched_at: Utc::now(),
        }
    }

    /// Empty snapshot used as the feed's value before the first fetch lands.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }
}
