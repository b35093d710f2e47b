//! Competition-Scoring Dashboard Feed Library
//!
//! This library provides the data-refresh and aggregation core of a live
//! competition-scoring dashboard: a polling feed over the scoring backend,
//! the shared team/service record shapes, and pure derivation of leaderboard
//! and uptime metrics for presentation consumers.

pub mod client;
pub mod config;
pub mod errors;
pub mod feed;
pub mod metrics;
pub mod models;
pub mod render;

pub use client::ScoreClient;
pub use config::{Config, DEFAULT_TEAM_COLOR};
pub use errors::{FeedError, Result};
pub use feed::{FeedHandle, PollingFeed};
pub use metrics::{DerivedTeamScore, DerivedUptime, StatusColor};
pub use models::{ServiceResult, Snapshot, TeamRecord};
