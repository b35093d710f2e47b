//! Scoring Dashboard Feed Binary

use scorefeed::{Config, PollingFeed, Result, ScoreClient, metrics, render};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    initialize_tracing();

    info!("Starting scoring dashboard feed v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    info!(
        "Feed configuration - API: {}, Path: {}, Interval: {}ms",
        config.api_url,
        config.scores_path,
        config.poll_interval.as_millis()
    );

    let client = ScoreClient::new(config.api_url.clone(), config.http_timeout)?;
    let feed = PollingFeed::start(client, config.scores_path.clone(), config.poll_interval)?;
    let mut updates = feed.subscribe();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                render_snapshot(&snapshot.teams, &config.default_team_color);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down after {} poll cycles", feed.cycles());
                feed.stop();
                break;
            }
        }
    }

    Ok(())
}

/// Print the leaderboard and both grids for the latest snapshot.
fn render_snapshot(teams: &[scorefeed::TeamRecord], default_color: &str) {
    println!("== Leaderboard ==");
    for line in render::leaderboard_lines(&metrics::ranked_scores(teams, default_color)) {
        println!("{}", line);
    }

    println!("== Service status ==");
    for line in render::status_grid_lines(teams) {
        println!("{}", line);
    }

    println!("== Uptime ==");
    for line in render::uptime_grid_lines(teams) {
        println!("{}", line);
    }
}

/// Initialize structured logging
fn initialize_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
