//! Repeating fetch-and-replace feed over the scoring backend
//!
//! Each feed owns one tokio task that fetches the team collection at a fixed
//! cadence and publishes every successful result through a watch channel.
//! Consumers always observe a complete snapshot; a failed cycle keeps the
//! previous snapshot in place and the dashboard shows stale-but-valid data
//! until the next successful poll.

use crate::client::ScoreClient;
use crate::errors::{FeedError, Result};
use crate::models::Snapshot;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Handle to a running polling feed.
///
/// Dropping the handle does not stop the feed's task; call [`FeedHandle::stop`]
/// to terminate it. For the common dashboard case the feed simply runs for
/// the process lifetime.
pub struct FeedHandle {
    feed_id: String,
    receiver: watch::Receiver<Arc<Snapshot>>,
    cycles: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

pub struct PollingFeed;

impl PollingFeed {
    /// Start polling `path` at a fixed `poll_interval`.
    ///
    /// The first fetch is issued immediately. Cycles are serialized within
    /// the feed's task: a fetch that overruns the interval delays the next
    /// tick rather than racing it, and its result is still applied once it
    /// completes, unless the feed has been stopped in the meantime.
    pub fn start(
        client: ScoreClient,
        path: String,
        poll_interval: Duration,
    ) -> Result<FeedHandle> {
        if path.is_empty() {
            return Err(FeedError::Config("feed path cannot be empty".to_string()));
        }
        if poll_interval.is_zero() {
            return Err(FeedError::Config(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        let feed_id = Uuid::new_v4().to_string();
        let (sender, receiver) = watch::channel(Arc::new(Snapshot::empty()));
        let cycles = Arc::new(AtomicU64::new(0));

        info!(
            feed_id = %feed_id,
            path = %path,
            interval_ms = poll_interval.as_millis() as u64,
            "Starting polling feed"
        );

        let task = tokio::spawn(Self::run(
            client,
            path,
            poll_interval,
            sender,
            feed_id.clone(),
            Arc::clone(&cycles),
        ));

        Ok(FeedHandle {
            feed_id,
            receiver,
            cycles,
            task,
        })
    }

    async fn run(
        client: ScoreClient,
        path: String,
        poll_interval: Duration,
        sender: watch::Sender<Arc<Snapshot>>,
        feed_id: String,
        cycles: Arc<AtomicU64>,
    ) {
        let mut ticker = interval(poll_interval);

        loop {
            // First tick completes immediately; later ticks hold the cadence.
            ticker.tick().await;
            cycles.fetch_add(1, Ordering::Relaxed);

            match client.fetch_teams(&path).await {
                Ok(teams) => {
                    let snapshot = Arc::new(Snapshot::new(teams));
                    debug!(
                        feed_id = %feed_id,
                        teams = snapshot.len(),
                        "Applied new snapshot"
                    );
                    sender.send_replace(snapshot);
                }
                Err(e) => {
                    warn!(
                        feed_id = %feed_id,
                        error = %e,
                        "Poll cycle failed, retaining previous snapshot"
                    );
                }
            }
        }
    }
}

impl FeedHandle {
    pub fn feed_id(&self) -> &str {
        &self.feed_id
    }

    /// Latest successfully fetched snapshot; empty before the first success.
    pub fn latest(&self) -> Arc<Snapshot> {
        self.receiver.borrow().clone()
    }

    /// Receiver notified on every applied snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.receiver.clone()
    }

    /// Number of fetch attempts issued so far, successful or not.
    pub fn cycles(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }

    /// Stop the feed. Idempotent; no fetch is issued after this returns and
    /// an in-flight fetch's result is discarded rather than applied.
    pub fn stop(&self) {
        self.task.abort();
        debug!(feed_id = %self.feed_id, "Polling feed stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ScoreClient {
        // Points at a closed port; fetches fail, which the feed absorbs.
        ScoreClient::new("http://127.0.0.1:9".to_string(), Duration::from_millis(50)).unwrap()
    }

    #[tokio::test]
    async fn test_start_rejects_empty_path() {
        let result = PollingFeed::start(test_client(), String::new(), Duration::from_secs(5));
        assert!(matches!(result, Err(FeedError::Config(_))));
    }

    #[tokio::test]
    async fn test_start_rejects_zero_interval() {
        let result = PollingFeed::start(test_client(), "/teams/scores".to_string(), Duration::ZERO);
        assert!(matches!(result, Err(FeedError::Config(_))));
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_empty() {
        let feed = PollingFeed::start(
            test_client(),
            "/teams/scores".to_string(),
            Duration::from_secs(60),
        )
        .unwrap();

        assert!(feed.latest().is_empty());
        feed.stop();
    }

    #[tokio::test]
    async fn test_failed_cycles_retain_previous_snapshot() {
        let feed = PollingFeed::start(
            test_client(),
            "/teams/scores".to_string(),
            Duration::from_millis(10),
        )
        .unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        // Several cycles ran against a dead endpoint; the feed kept its
        // last-good (initial, empty) value instead of crashing or blanking.
        assert!(feed.cycles() >= 1);
        assert!(feed.latest().is_empty());
        feed.stop();
    }

    #[tokio::test]
    async fn test_stop_is_idempotent_and_halts_fetching() {
        let feed = PollingFeed::start(
            test_client(),
            "/teams/scores".to_string(),
            Duration::from_millis(10),
        )
        .unwrap();

        feed.stop();
        feed.stop();

        tokio::time::sleep(Duration::from_millis(50)).await;
        let cycles_after_stop = feed.cycles();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(feed.cycles(), cycles_after_stop);
    }
}
