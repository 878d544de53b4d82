//! Feed polling.
//!
//! [`DashboardPoller`] fetches both feeds, turns the responses into display
//! strings and hands them to a [`DashboardView`]. [`DashboardPoller::start`]
//! runs it on a fixed interval until the returned [`PollerHandle`] is stopped.
//!
//! Each tick spawns the two loads as independent tasks. A slow response can
//! still be in flight when the next tick fires; requests are neither
//! deduplicated nor cancelled.

mod view;

pub use view::{ActionDispatcher, DashboardView};

#[cfg(test)]
pub use view::MockDashboardView;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::api::FeedSource;
use crate::state::{AlertCard, NarrativeView};

/// Message shown in the narrative panel after a failed fetch.
pub const NARRATIVE_ERROR: &str = "Connection Error: Retrying...";

/// Message shown in an empty alerts grid after a failed fetch.
pub const ALERTS_ERROR: &str = "Connection Error: Unable to fetch live trades";

/// Polls the narrative and alerts feeds and updates the view.
pub struct DashboardPoller {
    source: Arc<dyn FeedSource>,
    view: Arc<dyn DashboardView>,
    interval: Duration,
}

impl DashboardPoller {
    /// Create a poller over `source` that reports to `view` every `interval`.
    pub fn new(
        source: Arc<dyn FeedSource>,
        view: Arc<dyn DashboardView>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            view,
            interval,
        }
    }

    /// Tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the narrative feed and update the narrative panel.
    ///
    /// Failures are logged and shown in the panel; they never propagate.
    pub async fn load_narrative(&self) {
        match self.source.fetch_narrative().await {
            Ok(summary) => {
                tracing::debug!(narrative = %summary.name, "narrative loaded");
                self.view
                    .narrative_loaded(NarrativeView::from_summary(&summary, Utc::now()));
            }
            Err(e) => {
                tracing::warn!(feed = "narrative", error = %e, "error fetching narrative");
                self.view.narrative_failed(NARRATIVE_ERROR.to_string());
            }
        }
    }

    /// Fetch the alerts feed and rebuild the alerts grid.
    ///
    /// Failures are logged and reported to the view, which decides whether
    /// stale cards stay on screen.
    pub async fn load_alerts(&self) {
        match self.source.fetch_alerts().await {
            Ok(alerts) => {
                tracing::debug!(count = alerts.len(), "alerts loaded");
                let now = Utc::now();
                let cards = alerts
                    .iter()
                    .map(|alert| AlertCard::from_alert(alert, now))
                    .collect();
                self.view.alerts_loaded(cards);
            }
            Err(e) => {
                tracing::warn!(feed = "alerts", error = %e, "error fetching alerts");
                self.view.alerts_failed(ALERTS_ERROR.to_string());
            }
        }
    }

    /// Load both feeds concurrently and wait for both to finish.
    pub async fn load_all(&self) {
        futures::join!(self.load_narrative(), self.load_alerts());
    }

    /// Spawn one tick: both loads as independent tasks.
    pub fn spawn_tick(self: &Arc<Self>) {
        let poller = Arc::clone(self);
        tokio::spawn(async move { poller.load_narrative().await });

        let poller = Arc::clone(self);
        tokio::spawn(async move { poller.load_alerts().await });
    }

    /// Run one tick immediately, then one every interval, until the handle
    /// is stopped or dropped.
    pub fn start(self: Arc<Self>) -> PollerHandle {
        let poller = Arc::clone(&self);
        let interval = self.interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                tracing::trace!("poll tick");
                poller.spawn_tick();
            }
        });

        tracing::info!(interval_ms = interval.as_millis() as u64, "poller started");
        PollerHandle { poller: self, task }
    }
}

/// Handle to a running poller.
pub struct PollerHandle {
    poller: Arc<DashboardPoller>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Run an extra tick right now without disturbing the schedule.
    pub fn refresh(&self) {
        tracing::debug!("manual refresh");
        self.poller.spawn_tick();
    }

    /// Stop scheduling ticks. Loads already in flight still complete.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether ticks are still being scheduled.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
