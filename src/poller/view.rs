//! View binding between the poller and whatever displays its results.

use tokio::sync::mpsc;

use crate::state::{Action, AlertCard, NarrativeView};

#[cfg(test)]
use mockall::automock;

/// Named update operations the poller performs on the dashboard.
#[cfg_attr(test, automock)]
pub trait DashboardView: Send + Sync {
    /// A narrative response was received and formatted.
    fn narrative_loaded(&self, view: NarrativeView);

    /// The narrative fetch failed.
    fn narrative_failed(&self, message: String);

    /// An alerts response was received; `cards` replaces the whole grid.
    fn alerts_loaded(&self, cards: Vec<AlertCard>);

    /// The alerts fetch failed.
    fn alerts_failed(&self, message: String);
}

/// Forwards view updates to the UI loop as [`Action`]s.
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl ActionDispatcher {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }

    fn send(&self, action: Action) {
        // The UI loop is gone during shutdown; nothing left to update.
        if self.action_tx.send(action).is_err() {
            tracing::debug!("dropping feed update, UI loop has exited");
        }
    }
}

impl DashboardView for ActionDispatcher {
    fn narrative_loaded(&self, view: NarrativeView) {
        self.send(Action::NarrativeLoaded(view));
    }

    fn narrative_failed(&self, message: String) {
        self.send(Action::NarrativeFailed(message));
    }

    fn alerts_loaded(&self, cards: Vec<AlertCard>) {
        self.send(Action::AlertsLoaded(cards));
    }

    fn alerts_failed(&self, message: String) {
        self.send(Action::AlertsFailed(message));
    }
}
