//! State management for Alpha Radar.
//!
//! All panel contents live in a single [`Store`] owned by the UI loop. Feed
//! results reach it as [`Action`]s, and [`Store::reduce`] is the only place
//! that decides what each panel shows.

mod alert_state;
mod app_state;
mod narrative_state;

pub use alert_state::{AlertCard, AlertsGrid, Conviction, SourceKind, TradeAlert};
pub use app_state::AppState;
pub use narrative_state::{AlignmentBadge, NarrativePanel, NarrativeSummary, NarrativeView};

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Narrative feed
    NarrativeLoaded(NarrativeView),
    NarrativeFailed(String),

    // Alerts feed
    AlertsLoaded(Vec<AlertCard>),
    AlertsFailed(String),

    // Data refresh
    RefreshAll,

    // UI actions
    ToggleHelp,
    Tick,

    // Quit
    Quit,
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Narrative panel.
    pub narrative: NarrativePanel,
    /// Alerts grid.
    pub alerts: AlertsGrid,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store with both panels loading.
    pub fn new() -> Self {
        Self {
            app: AppState::new(),
            narrative: NarrativePanel::default(),
            alerts: AlertsGrid::default(),
        }
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::NarrativeLoaded(view) => {
                self.narrative = NarrativePanel::Ready(view);
                self.app.last_narrative_update = Some(chrono::Utc::now());
            }
            // The narrative panel never keeps stale content.
            Action::NarrativeFailed(message) => {
                self.narrative = NarrativePanel::Failed(message);
            }

            Action::AlertsLoaded(cards) => {
                self.alerts = AlertsGrid::Ready(cards);
                self.app.last_alerts_update = Some(chrono::Utc::now());
            }
            // Once cards are on screen a failed fetch leaves them there.
            Action::AlertsFailed(message) => {
                if self.alerts.is_blank() {
                    self.alerts = AlertsGrid::Failed(message);
                } else {
                    tracing::debug!("keeping {} stale alert cards", self.alerts.cards().len());
                }
            }

            // The app loop forwards refreshes to the poller.
            Action::RefreshAll => {}

            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::Tick => self.app.advance_frame(),

            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        Store::new()
    }

    fn view(name: &str) -> NarrativeView {
        NarrativeView {
            name: name.to_string(),
            growth: "+158.4%".to_string(),
            stage_label: "Stage: Crowded Trade".to_string(),
            mentions: "34".to_string(),
            summary: format!("{name}-related discussions accelerating rapidly"),
            badge: Some(AlignmentBadge::PartialMatch),
            detected: None,
        }
    }

    fn card(wallet: &str) -> AlertCard {
        AlertCard {
            time_ago: "3m ago".to_string(),
            live: false,
            wallet: wallet.to_string(),
            token: "RNDR".to_string(),
            narrative: "AI Agents".to_string(),
            value: "$12,000".to_string(),
            conviction: "Medium".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let store = store();
        assert!(store.narrative.is_loading());
        assert!(store.alerts.is_loading());
        assert!(!store.app.should_quit);
    }

    #[test]
    fn test_narrative_failure_always_replaces() {
        let mut store = store();
        store.reduce(Action::NarrativeLoaded(view("Restaking")));
        assert_eq!(store.narrative.view().map(|v| v.name.as_str()), Some("Restaking"));

        store.reduce(Action::NarrativeFailed("Connection Error: Retrying...".to_string()));
        assert_eq!(
            store.narrative,
            NarrativePanel::Failed("Connection Error: Retrying...".to_string())
        );

        store.reduce(Action::NarrativeLoaded(view("AI Agents")));
        assert_eq!(store.narrative.view().map(|v| v.name.as_str()), Some("AI Agents"));
    }

    #[test]
    fn test_alerts_failure_on_loading_grid_shows_error() {
        let mut store = store();
        store.reduce(Action::AlertsFailed("down".to_string()));
        assert_eq!(store.alerts, AlertsGrid::Failed("down".to_string()));
    }

    #[test]
    fn test_alerts_failure_on_empty_grid_shows_error() {
        let mut store = store();
        store.reduce(Action::AlertsLoaded(Vec::new()));
        store.reduce(Action::AlertsFailed("down".to_string()));
        assert_eq!(store.alerts, AlertsGrid::Failed("down".to_string()));
    }

    #[test]
    fn test_alerts_failure_keeps_populated_grid() {
        let mut store = store();
        let cards = vec![card("Whale_0x7f3a"), card("Smart_0x28C6")];
        store.reduce(Action::AlertsLoaded(cards.clone()));

        store.reduce(Action::AlertsFailed("down".to_string()));
        store.reduce(Action::AlertsFailed("still down".to_string()));

        assert_eq!(store.alerts, AlertsGrid::Ready(cards));
    }

    #[test]
    fn test_alerts_recover_after_error() {
        let mut store = store();
        store.reduce(Action::AlertsFailed("down".to_string()));
        store.reduce(Action::AlertsLoaded(vec![card("Whale_0x7f3a")]));
        assert_eq!(store.alerts.cards().len(), 1);
        assert!(store.app.last_alerts_update.is_some());
    }

    #[test]
    fn test_alerts_reload_is_idempotent() {
        let mut store = store();
        let cards = vec![card("a"), card("b"), card("c")];

        store.reduce(Action::AlertsLoaded(cards.clone()));
        let first = store.alerts.clone();
        store.reduce(Action::AlertsLoaded(cards));

        assert_eq!(store.alerts, first);
        assert_eq!(store.alerts.cards().len(), 3);
    }

    #[test]
    fn test_ui_actions() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        assert!(store.app.show_help);
        store.reduce(Action::ToggleHelp);
        assert!(!store.app.show_help);

        store.reduce(Action::Tick);
        assert_eq!(store.app.frame, 1);

        store.reduce(Action::RefreshAll);
        assert!(store.alerts.is_loading());

        store.reduce(Action::Quit);
        assert!(store.app.should_quit);
    }
}
