//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, rendering, and the feed poller.

use crate::api::FeedClient;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::poller::{ActionDispatcher, DashboardPoller, PollerHandle};
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Feed poller.
    poller: Arc<DashboardPoller>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        let feed_client = FeedClient::new(config.feeds.clone())?;
        tracing::info!(
            narrative = feed_client.narrative_url(),
            alerts = feed_client.alerts_url(),
            "feed endpoints"
        );

        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let poller = Arc::new(DashboardPoller::new(
            Arc::new(feed_client),
            Arc::new(ActionDispatcher::new(action_tx)),
            config.polling.interval(),
        ));

        let store = Store::new();
        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            poller,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(
            interval_ms = self.poller.interval().as_millis() as u64,
            "polling feeds"
        );
        let poller = Arc::clone(&self.poller).start();

        // Main event loop
        loop {
            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &self.config);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action, &poller);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action, &poller);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        poller.stop();
        tracing::info!("shutting down");
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action, poller: &PollerHandle) {
        if matches!(action, Action::RefreshAll) {
            poller.refresh();
        }
        self.store.reduce(action);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
