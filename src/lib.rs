//! # Alpha Radar
//!
//! A terminal dashboard that polls two JSON feeds, a trending crypto
//! narrative and a stream of smart-money trade alerts, and renders them with
//! ratatui.
//!
//! ## Architecture
//!
//! - **App**: Terminal lifecycle and the main event loop
//! - **Poller**: Fixed-interval fetching of both feeds
//! - **API**: HTTP feed client and payload conversion
//! - **Format**: Time-ago, currency and count formatting
//! - **State**: Centralized state management
//! - **UI**: Layout and rendering logic
//! - **Events**: Input handling
//! - **Config**: Configuration management

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod format;
pub mod poller;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{Error, Result};
pub use poller::{DashboardPoller, DashboardView, PollerHandle};
