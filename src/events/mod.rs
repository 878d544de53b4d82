//! Event handling for Alpha Radar.
//!
//! Terminal input is translated into [`Action`](crate::state::Action)s; the
//! poll timeout doubles as the UI tick that drives loading animations.

mod handler;

pub use handler::EventHandler;
