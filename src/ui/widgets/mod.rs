//! TUI widgets.

mod alerts_grid;
mod help;
mod narrative_panel;
mod status_bar;

pub use alerts_grid::{AlertsGrid, conviction_style};
pub use help::HelpPanel;
pub use narrative_panel::NarrativePanel;
pub use status_bar::StatusBar;
