//! Trade alert feed state.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::format;

/// Where a trade alert came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Observed on-chain.
    Live,
    /// Simulated/demo activity.
    #[default]
    Demo,
}

impl SourceKind {
    /// Parse the feed's `source` field. Only `"live"` is live.
    pub fn from_feed(value: &str) -> Self {
        if value == "live" { Self::Live } else { Self::Demo }
    }
}

/// Conviction tier of a trade alert, used to pick the badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conviction {
    Low,
    Medium,
    High,
}

impl Conviction {
    /// Parse the feed's `conviction` text. Anything else has no tier.
    pub fn from_feed(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

/// A single smart-money trade reported by the alerts feed.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeAlert {
    /// Parsed trade time.
    pub timestamp: Option<DateTime<Utc>>,
    pub source_kind: SourceKind,
    pub wallet_label: String,
    pub token_symbol: String,
    pub narrative_tag: String,
    pub value_usd: Decimal,
    /// Conviction text as sent by the feed.
    pub conviction: String,
}

/// Display strings for one alert card.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertCard {
    pub time_ago: String,
    /// Whether to show the LIVE marker.
    pub live: bool,
    pub wallet: String,
    pub token: String,
    pub narrative: String,
    pub value: String,
    pub conviction: String,
}

impl AlertCard {
    /// Label shown when a trade timestamp cannot be parsed.
    pub const UNKNOWN_TIME: &'static str = "unknown";

    /// Marker text for live trades.
    pub const LIVE_MARKER: &'static str = "🔴 LIVE";

    /// Project an alert into display strings, relative to `now`.
    pub fn from_alert(alert: &TradeAlert, now: DateTime<Utc>) -> Self {
        Self {
            time_ago: alert
                .timestamp
                .map(|ts| format::time_ago(ts, now))
                .unwrap_or_else(|| Self::UNKNOWN_TIME.to_string()),
            live: alert.source_kind == SourceKind::Live,
            wallet: alert.wallet_label.clone(),
            token: alert.token_symbol.clone(),
            narrative: alert.narrative_tag.clone(),
            value: format::format_currency(alert.value_usd),
            conviction: alert.conviction.clone(),
        }
    }

    /// Tier for the conviction badge colour, if the text names one.
    pub fn conviction_tier(&self) -> Option<Conviction> {
        Conviction::from_feed(&self.conviction)
    }

    /// Source marker, shown only for live trades.
    pub fn source_marker(&self) -> Option<&'static str> {
        self.live.then_some(Self::LIVE_MARKER)
    }
}

/// What the alerts grid is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AlertsGrid {
    /// Initial placeholder.
    #[default]
    Loading,
    /// Cards from the latest successful fetch, in feed order.
    Ready(Vec<AlertCard>),
    Failed(String),
}

impl AlertsGrid {
    /// Whether the grid has nothing worth keeping on screen: the loading
    /// placeholder, an empty list, or an error.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Loading | Self::Failed(_) => true,
            Self::Ready(cards) => cards.is_empty(),
        }
    }

    /// Whether the grid is still showing its loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Rendered cards, empty unless ready.
    pub fn cards(&self) -> &[AlertCard] {
        match self {
            Self::Ready(cards) => cards,
            _ => &[],
        }
    }
}
