//! Narrative feed state.

use chrono::{DateTime, Utc};

use crate::format;

/// The currently trending narrative, as reported by the narrative feed.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeSummary {
    /// Narrative name (e.g. "AI Agents").
    pub name: String,
    /// Growth rate as reported, e.g. "+201.5%".
    pub growth_rate: String,
    /// Lifecycle stage, e.g. "Crowded Trade".
    pub stage: String,
    /// Mentions in the sampling window.
    pub mention_count: u64,
    /// One-line summary.
    pub summary_text: String,
    /// Alignment with the Capx taxonomy, 0-100.
    pub alignment_score: f64,
    /// When the feed detected this narrative, if reported.
    pub detected_at: Option<DateTime<Utc>>,
}

/// Badge shown next to the narrative name based on its alignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentBadge {
    Aligned,
    PartialMatch,
}

impl AlignmentBadge {
    /// Score at or above which a narrative counts as aligned.
    pub const ALIGNED_THRESHOLD: f64 = 80.0;
    /// Score at or above which a narrative counts as a partial match.
    pub const PARTIAL_THRESHOLD: f64 = 50.0;

    /// Classify an alignment score. Scores below 50 (and NaN) get no badge.
    pub fn classify(score: f64) -> Option<Self> {
        if score >= Self::ALIGNED_THRESHOLD {
            Some(Self::Aligned)
        } else if score >= Self::PARTIAL_THRESHOLD {
            Some(Self::PartialMatch)
        } else {
            None
        }
    }

    /// Badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aligned => "🎯 Capx Aligned",
            Self::PartialMatch => "⚡ Partial Match",
        }
    }
}

/// Display strings for the narrative panel.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeView {
    pub name: String,
    pub growth: String,
    pub stage_label: String,
    pub mentions: String,
    pub summary: String,
    pub badge: Option<AlignmentBadge>,
    /// Time-ago label for `detected_at`.
    pub detected: Option<String>,
}

impl NarrativeView {
    /// Project a summary into display strings, relative to `now`.
    pub fn from_summary(summary: &NarrativeSummary, now: DateTime<Utc>) -> Self {
        Self {
            name: summary.name.clone(),
            growth: summary.growth_rate.clone(),
            stage_label: format!("Stage: {}", summary.stage),
            mentions: format::group_thousands(summary.mention_count),
            summary: summary.summary_text.clone(),
            badge: AlignmentBadge::classify(summary.alignment_score),
            detected: summary.detected_at.map(|at| format::time_ago(at, now)),
        }
    }
}

/// What the narrative panel is currently showing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum NarrativePanel {
    #[default]
    Loading,
    Ready(NarrativeView),
    Failed(String),
}

impl NarrativePanel {
    /// Whether the panel is still waiting for its first response.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The rendered view, if any.
    pub fn view(&self) -> Option<&NarrativeView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn summary(score: f64) -> NarrativeSummary {
        NarrativeSummary {
            name: "AI Agents".to_string(),
            growth_rate: "+201.5%".to_string(),
            stage: "Crowded Trade".to_string(),
            mention_count: 12_840,
            summary_text: "AI Agents-related discussions accelerating rapidly".to_string(),
            alignment_score: score,
            detected_at: None,
        }
    }

    #[test]
    fn test_badge_tiers() {
        assert_eq!(AlignmentBadge::classify(100.0), Some(AlignmentBadge::Aligned));
        assert_eq!(AlignmentBadge::classify(80.0), Some(AlignmentBadge::Aligned));
        assert_eq!(
            AlignmentBadge::classify(79.9),
            Some(AlignmentBadge::PartialMatch)
        );
        assert_eq!(
            AlignmentBadge::classify(50.0),
            Some(AlignmentBadge::PartialMatch)
        );
        assert_eq!(AlignmentBadge::classify(49.99), None);
        assert_eq!(AlignmentBadge::classify(0.0), None);
        assert_eq!(AlignmentBadge::classify(f64::NAN), None);
    }

    #[test]
    fn test_view_from_summary() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let view = NarrativeView::from_summary(&summary(70.0), now);

        assert_eq!(view.name, "AI Agents");
        assert_eq!(view.growth, "+201.5%");
        assert_eq!(view.stage_label, "Stage: Crowded Trade");
        assert_eq!(view.mentions, "12,840");
        assert_eq!(view.badge, Some(AlignmentBadge::PartialMatch));
        assert_eq!(view.detected, None);
    }

    #[test]
    fn test_view_detected_label() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut s = summary(100.0);
        s.detected_at = Some(now - chrono::Duration::minutes(5));

        let view = NarrativeView::from_summary(&s, now);
        assert_eq!(view.detected.as_deref(), Some("5m ago"));
        assert_eq!(view.badge.map(|b| b.label()), Some("🎯 Capx Aligned"));
    }
}
