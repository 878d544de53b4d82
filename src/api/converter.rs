//! Wire formats of the two feeds and their conversion into state types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use serde_json::Value;

use crate::state::{NarrativeSummary, SourceKind, TradeAlert};

/// Narrative feed payload.
///
/// Every field is optional on the wire. Text fields accept any JSON scalar
/// because the feed has sent `growth` both as a string and as a number.
/// Numeric fields accept numbers and numeric strings; anything else reads as
/// zero. A `timestamp` that is not an RFC 3339 string is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NarrativePayload {
    pub narrative: Value,
    pub growth: Value,
    pub stage: Value,
    pub mentions: Value,
    pub summary: Value,
    pub capx_alignment: Value,
    pub timestamp: Value,
}

/// One element of the alerts feed payload.
///
/// Decoded as leniently as the narrative payload, so one odd field never
/// rejects the whole batch.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlertPayload {
    pub source: Value,
    pub timestamp: Value,
    pub wallet_name: Value,
    pub token: Value,
    pub narrative: Value,
    pub value_usd: Value,
    pub conviction: Value,
}

/// Converts feed payloads to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a narrative payload.
    pub fn convert_narrative(payload: NarrativePayload) -> NarrativeSummary {
        NarrativeSummary {
            name: Self::text(payload.narrative),
            growth_rate: Self::text(payload.growth),
            stage: Self::text(payload.stage),
            mention_count: Self::number(&payload.mentions)
                .filter(|m| *m > 0.0)
                .map(|m| m.trunc() as u64)
                .unwrap_or(0),
            summary_text: Self::text(payload.summary),
            alignment_score: Self::number(&payload.capx_alignment).unwrap_or(0.0),
            detected_at: payload.timestamp.as_str().and_then(Self::parse_timestamp),
        }
    }

    /// Convert one alert payload.
    pub fn convert_alert(payload: AlertPayload) -> TradeAlert {
        TradeAlert {
            timestamp: payload.timestamp.as_str().and_then(Self::parse_timestamp),
            source_kind: SourceKind::from_feed(&Self::text(payload.source)),
            wallet_label: Self::text(payload.wallet_name),
            token_symbol: Self::text(payload.token),
            narrative_tag: Self::text(payload.narrative),
            value_usd: Self::number(&payload.value_usd)
                .and_then(Decimal::from_f64)
                .unwrap_or(Decimal::ZERO),
            conviction: Self::text(payload.conviction),
        }
    }

    /// Convert the alerts payload, preserving feed order.
    pub fn convert_alerts(payload: Vec<AlertPayload>) -> Vec<TradeAlert> {
        payload.into_iter().map(Self::convert_alert).collect()
    }

    /// Parse an RFC 3339 timestamp, as produced by both backends.
    fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Read a finite number from a JSON number or numeric string.
    fn number(value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|n| n.is_finite())
    }

    /// Render a JSON scalar as display text. Missing and null become blank.
    fn text(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_narrative() {
        let payload: NarrativePayload = serde_json::from_str(
            r#"{
                "narrative": "AI Agents",
                "growth": "+201.5%",
                "mentions": 28,
                "stage": "Crowded Trade",
                "summary": "AI Agents-related discussions accelerating rapidly",
                "capx_alignment": 100,
                "timestamp": "2025-06-01T11:55:00.123456Z"
            }"#,
        )
        .unwrap();

        let summary = DataConverter::convert_narrative(payload);
        assert_eq!(summary.name, "AI Agents");
        assert_eq!(summary.growth_rate, "+201.5%");
        assert_eq!(summary.mention_count, 28);
        assert_eq!(summary.alignment_score, 100.0);
        assert_eq!(
            summary.detected_at.map(|d| d.timestamp()),
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 11, 55, 0).unwrap().timestamp())
        );
    }

    #[test]
    fn test_convert_narrative_missing_fields_are_blank() {
        let payload: NarrativePayload =
            serde_json::from_str(r#"{"narrative": "Restaking", "growth": 158.4}"#).unwrap();

        let summary = DataConverter::convert_narrative(payload);
        assert_eq!(summary.name, "Restaking");
        assert_eq!(summary.growth_rate, "158.4");
        assert_eq!(summary.stage, "");
        assert_eq!(summary.mention_count, 0);
        assert_eq!(summary.alignment_score, 0.0);
        assert_eq!(summary.detected_at, None);
    }

    #[test]
    fn test_convert_alerts_preserves_order() {
        let payload: Vec<AlertPayload> = serde_json::from_str(
            r#"[
                {"id": "t1", "source": "live", "timestamp": "2025-06-01T11:59:00Z",
                 "wallet_name": "Whale_0x7f3a", "token": "EIGEN", "narrative": "Restaking",
                 "value_usd": 48250.75, "conviction": "High", "tx_hash": "0xabc"},
                {"source": "simulated", "timestamp": "2025-06-01T11:58:00+02:00",
                 "wallet_name": "Degen_0x3f5C", "token": "ORDI", "narrative": "Bitcoin L2",
                 "value_usd": 1200, "conviction": "Low"}
            ]"#,
        )
        .unwrap();

        let alerts = DataConverter::convert_alerts(payload);
        assert_eq!(alerts.len(), 2);

        assert_eq!(alerts[0].wallet_label, "Whale_0x7f3a");
        assert_eq!(alerts[0].source_kind, SourceKind::Live);
        assert_eq!(alerts[0].value_usd, dec!(48250.75));
        assert_eq!(alerts[0].conviction, "High");

        assert_eq!(alerts[1].wallet_label, "Degen_0x3f5C");
        assert_eq!(alerts[1].source_kind, SourceKind::Demo);
        assert_eq!(
            alerts[1].timestamp,
            Some(Utc.with_ymd_and_hms(2025, 6, 1, 9, 58, 0).unwrap())
        );
    }

    #[test]
    fn test_convert_alert_with_bad_timestamp() {
        let payload: AlertPayload =
            serde_json::from_str(r#"{"timestamp": "yesterday", "conviction": "Medium"}"#)
                .unwrap();

        let alert = DataConverter::convert_alert(payload);
        assert_eq!(alert.timestamp, None);
        assert_eq!(alert.conviction, "Medium");
        assert_eq!(alert.value_usd, Decimal::ZERO);
    }

    #[test]
    fn test_convert_narrative_with_numeric_timestamp() {
        let payload: NarrativePayload = serde_json::from_str(
            r#"{"narrative": "AI Agents", "growth": "+201.5%", "mentions": 28,
                "stage": "Early", "summary": "s", "capx_alignment": 90,
                "timestamp": 1717243200}"#,
        )
        .unwrap();

        let summary = DataConverter::convert_narrative(payload);
        assert_eq!(summary.name, "AI Agents");
        assert_eq!(summary.alignment_score, 90.0);
        assert_eq!(summary.detected_at, None);
    }

    #[test]
    fn test_convert_alerts_with_non_string_scalars() {
        let payload: Vec<AlertPayload> = serde_json::from_str(
            r#"[
                {"source": "live", "timestamp": "2025-06-01T11:59:00Z",
                 "wallet_name": "Whale_0x7f3a", "token": "EIGEN", "narrative": "Restaking",
                 "value_usd": 100, "conviction": 3},
                {"source": true, "timestamp": 1717243200, "wallet_name": 42,
                 "token": false, "narrative": null, "conviction": false}
            ]"#,
        )
        .unwrap();

        let alerts = DataConverter::convert_alerts(payload);
        assert_eq!(alerts.len(), 2);

        assert_eq!(alerts[0].source_kind, SourceKind::Live);
        assert_eq!(alerts[0].conviction, "3");

        assert_eq!(alerts[1].source_kind, SourceKind::Demo);
        assert_eq!(alerts[1].timestamp, None);
        assert_eq!(alerts[1].wallet_label, "42");
        assert_eq!(alerts[1].token_symbol, "false");
        assert_eq!(alerts[1].narrative_tag, "");
        assert_eq!(alerts[1].conviction, "false");
    }

    #[test]
    fn test_convert_numeric_fields_from_strings_and_junk() {
        let narrative: NarrativePayload = serde_json::from_str(
            r#"{"narrative": "DePIN", "mentions": "1500", "capx_alignment": true}"#,
        )
        .unwrap();
        let summary = DataConverter::convert_narrative(narrative);
        assert_eq!(summary.mention_count, 1_500);
        assert_eq!(summary.alignment_score, 0.0);

        let alert: AlertPayload =
            serde_json::from_str(r#"{"value_usd": "1200.5", "conviction": "Low"}"#).unwrap();
        assert_eq!(DataConverter::convert_alert(alert).value_usd, dec!(1200.5));

        let alert: AlertPayload = serde_json::from_str(r#"{"value_usd": [1]}"#).unwrap();
        assert_eq!(DataConverter::convert_alert(alert).value_usd, Decimal::ZERO);
    }

    #[test]
    fn test_convert_alert_missing_conviction_is_blank() {
        let payload: AlertPayload = serde_json::from_str(r#"{"source": "live"}"#).unwrap();
        let alert = DataConverter::convert_alert(payload);
        assert_eq!(alert.conviction, "");
        assert_eq!(alert.timestamp, None);
    }
}
