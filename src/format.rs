//! Display formatting for feed values.
//!
//! These are pure functions so the dashboard's text can be checked without a
//! terminal.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const YEAR_SECS: i64 = 31_536_000;
const MONTH_SECS: i64 = 2_592_000;
const DAY_SECS: i64 = 86_400;
const HOUR_SECS: i64 = 3_600;
const MINUTE_SECS: i64 = 60;

/// Units checked largest first. A unit applies only once the elapsed time is
/// strictly greater than one whole unit.
const UNITS: [(i64, &str); 5] = [
    (YEAR_SECS, "y"),
    (MONTH_SECS, "mo"),
    (DAY_SECS, "d"),
    (HOUR_SECS, "h"),
    (MINUTE_SECS, "m"),
];

/// Format how long ago `then` was relative to `now`.
///
/// Exactly one unit does not qualify for that unit, so 3600 seconds renders
/// as `"60m ago"` and 60 seconds as `"60s ago"`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_milliseconds().div_euclid(1000);

    for (unit, suffix) in UNITS {
        if seconds > unit {
            return format!("{}{} ago", seconds / unit, suffix);
        }
    }

    if seconds < 10 {
        return "Just now".to_string();
    }

    format!("{}s ago", seconds)
}

/// Format a USD amount with no decimal places, e.g. `1234.56` -> `"$1,235"`.
///
/// Halves round away from zero. Any value below zero keeps its sign, so
/// `-0.4` renders as `"-$0"`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.abs().to_u128().unwrap_or_default();
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, group_digits(&whole.to_string()))
}

/// Group an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
