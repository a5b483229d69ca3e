//! Date-range resolution for the dashboard filters.
//!
//! Every data page expresses its time window as a [`RangeKey`] and turns it
//! into a concrete [`DateRange`] right before issuing a request. The remote
//! API takes plain `YYYY-MM-DD` strings, so the resolved range exposes its
//! endpoints in that form.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic time window selected in a filter dropdown, or a raw day count
/// coming from a numeric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeKey {
    Last7Days,
    Last30Days,
    Last90Days,
    Last6Months,
    LastYear,
    Days(i64),
}

impl RangeKey {
    /// Presets offered by the filter panels, in display order.
    pub const PRESETS: [RangeKey; 5] = [
        RangeKey::Last7Days,
        RangeKey::Last30Days,
        RangeKey::Last90Days,
        RangeKey::Last6Months,
        RangeKey::LastYear,
    ];

    /// Parse a filter value such as `"30days"` or a bare day count.
    ///
    /// Unknown keys silently fall back to the 7-day window. The surrounding
    /// UI only produces known values, so there is nothing actionable to
    /// surface for a bad one.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "7days" => RangeKey::Last7Days,
            "30days" => RangeKey::Last30Days,
            "90days" => RangeKey::Last90Days,
            "6months" => RangeKey::Last6Months,
            "1year" => RangeKey::LastYear,
            other => match other.parse::<i64>() {
                Ok(days) if days > 0 => RangeKey::Days(days),
                _ => RangeKey::Last7Days,
            },
        }
    }

    /// The filter value this key round-trips to.
    pub fn as_value(&self) -> String {
        match self {
            RangeKey::Last7Days => "7days".to_string(),
            RangeKey::Last30Days => "30days".to_string(),
            RangeKey::Last90Days => "90days".to_string(),
            RangeKey::Last6Months => "6months".to_string(),
            RangeKey::LastYear => "1year".to_string(),
            RangeKey::Days(n) => n.to_string(),
        }
    }

    /// Human-readable label for dropdowns.
    pub fn label(&self) -> String {
        match self {
            RangeKey::Last7Days => "Last 7 Days".to_string(),
            RangeKey::Last30Days => "Last 30 Days".to_string(),
            RangeKey::Last90Days => "Last 90 Days".to_string(),
            RangeKey::Last6Months => "Last 6 Months".to_string(),
            RangeKey::LastYear => "Last Year".to_string(),
            RangeKey::Days(n) => format!("Last {n} Days"),
        }
    }
}

impl Default for RangeKey {
    fn default() -> Self {
        RangeKey::Last7Days
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_value())
    }
}

/// A concrete calendar interval. Invariant: `start_date <= end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Build a range from two endpoints, swapping them if they arrive out of
    /// order (custom pickers let users choose the dates independently).
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start_date: a, end_date: b }
        } else {
            Self { start_date: b, end_date: a }
        }
    }

    pub fn start_iso(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }

    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Resolve a range key against an explicit "today".
///
/// Day presets subtract an exact day count; the month and year presets use
/// calendar arithmetic, clamping to the end of shorter months.
pub fn resolve_from(key: RangeKey, today: NaiveDate) -> DateRange {
    let start_date = match key {
        RangeKey::Last7Days => today - Duration::days(7),
        RangeKey::Last30Days => today - Duration::days(30),
        RangeKey::Last90Days => today - Duration::days(90),
        RangeKey::Days(n) => today - Duration::days(n.max(0)),
        RangeKey::Last6Months => today
            .checked_sub_months(Months::new(6))
            .unwrap_or(today - Duration::days(182)),
        RangeKey::LastYear => today
            .checked_sub_months(Months::new(12))
            .unwrap_or(today - Duration::days(365)),
    };
    DateRange { start_date, end_date: today }
}

/// Resolve a range key against the current local date.
pub fn resolve(key: RangeKey) -> DateRange {
    resolve_from(key, chrono::Local::now().date_naive())
}

/// Render an ISO `YYYY-MM-DD` string as a short axis label such as `Jun 5`.
/// Unparseable input is passed through untouched.
pub fn short_date_label(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn day_presets_subtract_exact_day_counts() {
        let today = date(2024, 3, 31);
        assert_eq!(
            resolve_from(RangeKey::Last7Days, today).start_iso(),
            "2024-03-24"
        );
        assert_eq!(
            resolve_from(RangeKey::Last30Days, today).start_iso(),
            "2024-03-01"
        );
        assert_eq!(resolve_from(RangeKey::Last90Days, today).span_days(), 90);
        assert_eq!(resolve_from(RangeKey::Days(14), today).span_days(), 14);
    }

    #[test]
    fn every_preset_keeps_start_before_end() {
        let today = date(2024, 2, 29);
        for key in RangeKey::PRESETS {
            let range = resolve_from(key, today);
            assert!(
                range.start_date <= range.end_date,
                "{key} produced an inverted range"
            );
            assert_eq!(range.end_date, today);
        }
    }

    #[test]
    fn month_presets_use_calendar_arithmetic() {
        // Dec 31 -> Jun 30: June is a day shorter, so the start clamps.
        let range = resolve_from(RangeKey::Last6Months, date(2023, 12, 31));
        assert_eq!(range.start_iso(), "2023-06-30");
        // The span stays within a day of the nominal half year.
        assert!((range.span_days() - 183).abs() <= 1);

        // Leap day minus one year clamps to Feb 28.
        let range = resolve_from(RangeKey::LastYear, date(2024, 2, 29));
        assert_eq!(range.start_iso(), "2023-02-28");
        assert!((range.span_days() - 365).abs() <= 2);
    }

    #[test]
    fn unknown_keys_fall_back_to_seven_days() {
        let today = date(2024, 3, 31);
        assert_eq!(
            resolve_from(RangeKey::parse("fortnight"), today),
            resolve_from(RangeKey::parse("7days"), today)
        );
        assert_eq!(RangeKey::parse(""), RangeKey::Last7Days);
        assert_eq!(RangeKey::parse("-3"), RangeKey::Last7Days);
    }

    #[test]
    fn numeric_values_parse_as_raw_day_counts() {
        assert_eq!(RangeKey::parse("45"), RangeKey::Days(45));
        assert_eq!(RangeKey::parse("90days"), RangeKey::Last90Days);
    }

    #[test]
    fn keys_round_trip_through_their_filter_value() {
        for key in RangeKey::PRESETS {
            assert_eq!(RangeKey::parse(&key.as_value()), key);
        }
        assert_eq!(RangeKey::parse(&RangeKey::Days(45).as_value()), RangeKey::Days(45));
    }

    #[test]
    fn ordered_swaps_inverted_endpoints() {
        let range = DateRange::ordered(date(2024, 5, 10), date(2024, 5, 1));
        assert_eq!(range.start_iso(), "2024-05-01");
        assert_eq!(range.end_iso(), "2024-05-10");
    }

    #[test]
    fn short_date_labels() {
        assert_eq!(short_date_label("2023-06-05"), "Jun 5");
        assert_eq!(short_date_label("2023-12-25"), "Dec 25");
        assert_eq!(short_date_label("recently"), "recently");
    }
}
