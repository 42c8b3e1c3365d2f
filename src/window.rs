//! Time-window gate for matched timestamps
//!
//! A window is written as `Mon.D.Time-Mon.D.Time`, for example
//! `Jun.4.07:25:59-Jun.5.15:18:00`. Bounds are inclusive and compared
//! component-wise as plain strings:
//!
//! - the month must equal the bound's month exactly,
//! - the day and time are compared lexicographically (`"10" < "4"`).
//!
//! There is no calendar arithmetic. A window whose start and end months
//! differ can never match, since a timestamp would have to carry both months
//! at once. This is a known limitation and is kept as is.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a time window
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeWindowError {
    #[error("expected 'Mon.D.Time-Mon.D.Time', got '{0}'")]
    MissingSeparator(String),

    #[error("bound '{0}' must have exactly three '.'-separated parts (Mon.D.Time)")]
    InvalidBound(String),
}

/// One bound of a time window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePoint {
    pub month: String,
    pub day: String,
    pub time: String,
}

impl TimePoint {
    /// Split a raw log timestamp (`"Jun  4 07:25:59"`) into its components.
    ///
    /// Double spaces are collapsed first so single-digit days padded by
    /// syslog line up. Returns `None` for timestamps with fewer than three
    /// components.
    pub fn from_timestamp(timestamp: &str) -> Option<Self> {
        let collapsed = timestamp.replace("  ", " ");
        let mut parts = collapsed.split(' ');
        let month = parts.next()?;
        let day = parts.next()?;
        let time = parts.next()?;

        Some(TimePoint {
            month: month.to_string(),
            day: day.to_string(),
            time: time.to_string(),
        })
    }

    fn is_at_or_after(&self, start: &TimePoint) -> bool {
        self.month == start.month
            && (self.day > start.day || (self.day == start.day && self.time >= start.time))
    }

    fn is_at_or_before(&self, end: &TimePoint) -> bool {
        self.month == end.month
            && (self.day < end.day || (self.day == end.day && self.time <= end.time))
    }
}

impl FromStr for TimePoint {
    type Err = TimeWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [month, day, time] if !month.is_empty() && !day.is_empty() && !time.is_empty() => {
                Ok(TimePoint {
                    month: month.to_string(),
                    day: day.to_string(),
                    time: time.to_string(),
                })
            }
            _ => Err(TimeWindowError::InvalidBound(s.to_string())),
        }
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.month, self.day, self.time)
    }
}

/// Inclusive `start..=end` window over log timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl TimeWindow {
    /// Check whether a raw log timestamp falls inside the window
    pub fn contains(&self, timestamp: &str) -> bool {
        match TimePoint::from_timestamp(timestamp) {
            Some(point) => point.is_at_or_after(&self.start) && point.is_at_or_before(&self.end),
            None => false,
        }
    }

    /// Whether the window spans two different months and therefore rejects
    /// every timestamp
    pub fn is_cross_month(&self) -> bool {
        self.start.month != self.end.month
    }
}

impl FromStr for TimeWindow {
    type Err = TimeWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| TimeWindowError::MissingSeparator(s.to_string()))?;

        Ok(TimeWindow {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(s: &str) -> TimeWindow {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_window() {
        let w = window("Jun.4.07:25:59-Jun.5.15:18:00");
        assert_eq!(w.start.month, "Jun");
        assert_eq!(w.start.day, "4");
        assert_eq!(w.start.time, "07:25:59");
        assert_eq!(w.end.day, "5");
        assert_eq!(w.end.time, "15:18:00");
        assert_eq!(w.to_string(), "Jun.4.07:25:59-Jun.5.15:18:00");
    }

    #[test]
    fn test_parse_rejects_malformed_windows() {
        assert_eq!(
            "Jun.4.07:25:59".parse::<TimeWindow>(),
            Err(TimeWindowError::MissingSeparator(
                "Jun.4.07:25:59".to_string()
            ))
        );
        assert_eq!(
            "Jun.4-Jun.5.15:18:00".parse::<TimeWindow>(),
            Err(TimeWindowError::InvalidBound("Jun.4".to_string()))
        );
        assert!("Jun.4.07:00:00-Jun.5.08:00:00.1".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn test_window_splits_at_first_dash_only() {
        let w = window("Jun.4.07:00:00-Jun.4.08:00:00-extra");
        assert_eq!(w.end.time, "08:00:00-extra");
        assert!(w.contains("Jun 4 07:30:00"));
    }

    #[test]
    fn test_timestamp_collapses_double_space() {
        let point = TimePoint::from_timestamp("Jun  4 07:25:59").unwrap();
        assert_eq!(point.month, "Jun");
        assert_eq!(point.day, "4");
        assert_eq!(point.time, "07:25:59");
    }

    #[test]
    fn test_timestamp_with_too_few_components_is_excluded() {
        let w = window("Jun.4.07:00:00-Jun.4.08:00:00");
        assert!(TimePoint::from_timestamp("07:30:00").is_none());
        assert!(!w.contains("Jun 07:30:00"));
    }

    #[test]
    fn test_same_day_window() {
        let w = window("Jun.4.07:00:00-Jun.4.08:00:00");
        assert!(w.contains("Jun 4 07:30:00"));
        assert!(w.contains("Jun 4 07:00:00"));
        assert!(w.contains("Jun 4 08:00:00"));
        assert!(!w.contains("Jun 4 06:59:59"));
        assert!(!w.contains("Jun 4 08:00:01"));
        assert!(!w.contains("Jun 5 07:30:00"));
        assert!(!w.contains("Jul 4 07:30:00"));
    }

    #[test]
    fn test_multi_day_window_within_month() {
        let w = window("Jun.4.07:25:59-Jun.6.15:18:00");
        assert!(w.contains("Jun 5 00:00:00"));
        assert!(w.contains("Jun 4 23:00:00"));
        assert!(w.contains("Jun 6 01:00:00"));
        assert!(!w.contains("Jun 6 15:18:01"));
        assert!(!w.contains("Jun 3 12:00:00"));
    }

    #[test]
    fn test_day_comparison_is_lexicographic() {
        // "10" sorts before "4", so day 10 falls before a window starting on day 4
        let w = window("Jun.4.00:00:00-Jun.9.23:59:59");
        assert!(!w.contains("Jun 10 12:00:00"));
        assert!(w.contains("Jun 5 12:00:00"));
    }

    #[test]
    fn test_cross_month_window_never_matches() {
        let w = window("Jun.30.00:00:00-Jul.1.23:59:59");
        assert!(w.is_cross_month());
        assert!(!w.contains("Jun 30 12:00:00"));
        assert!(!w.contains("Jul 1 12:00:00"));
    }
}
