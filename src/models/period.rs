//! Budget period resolution
//!
//! A [`Period`] is derived from "now" and a [`PeriodKind`]; it is never
//! persisted. Weeks start on Sunday and months on the 1st. Boundaries are
//! start-inclusive and end-exclusive, so an instant exactly on a boundary
//! belongs to the period it starts.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PaceError, PaceResult};

/// How long a budget period lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    /// Sunday through Saturday
    Weekly,
    /// The calendar month
    #[default]
    Monthly,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for PeriodKind {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            _ => Err(PeriodParseError::InvalidKind(s.to_string())),
        }
    }
}

/// A half-open `[start, end)` range of wall-clock timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Check if a timestamp falls within this range
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }
}

/// A resolved budget period with its day counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub kind: PeriodKind,
    /// Midnight of the first day (inclusive)
    pub start: NaiveDateTime,
    /// Midnight of the first day of the next period (exclusive)
    pub end: NaiveDateTime,
    /// The calendar day "now" falls on
    pub today: NaiveDate,
    pub days_elapsed: u32,
    pub days_total: u32,
    pub days_remaining: u32,
    pub weekday_days_total: u32,
    pub weekend_days_total: u32,
    pub weekday_days_elapsed: u32,
    pub weekend_days_elapsed: u32,
    pub weekday_days_remaining: u32,
    pub weekend_days_remaining: u32,
}

impl Period {
    /// Resolve the period of `kind` that contains `now`
    ///
    /// Fails only when the period boundaries fall outside the dates chrono
    /// can represent.
    pub fn resolve(now: NaiveDateTime, kind: PeriodKind) -> PaceResult<Self> {
        let today = now.date();
        let (start_date, end_date) = match kind {
            PeriodKind::Weekly => {
                let back = u64::from(today.weekday().num_days_from_sunday());
                let start = today
                    .checked_sub_days(Days::new(back))
                    .ok_or_else(|| out_of_range(now))?;
                let end = start
                    .checked_add_days(Days::new(7))
                    .ok_or_else(|| out_of_range(now))?;
                (start, end)
            }
            PeriodKind::Monthly => {
                let start = today.with_day(1).ok_or_else(|| out_of_range(now))?;
                let end = start
                    .checked_add_months(Months::new(1))
                    .ok_or_else(|| out_of_range(now))?;
                (start, end)
            }
        };

        let start = start_date.and_time(NaiveTime::MIN);
        let end = end_date.and_time(NaiveTime::MIN);

        let days_total = (end_date - start_date).num_days() as u32;
        let days_elapsed = (now - start).num_days() as u32 + 1;
        let days_remaining = days_total.saturating_sub(days_elapsed);

        let mut period = Self {
            kind,
            start,
            end,
            today,
            days_elapsed,
            days_total,
            days_remaining,
            weekday_days_total: 0,
            weekend_days_total: 0,
            weekday_days_elapsed: 0,
            weekend_days_elapsed: 0,
            weekday_days_remaining: 0,
            weekend_days_remaining: 0,
        };

        for (ordinal, day) in (1..=days_total).zip(start_date.iter_days()) {
            let elapsed = ordinal <= days_elapsed;
            match (is_weekend_day(day), elapsed) {
                (true, true) => period.weekend_days_elapsed += 1,
                (true, false) => period.weekend_days_remaining += 1,
                (false, true) => period.weekday_days_elapsed += 1,
                (false, false) => period.weekday_days_remaining += 1,
            }
        }
        period.weekday_days_total = period.weekday_days_elapsed + period.weekday_days_remaining;
        period.weekend_days_total = period.weekend_days_elapsed + period.weekend_days_remaining;

        Ok(period)
    }

    /// The `[start, end)` range covered by this period
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// Check if a timestamp falls within this period
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.range().contains(at)
    }

    /// Classify a timestamp by its own calendar day
    pub fn is_weekend(&self, at: NaiveDateTime) -> bool {
        is_weekend_day(at.date())
    }

    pub fn is_today_weekend(&self) -> bool {
        is_weekend_day(self.today)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            PeriodKind::Monthly => write!(f, "{}", self.start.format("%B %Y")),
            PeriodKind::Weekly => write!(f, "Week of {}", self.start.format("%b %d, %Y")),
        }
    }
}

/// Saturday and Sunday are weekend days
pub fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn out_of_range(now: NaiveDateTime) -> PaceError {
    PaceError::Validation(format!("date out of supported range: {}", now))
}

/// Parse a wall-clock timestamp
///
/// Formats:
/// - Date only: "2025-01-15" (midnight)
/// - Date and time: "2025-01-15T09:30", "2025-01-15 09:30:00"
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, PeriodParseError> {
    let s = s.trim();

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(at) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(at);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| PeriodParseError::InvalidTimestamp(s.to_string()))
}

/// Error type for period and timestamp parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidKind(String),
    InvalidTimestamp(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidKind(s) => {
                write!(f, "Invalid period '{}': expected weekly or monthly", s)
            }
            PeriodParseError::InvalidTimestamp(s) => write!(f, "Invalid date: {}", s),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_weekly_period() {
        // Wednesday
        let period = Period::resolve(at(2026, 10, 21, 15, 30), PeriodKind::Weekly).unwrap();

        assert_eq!(period.start, at(2026, 10, 18, 0, 0));
        assert_eq!(period.end, at(2026, 10, 25, 0, 0));
        assert_eq!(period.days_total, 7);
        assert_eq!(period.days_elapsed, 4);
        assert_eq!(period.days_remaining, 3);

        assert_eq!(period.weekday_days_total, 5);
        assert_eq!(period.weekend_days_total, 2);
        assert_eq!(period.weekday_days_elapsed, 3);
        assert_eq!(period.weekend_days_elapsed, 1);
        assert_eq!(period.weekday_days_remaining, 2);
        assert_eq!(period.weekend_days_remaining, 1);
    }

    #[test]
    fn test_weekly_always_seven_days() {
        let mut now = at(2024, 12, 25, 23, 59);
        for _ in 0..60 {
            let period = Period::resolve(now, PeriodKind::Weekly).unwrap();
            assert_eq!(period.days_total, 7);
            assert_eq!(period.start.weekday(), Weekday::Sun);
            assert!(period.contains(now));
            assert!((1..=7).contains(&period.days_elapsed));
            now += chrono::Duration::hours(29);
        }
    }

    #[test]
    fn test_monthly_period() {
        let period = Period::resolve(at(2026, 10, 18, 12, 0), PeriodKind::Monthly).unwrap();

        assert_eq!(period.start, at(2026, 10, 1, 0, 0));
        assert_eq!(period.end, at(2026, 11, 1, 0, 0));
        assert_eq!(period.days_total, 31);
        assert_eq!(period.days_elapsed, 18);
        assert_eq!(period.days_remaining, 13);

        // October 2026 starts on a Thursday
        assert_eq!(period.weekday_days_total, 22);
        assert_eq!(period.weekend_days_total, 9);
        assert_eq!(period.weekend_days_elapsed, 6);
        assert_eq!(period.weekend_days_remaining, 3);
        assert_eq!(period.weekday_days_elapsed, 12);
        assert_eq!(period.weekday_days_remaining, 10);
    }

    #[test]
    fn test_monthly_day_counts_hold_for_every_month() {
        for year in [2023, 2024, 2026] {
            for month in 1..=12 {
                for day in [1, 15, 28] {
                    let now = at(year, month, day, 8, 0);
                    let period = Period::resolve(now, PeriodKind::Monthly).unwrap();
                    assert!((28..=31).contains(&period.days_total));
                    assert_eq!(period.days_elapsed, day);
                    assert_eq!(
                        period.days_elapsed + period.days_remaining,
                        period.days_total
                    );
                    assert_eq!(
                        period.weekday_days_total + period.weekend_days_total,
                        period.days_total
                    );
                    assert_eq!(
                        period.weekday_days_elapsed + period.weekend_days_elapsed,
                        period.days_elapsed
                    );
                }
            }
        }
    }

    #[test]
    fn test_leap_february() {
        let period = Period::resolve(at(2028, 2, 10, 0, 0), PeriodKind::Monthly).unwrap();
        assert_eq!(period.days_total, 29);
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let period = Period::resolve(at(2025, 12, 31, 23, 59), PeriodKind::Monthly).unwrap();
        assert_eq!(period.end, at(2026, 1, 1, 0, 0));
        assert_eq!(period.days_elapsed, 31);
        assert_eq!(period.days_remaining, 0);
    }

    #[test]
    fn test_boundary_belongs_to_period_it_starts() {
        let monthly = Period::resolve(at(2026, 11, 1, 0, 0), PeriodKind::Monthly).unwrap();
        assert_eq!(monthly.start, at(2026, 11, 1, 0, 0));
        assert_eq!(monthly.days_elapsed, 1);
        assert_eq!(monthly.days_total, 30);

        let weekly = Period::resolve(at(2026, 10, 25, 0, 0), PeriodKind::Weekly).unwrap();
        assert_eq!(weekly.start, at(2026, 10, 25, 0, 0));
        assert_eq!(weekly.days_elapsed, 1);
        assert!(!weekly.contains(at(2026, 10, 24, 23, 59)));
        assert!(!weekly.contains(weekly.end));
    }

    #[test]
    fn test_is_weekend() {
        let period = Period::resolve(at(2026, 10, 18, 9, 0), PeriodKind::Monthly).unwrap();
        assert!(period.is_today_weekend());
        assert!(period.is_weekend(at(2026, 10, 17, 23, 0)));
        assert!(!period.is_weekend(at(2026, 10, 19, 0, 0)));
    }

    #[test]
    fn test_display() {
        let monthly = Period::resolve(at(2026, 10, 18, 9, 0), PeriodKind::Monthly).unwrap();
        assert_eq!(monthly.to_string(), "October 2026");

        let weekly = Period::resolve(at(2026, 10, 21, 9, 0), PeriodKind::Weekly).unwrap();
        assert_eq!(weekly.to_string(), "Week of Oct 18, 2026");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("weekly".parse::<PeriodKind>().unwrap(), PeriodKind::Weekly);
        assert_eq!("Month".parse::<PeriodKind>().unwrap(), PeriodKind::Monthly);
        assert!("yearly".parse::<PeriodKind>().is_err());
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("2026-10-18").unwrap(), at(2026, 10, 18, 0, 0));
        assert_eq!(
            parse_timestamp("2026-10-18T09:30").unwrap(),
            at(2026, 10, 18, 9, 30)
        );
        assert_eq!(
            parse_timestamp("2026-10-18 09:30:00").unwrap(),
            at(2026, 10, 18, 9, 30)
        );
        assert!(matches!(
            parse_timestamp("18/10/2026"),
            Err(PeriodParseError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(serde_json::to_string(&PeriodKind::Weekly).unwrap(), "\"weekly\"");
        let kind: PeriodKind = serde_json::from_str("\"monthly\"").unwrap();
        assert_eq!(kind, PeriodKind::Monthly);
    }
}
