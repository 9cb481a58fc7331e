//! Duty-day validity and enumeration.
//!
//! A day is a duty day for a schedule iff it lies within the schedule's
//! inclusive range, is not a Saturday or Sunday, and (unless exclusions
//! are ignored) is not in the schedule's exclusion set.
//!
//! Enumeration walks the range one calendar day at a time. Exclusions and
//! the weekend rule are per-day predicates, so no day is skipped.
//!
//! # Examples
//!
//! ```
//! use duty_core::schedule::{enumerate_duty_days, is_valid_duty_day, Schedule};
//! use duty_core::types::Date;
//!
//! let schedule = Schedule::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 1, 7).unwrap(),
//! )
//! .with_excluded_str("2024-01-03");
//!
//! assert_eq!(
//!     enumerate_duty_days(&schedule),
//!     vec!["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]
//! );
//!
//! let holiday = Date::from_ymd(2024, 1, 3).unwrap();
//! assert!(!is_valid_duty_day(&schedule, holiday, false));
//! assert!(is_valid_duty_day(&schedule, holiday, true));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::model::Schedule;
use crate::types::time::Date;

/// Whether `date` is a duty day of `schedule`.
///
/// `date` may be anything convertible to a calendar day; any time-of-day
/// is discarded before comparison. `ignore_exclusions` bypasses the
/// exclusion set but never the range or weekend rules, which lets legend
/// and print views show what would be valid without exclusions.
pub fn is_valid_duty_day(
    schedule: &Schedule,
    date: impl Into<Date>,
    ignore_exclusions: bool,
) -> bool {
    let date = date.into();
    schedule.contains(date)
        && !date.is_weekend()
        && (ignore_exclusions || !schedule.is_excluded(&date.to_string()))
}

/// Every duty day of `schedule` in ascending order, as ISO strings.
///
/// Returns an empty vector when the range is inverted or holds no valid
/// weekday.
pub fn enumerate_duty_days(schedule: &Schedule) -> Vec<String> {
    duty_days(schedule).map(|date| date.to_string()).collect()
}

/// Lazily walks the duty days of `schedule`.
///
/// The iterator is finite and `Clone`; clone it (or call again) to
/// iterate more than once.
pub fn duty_days(schedule: &Schedule) -> DutyDays<'_> {
    DutyDays {
        schedule,
        next: Some(schedule.start_date),
    }
}

/// Number of duty days in `schedule`.
pub fn count_duty_days(schedule: &Schedule) -> usize {
    duty_days(schedule).count()
}

/// Why a calendar day is or is not a duty day.
///
/// Checks apply in order: range, weekend, exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DayKind {
    /// A valid duty day.
    Duty,
    /// In range and on a weekday, but explicitly excluded.
    Excluded,
    /// In range but a Saturday or Sunday.
    Weekend,
    /// Before the start or after the end of the schedule.
    OutOfRange,
}

impl DayKind {
    /// Whether cadets may be assigned on this day.
    #[inline]
    pub fn is_duty(&self) -> bool {
        matches!(self, DayKind::Duty)
    }

    /// Short lowercase label.
    pub fn name(&self) -> &'static str {
        match self {
            DayKind::Duty => "duty",
            DayKind::Excluded => "excluded",
            DayKind::Weekend => "weekend",
            DayKind::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies `date` against `schedule`.
///
/// `classify_day(s, d).is_duty()` always equals
/// `is_valid_duty_day(s, d, false)`.
pub fn classify_day(schedule: &Schedule, date: impl Into<Date>) -> DayKind {
    let date = date.into();
    if !schedule.contains(date) {
        DayKind::OutOfRange
    } else if date.is_weekend() {
        DayKind::Weekend
    } else if schedule.is_excluded(&date.to_string()) {
        DayKind::Excluded
    } else {
        DayKind::Duty
    }
}

/// Iterator over the duty days of a schedule, see [`duty_days`].
#[derive(Debug, Clone)]
pub struct DutyDays<'a> {
    schedule: &'a Schedule,
    next: Option<Date>,
}

impl Iterator for DutyDays<'_> {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        while let Some(current) = self.next {
            if current > self.schedule.end_date {
                self.next = None;
                break;
            }
            self.next = current.succ();
            if is_valid_duty_day(self.schedule, current, false) {
                return Some(current);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if current <= self.schedule.end_date => {
                let remaining = usize::try_from(self.schedule.end_date - current + 1).ok();
                (0, remaining)
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for DutyDays<'_> {}
