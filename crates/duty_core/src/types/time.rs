//! Calendar-day types and date helpers for duty scheduling.
//!
//! This module provides:
//! - `Date`: Type-safe calendar-day wrapper around chrono::NaiveDate
//! - Weekday numbering (0 = Sunday .. 6 = Saturday) and weekend checks
//! - `is_date_string_valid`, `age_on`, `human_timestamp` helpers used by
//!   profile and status displays
//!
//! # Examples
//!
//! ```
//! use duty_core::types::time::Date;
//!
//! let monday = Date::from_ymd(2024, 1, 1).unwrap();
//! assert_eq!(monday.weekday_number(), 1);
//! assert!(!monday.is_weekend());
//!
//! let saturday: Date = "2024-01-06".parse().unwrap();
//! assert!(saturday.is_weekend());
//! assert_eq!(saturday - monday, 5);
//! ```

use chrono::{
    DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Canonical calendar-day format used for every date string in the system.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Type-safe calendar-day wrapper around chrono::NaiveDate.
///
/// A `Date` carries no time-of-day and no timezone, so every comparison
/// made with it is at day granularity. Conversions from `NaiveDateTime`
/// and `DateTime<Tz>` drop the time and keep the calendar day as written.
///
/// # Examples
///
/// ```
/// use duty_core::types::time::Date;
/// use chrono::NaiveDate;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.to_string(), "2024-06-15");
///
/// let morning = NaiveDate::from_ymd_opt(2024, 6, 15)
///     .unwrap()
///     .and_hms_opt(7, 30, 0)
///     .unwrap();
/// assert_eq!(Date::from(morning), date);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    ///
    /// Nothing in this crate calls this; it exists for callers that want
    /// to ask about "today" explicitly.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a calendar day from a string.
    ///
    /// Accepts, in order:
    /// - ISO 8601 dates (`YYYY-MM-DD`)
    /// - RFC 3339 timestamps (`2024-01-03T09:00:00-05:00`)
    /// - naive timestamps (`2024-01-03T09:00:00`, optional fraction)
    ///
    /// For timestamps the time-of-day is dropped and the calendar day as
    /// written is kept; no timezone conversion is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-01-03").unwrap();
    /// assert_eq!(Date::parse("2024-01-03T23:59:59-08:00").unwrap(), date);
    /// assert_eq!(Date::parse("2024-01-03T08:00:00.000").unwrap(), date);
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, ISO_DATE_FORMAT) {
            return Ok(Date(date));
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(s) {
            return Ok(Date(timestamp.date_naive()));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|timestamp| Date(timestamp.date()))
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week numbered from Sunday: 0 = Sunday, 6 = Saturday.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2024, 3, 10).unwrap().weekday_number(), 0); // Sun
    /// assert_eq!(Date::from_ymd(2024, 3, 9).unwrap().weekday_number(), 6); // Sat
    /// ```
    #[inline]
    pub fn weekday_number(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Whether this day is a Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday_number(), 0 | 6)
    }

    /// The following calendar day, or `None` past the last representable date.
    #[inline]
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// The Sunday on or before this date.
    ///
    /// Saturates at the earliest representable date.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_core::types::time::Date;
    ///
    /// let wednesday = Date::from_ymd(2024, 1, 3).unwrap();
    /// assert_eq!(wednesday.week_start(), Date::from_ymd(2023, 12, 31).unwrap());
    /// ```
    pub fn week_start(&self) -> Self {
        self.0
            .checked_sub_days(Days::new(u64::from(self.weekday_number())))
            .map(Date)
            .unwrap_or(*self)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<NaiveDateTime> for Date {
    fn from(timestamp: NaiveDateTime) -> Self {
        Date(timestamp.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    fn from(timestamp: DateTime<Tz>) -> Self {
        Date(timestamp.date_naive())
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Date;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Date::parse(&s).map_err(de::Error::custom)
        }
    }
}

/// Checks that a string has the `YYYY-MM-DD` shape.
///
/// This is a shape check only: `"2024-02-30"` passes. Use [`Date::parse`]
/// when calendar validity matters.
///
/// # Examples
///
/// ```
/// use duty_core::types::time::is_date_string_valid;
///
/// assert!(is_date_string_valid("1999-12-31"));
/// assert!(!is_date_string_valid("1999-1-31"));
/// assert!(!is_date_string_valid("1999-12-31T00:00:00"));
/// ```
pub fn is_date_string_valid(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Whole years elapsed from `birthdate` to `on`.
///
/// Anniversaries of February 29th fall on February 28th in common years.
/// The count truncates toward zero, so it is negative only when `on` is
/// at least a full year before `birthdate`.
///
/// # Examples
///
/// ```
/// use duty_core::types::time::{age_on, Date};
///
/// let birthdate = Date::from_ymd(2004, 9, 1).unwrap();
/// assert_eq!(age_on(birthdate, Date::from_ymd(2024, 8, 31).unwrap()), 19);
/// assert_eq!(age_on(birthdate, Date::from_ymd(2024, 9, 1).unwrap()), 20);
/// ```
pub fn age_on(birthdate: Date, on: Date) -> i32 {
    if on < birthdate {
        return -age_on(on, birthdate);
    }

    let mut years = on.year() - birthdate.year();
    let anniversary = u32::try_from(years)
        .ok()
        .and_then(|y| y.checked_mul(12))
        .and_then(|months| birthdate.0.checked_add_months(Months::new(months)));
    match anniversary {
        Some(anniversary) if anniversary > on.0 => years -= 1,
        Some(_) => {}
        None => years -= 1,
    }
    years
}

/// Formats a wall-clock time as `h:mm:ss am|pm`.
///
/// # Examples
///
/// ```
/// use duty_core::types::time::human_timestamp;
/// use chrono::NaiveTime;
///
/// let t = NaiveTime::from_hms_opt(15, 4, 5).unwrap();
/// assert_eq!(human_timestamp(t), "3:04:05 pm");
/// ```
pub fn human_timestamp(time: NaiveTime) -> String {
    time.format("%-I:%M:%S %P").to_string()
}
