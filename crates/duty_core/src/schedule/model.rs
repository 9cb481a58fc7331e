//! The `Schedule` entity.
//!
//! A schedule is a named duty period: an inclusive date range, a set of
//! explicitly excluded days (holidays, stand-downs), and the crew
//! assignments made against it. The duty-day calculator reads only the
//! range and the exclusions.
//!
//! # Wire shape
//!
//! Schedules arrive as JSON with camelCase keys:
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use duty_core::schedule::Schedule;
//!
//! let schedule: Schedule = serde_json::from_str(r#"{
//!     "_id": "spring-24",
//!     "name": "Spring 2024",
//!     "startDate": "2024-01-01",
//!     "endDate": "2024-01-07",
//!     "excludedDates": ["2024-01-03"]
//! }"#).unwrap();
//!
//! assert!(schedule.is_excluded("2024-01-03"));
//! assert!(schedule.assignments.is_empty());
//! # }
//! ```

use std::collections::HashSet;

use super::roster::CrewAssignment;
use crate::types::error::ScheduleError;
use crate::types::time::{is_date_string_valid, Date};

/// A duty period with an inclusive date range and excluded days.
///
/// `excluded_dates` holds canonical `YYYY-MM-DD` strings and is matched
/// by exact string comparison. A non-canonical entry such as `"2024-1-3"`
/// excludes nothing; [`Schedule::validate`] reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Schedule {
    /// Identifier assigned by the API.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "_id", default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<String>,

    /// Display name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,

    /// First day of the schedule (inclusive).
    pub start_date: Date,

    /// Last day of the schedule (inclusive).
    pub end_date: Date,

    /// Days carved out of the range.
    #[cfg_attr(feature = "serde", serde(default))]
    pub excluded_dates: HashSet<String>,

    /// Crew assignments made against this schedule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub assignments: Vec<CrewAssignment>,
}

impl Schedule {
    /// Creates an unnamed schedule covering `[start_date, end_date]`.
    pub fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            id: None,
            name: None,
            start_date,
            end_date,
            excluded_dates: HashSet::new(),
            assignments: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Excludes a day from the schedule.
    pub fn with_excluded(mut self, date: Date) -> Self {
        self.excluded_dates.insert(date.to_string());
        self
    }

    /// Adds an exclusion entry verbatim.
    ///
    /// The string is stored as given; only canonical ISO strings will ever
    /// match a day.
    pub fn with_excluded_str(mut self, date: impl Into<String>) -> Self {
        self.excluded_dates.insert(date.into());
        self
    }

    /// Adds a crew assignment.
    pub fn with_assignment(mut self, assignment: CrewAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    /// Whether the given ISO day string is in the exclusion set.
    #[inline]
    pub fn is_excluded(&self, iso_date: &str) -> bool {
        self.excluded_dates.contains(iso_date)
    }

    /// Whether `date` lies within `[start_date, end_date]`.
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Checks the invariants that creation and editing flows enforce.
    ///
    /// Reports the range ordering first, then the first malformed
    /// exclusion in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use duty_core::schedule::Schedule;
    /// use duty_core::types::{Date, ScheduleError};
    ///
    /// let start = Date::from_ymd(2024, 2, 1).unwrap();
    /// let end = Date::from_ymd(2024, 1, 1).unwrap();
    ///
    /// assert!(matches!(
    ///     Schedule::new(start, end).validate(),
    ///     Err(ScheduleError::InvertedRange { .. })
    /// ));
    /// assert!(Schedule::new(end, start).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.start_date > self.end_date {
            return Err(ScheduleError::InvertedRange {
                start: self.start_date.to_string(),
                end: self.end_date.to_string(),
            });
        }

        let mut exclusions: Vec<&String> = self.excluded_dates.iter().collect();
        exclusions.sort();
        for entry in exclusions {
            if !is_date_string_valid(entry) || Date::parse(entry).is_err() {
                return Err(ScheduleError::MalformedExclusion(entry.clone()));
            }
        }
        Ok(())
    }
}
