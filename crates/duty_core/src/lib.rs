//! # duty_core: Duty-day calendar engine for EMS cadet scheduling
//!
//! Decides which calendar days of a training schedule are duty days and
//! enumerates them, so that schedule views, crew assignment, and printed
//! rosters all agree on the same set of days.
//!
//! A day is a duty day iff:
//! 1. it lies within the schedule's inclusive `[start_date, end_date]`,
//! 2. it is not a Saturday or Sunday, and
//! 3. it is not one of the schedule's excluded dates (unless the caller
//!    asks to ignore exclusions).
//!
//! Everything here is pure: no clock, no I/O, no shared state. All dates
//! are explicit inputs.
//!
//! ## Usage Examples
//!
//! ```rust
//! use duty_core::{enumerate_duty_days, is_valid_duty_day, Date, Schedule};
//!
//! let schedule = Schedule::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 1, 7).unwrap(),
//! )
//! .with_excluded(Date::from_ymd(2024, 1, 3).unwrap());
//!
//! let days = enumerate_duty_days(&schedule);
//! assert_eq!(days, ["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]);
//!
//! let saturday = Date::from_ymd(2024, 1, 6).unwrap();
//! assert!(!is_valid_duty_day(&schedule, saturday, true));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON shape for `Date`, `Schedule`, and roster types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedule;
pub mod types;

pub use schedule::{
    classify_day, count_duty_days, duty_days, enumerate_duty_days, is_valid_duty_day, DayKind,
    Schedule,
};
pub use types::{Date, DateError, ScheduleError};
