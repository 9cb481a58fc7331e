//! Calendar-day and error types.
//!
//! This module provides:
//! - `time`: `Date` and the date helpers (shape check, age, timestamps)
//! - `error`: Structured error types for dates and schedule validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`is_date_string_valid`], [`age_on`], [`human_timestamp`] from `time`
//! - [`DateError`], [`ScheduleError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, ScheduleError};
pub use time::{age_on, human_timestamp, is_date_string_valid, Date};
