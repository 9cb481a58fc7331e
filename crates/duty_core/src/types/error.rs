//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `ScheduleError`: Errors reported by opt-in schedule validation
//!
//! The duty-day calculator itself never returns these; they surface only
//! where dates enter the system (parsing, schedule creation).

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use duty_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Schedule validation errors.
///
/// Returned by [`Schedule::validate`](crate::schedule::Schedule::validate).
/// Creation and editing flows are expected to reject these before a
/// schedule is persisted; the calculator tolerates them regardless.
///
/// # Examples
/// ```
/// use duty_core::types::ScheduleError;
///
/// let err = ScheduleError::MalformedExclusion("2024-1-3".to_string());
/// assert_eq!(format!("{}", err), "Excluded date is not YYYY-MM-DD: 2024-1-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Start date falls after end date.
    #[error("Schedule starts after it ends: {start} > {end}")]
    InvertedRange {
        /// Start date (ISO)
        start: String,
        /// End date (ISO)
        end: String,
    },

    /// Exclusion entry is not a canonical ISO calendar date.
    #[error("Excluded date is not YYYY-MM-DD: {0}")]
    MalformedExclusion(String),
}
