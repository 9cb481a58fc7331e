//! Schedules and the duty-day calculator.
//!
//! This module provides:
//! - `model`: the `Schedule` entity (date range, exclusions, assignments)
//! - `duty_days`: duty-day validity, classification, and enumeration
//! - `roster`: printable roster built from crew assignments
//!
//! # Re-exports
//!
//! Everything a caller needs is re-exported here:
//! [`Schedule`], [`is_valid_duty_day`], [`enumerate_duty_days`], [`duty_days`],
//! [`count_duty_days`], [`classify_day`], [`DayKind`], [`DutyDays`],
//! [`build_roster`], [`legend_anchor`], [`is_shaded`], [`Cadet`],
//! [`CrewAssignment`], [`DutyRole`], [`RosterEntry`].

pub mod duty_days;
pub mod model;
pub mod roster;

pub use duty_days::{
    classify_day, count_duty_days, duty_days, enumerate_duty_days, is_valid_duty_day, DayKind,
    DutyDays,
};
pub use model::Schedule;
pub use roster::{
    build_roster, is_shaded, legend_anchor, Cadet, CrewAssignment, DutyRole, RosterEntry,
    UNKNOWN_CADET,
};
