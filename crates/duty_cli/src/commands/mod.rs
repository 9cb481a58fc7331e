//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Rendering is kept
//! apart from `run` so output can be checked without touching stdout.

pub mod calendar;
pub mod check;
pub mod days;
pub mod roster;
