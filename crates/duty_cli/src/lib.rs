//! Command-line front end for the duty-day calendar engine
//!
//! Loads schedules and cadet lists from JSON files shaped like the
//! scheduling API's responses and exposes `duty_core` on the command line.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use duty_core;
pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
