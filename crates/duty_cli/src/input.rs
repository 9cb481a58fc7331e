//! Loading schedules and cadets from JSON files.
//!
//! Files use the same shape the scheduling API returns. A schedule that
//! fails validation is still returned; the calculator tolerates inverted
//! ranges and malformed exclusions, so the problem is only logged.

use std::path::Path;

use duty_core::schedule::{Cadet, Schedule};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{CliError, Result};

fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a schedule from a JSON file
pub fn load_schedule(path: &str) -> Result<Schedule> {
    let schedule: Schedule = read_json(path)?;
    debug!(
        path,
        start = %schedule.start_date,
        end = %schedule.end_date,
        exclusions = schedule.excluded_dates.len(),
        assignments = schedule.assignments.len(),
        "Loaded schedule"
    );

    if let Err(e) = schedule.validate() {
        warn!(path, error = %e, "Schedule failed validation; continuing");
    }
    Ok(schedule)
}

/// Load a cadet list from a JSON array file
pub fn load_cadets(path: &str) -> Result<Vec<Cadet>> {
    let cadets: Vec<Cadet> = read_json(path)?;
    debug!(path, count = cadets.len(), "Loaded cadets");
    Ok(cadets)
}
