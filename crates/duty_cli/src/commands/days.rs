//! Days command implementation
//!
//! Lists every duty day of a schedule.

use duty_core::schedule::{enumerate_duty_days, Schedule};
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_schedule;
use crate::Result;

/// Run the days command
pub fn run(schedule_path: &str, format: OutputFormat) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let rendered = render(&schedule, format)?;

    info!(
        start = %schedule.start_date,
        end = %schedule.end_date,
        "Enumerated duty days"
    );
    println!("{}", rendered);
    Ok(())
}

/// Render the duty days of `schedule`
pub fn render(schedule: &Schedule, format: OutputFormat) -> Result<String> {
    let days = enumerate_duty_days(schedule);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&days)?),
        OutputFormat::Text => {
            let mut out = days.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("{} duty day(s)", days.len()));
            Ok(out)
        }
    }
}
