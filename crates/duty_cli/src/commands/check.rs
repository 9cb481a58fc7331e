//! Check command implementation
//!
//! Answers whether a single day is a duty day of a schedule.

use duty_core::schedule::{classify_day, is_valid_duty_day, Schedule};
use duty_core::types::Date;
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::load_schedule;
use crate::Result;

/// Run the check command
pub fn run(
    schedule_path: &str,
    date: &str,
    ignore_exclusions: bool,
    format: OutputFormat,
) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let date = Date::parse(date)?;

    info!(%date, ignore_exclusions, "Checking day");
    println!("{}", render(&schedule, date, ignore_exclusions, format)?);
    Ok(())
}

/// Render the verdict for `date`
pub fn render(
    schedule: &Schedule,
    date: Date,
    ignore_exclusions: bool,
    format: OutputFormat,
) -> Result<String> {
    let valid = is_valid_duty_day(schedule, date, ignore_exclusions);
    let kind = classify_day(schedule, date);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "date": date,
            "valid": valid,
            "kind": kind,
            "ignoreExclusions": ignore_exclusions,
        }))?),
        OutputFormat::Text => {
            let verdict = if valid { "duty day" } else { "not a duty day" };
            let note = if ignore_exclusions { ", exclusions ignored" } else { "" };
            Ok(format!("{}: {} ({}{})", date, verdict, kind, note))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_week() -> Schedule {
        Schedule::new(
            Date::from_ymd(2024, 1, 1).unwrap(),
            Date::from_ymd(2024, 1, 7).unwrap(),
        )
        .with_excluded_str("2024-01-03")
    }

    #[test]
    fn test_render_text() {
        let schedule = first_week();
        let wednesday = Date::from_ymd(2024, 1, 3).unwrap();
        let tuesday = Date::from_ymd(2024, 1, 2).unwrap();

        assert_eq!(
            render(&schedule, tuesday, false, OutputFormat::Text).unwrap(),
            "2024-01-02: duty day (duty)"
        );
        assert_eq!(
            render(&schedule, wednesday, false, OutputFormat::Text).unwrap(),
            "2024-01-03: not a duty day (excluded)"
        );
        assert_eq!(
            render(&schedule, wednesday, true, OutputFormat::Text).unwrap(),
            "2024-01-03: duty day (excluded, exclusions ignored)"
        );
    }

    #[test]
    fn test_render_json() {
        let schedule = first_week();
        let saturday = Date::from_ymd(2024, 1, 6).unwrap();

        let rendered = render(&schedule, saturday, true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["date"], "2024-01-06");
        assert_eq!(value["valid"], false);
        assert_eq!(value["kind"], "weekend");
        assert_eq!(value["ignoreExclusions"], true);
    }
}
