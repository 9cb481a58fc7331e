//! Calendar command implementation
//!
//! Prints a Sunday-first month grid for a schedule. Each day carries a
//! marker: `*` duty day, `x` excluded weekday, `.` anything else.

use duty_core::schedule::{classify_day, DayKind, Schedule};
use duty_core::types::Date;
use tracing::info;

use crate::input::load_schedule;
use crate::{CliError, Result};

const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Run the calendar command
pub fn run(schedule_path: &str, month: &str) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let first = parse_month(month)?;

    info!(month = %month, "Rendering calendar");
    println!("{}", render(&schedule, first));
    Ok(())
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_month(month: &str) -> Result<Date> {
    let invalid = || CliError::InvalidArgument(format!("Month must be YYYY-MM, got: {}", month));

    let (year, month_number) = month.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month_number: u32 = month_number.parse().map_err(|_| invalid())?;

    Date::from_ymd(year, month_number, 1).map_err(|_| invalid())
}

fn marker(kind: DayKind) -> char {
    match kind {
        DayKind::Duty => '*',
        DayKind::Excluded => 'x',
        DayKind::Weekend | DayKind::OutOfRange => '.',
    }
}

/// Render the month starting at `first` (which must be a first-of-month)
pub fn render(schedule: &Schedule, first: Date) -> String {
    let title = first.into_inner().format("%B %Y").to_string();
    let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| format!("{:<3}", h)).collect();

    let mut lines = vec![title, header.join(" ").trim_end().to_string()];
    let mut cells: Vec<String> = vec!["   ".to_string(); first.weekday_number() as usize];

    let mut current = Some(first);
    while let Some(day) = current.filter(|day| day.month() == first.month()) {
        cells.push(format!("{:>2}{}", day.day(), marker(classify_day(schedule, day))));
        if cells.len() == 7 {
            lines.push(cells.join(" "));
            cells.clear();
        }
        current = day.succ();
    }
    if !cells.is_empty() {
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}
