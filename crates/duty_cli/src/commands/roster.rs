//! Roster command implementation
//!
//! Prints who is on duty on each valid day, with a role legend.

use duty_core::schedule::{build_roster, legend_anchor, Cadet, DutyRole, Schedule};
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;
use crate::input::{load_cadets, load_schedule};
use crate::Result;

/// Run the roster command
pub fn run(schedule_path: &str, cadets_path: &str, format: OutputFormat) -> Result<()> {
    let schedule = load_schedule(schedule_path)?;
    let cadets = load_cadets(cadets_path)?;

    let rendered = render(&schedule, &cadets, format)?;
    info!(
        assignments = schedule.assignments.len(),
        cadets = cadets.len(),
        "Roster built"
    );
    println!("{}", rendered);
    Ok(())
}

/// Render the roster of `schedule`
pub fn render(schedule: &Schedule, cadets: &[Cadet], format: OutputFormat) -> Result<String> {
    let entries = build_roster(schedule, cadets);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "schedule": schedule.name,
            "legendDate": legend_anchor(schedule),
            "entries": entries,
        }))?),
        OutputFormat::Text => {
            let title = schedule.name.as_deref().unwrap_or("(unnamed)");
            let legend: Vec<&str> = DutyRole::ALL.iter().map(DutyRole::title).collect();

            let mut lines = vec![
                format!("Schedule for {}", title),
                format!("Legend ({}): {}", legend_anchor(schedule), legend.join(", ")),
            ];
            lines.extend(entries.iter().map(|entry| {
                format!("{}  {:<9}  {}", entry.date, entry.role.title(), entry.title)
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duty_core::schedule::CrewAssignment;
    use duty_core::types::Date;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn fixture() -> (Schedule, Vec<Cadet>) {
        let schedule = Schedule::new(d(2024, 1, 3), d(2024, 1, 12))
            .with_name("Winter Crew")
            .with_assignment(CrewAssignment::new(d(2024, 1, 3), ["c1", "c2"]))
            .with_assignment(CrewAssignment::new(d(2024, 1, 6), ["c2"]))
            .with_assignment(CrewAssignment::new(d(2024, 1, 8), ["c3", "zz"]));
        let cadets = vec![
            Cadet::new("c1", "Avery").chief(),
            Cadet::new("c2", "Blake").certified(),
            Cadet::new("c3", "Casey"),
        ];
        (schedule, cadets)
    }

    #[test]
    fn test_render_text() {
        let (schedule, cadets) = fixture();
        let rendered = render(&schedule, &cadets, OutputFormat::Text).unwrap();

        assert_eq!(
            rendered.lines().collect::<Vec<_>>(),
            vec![
                "Schedule for Winter Crew",
                "Legend (2023-12-31): Chief, Certified, Regular",
                "2024-01-03  Chief      Avery",
                "2024-01-03  Certified  Blake",
                "2024-01-08  Regular    Casey",
                "2024-01-08  Regular    Unknown",
            ]
        );
    }

    #[test]
    fn test_render_json() {
        let (schedule, cadets) = fixture();
        let rendered = render(&schedule, &cadets, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["schedule"], "Winter Crew");
        assert_eq!(value["legendDate"], "2023-12-31");
        assert_eq!(value["entries"].as_array().unwrap().len(), 4);
        assert_eq!(value["entries"][0]["role"], "chief");
    }
}
