//! Printable roster support.
//!
//! Turns a schedule's crew assignments into one entry per cadet per valid
//! duty day, tagged with the cadet's role for colour-coding. Assignments
//! that land on a day the calculator rejects (weekends, exclusions, days
//! outside the range) are dropped rather than printed.

use std::collections::HashMap;
use std::fmt;

use super::duty_days::is_valid_duty_day;
use super::model::Schedule;
use crate::types::time::Date;

/// A cadet as the roster needs to see one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cadet {
    /// Identifier referenced by crew assignments.
    #[cfg_attr(feature = "serde", serde(rename = "_id"))]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Crew chief.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chief: bool,
    /// Holds EMT certification.
    #[cfg_attr(feature = "serde", serde(default))]
    pub certified: bool,
}

impl Cadet {
    /// Creates a regular (non-chief, uncertified) cadet.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chief: false,
            certified: false,
        }
    }

    /// Marks the cadet as a crew chief.
    pub fn chief(mut self) -> Self {
        self.chief = true;
        self
    }

    /// Marks the cadet as certified.
    pub fn certified(mut self) -> Self {
        self.certified = true;
        self
    }

    /// The cadet's roster role.
    pub fn role(&self) -> DutyRole {
        DutyRole::from_flags(self.chief, self.certified)
    }
}

/// Cadets assigned to crew on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrewAssignment {
    /// Day of the assignment.
    pub date: Date,
    /// Assigned cadets, by id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cadet_ids: Vec<String>,
}

impl CrewAssignment {
    /// Creates an assignment of `cadet_ids` on `date`.
    pub fn new<I, S>(date: Date, cadet_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date,
            cadet_ids: cadet_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Role shown on the roster legend.
///
/// A chief outranks certification: a certified chief is `Chief`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DutyRole {
    /// Crew chief.
    Chief,
    /// Certified, not chief.
    Certified,
    /// Everyone else.
    Regular,
}

impl DutyRole {
    /// Legend order.
    pub const ALL: [DutyRole; 3] = [DutyRole::Chief, DutyRole::Certified, DutyRole::Regular];

    /// Role for a cadet with the given flags.
    pub fn from_flags(chief: bool, certified: bool) -> Self {
        if chief {
            DutyRole::Chief
        } else if certified {
            DutyRole::Certified
        } else {
            DutyRole::Regular
        }
    }

    /// Legend title.
    pub fn title(&self) -> &'static str {
        match self {
            DutyRole::Chief => "Chief",
            DutyRole::Certified => "Certified",
            DutyRole::Regular => "Regular",
        }
    }
}

impl fmt::Display for DutyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Title used for assignments naming a cadet id that is not on file.
pub const UNKNOWN_CADET: &str = "Unknown";

/// One cadet on duty on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    /// Duty day.
    pub date: Date,
    /// Assigned cadet id.
    pub cadet_id: String,
    /// Cadet name, or [`UNKNOWN_CADET`].
    pub title: String,
    /// Role for colour-coding.
    pub role: DutyRole,
}

/// Builds the printable roster for `schedule`.
///
/// Assignments are visited in order and kept only when their day is a
/// valid duty day (exclusions honored). Each kept assignment yields one
/// entry per cadet id, in the order the ids are listed.
///
/// # Examples
///
/// ```
/// use duty_core::schedule::{build_roster, Cadet, CrewAssignment, DutyRole, Schedule};
/// use duty_core::types::Date;
///
/// let monday = Date::from_ymd(2024, 1, 1).unwrap();
/// let saturday = Date::from_ymd(2024, 1, 6).unwrap();
/// let schedule = Schedule::new(monday, saturday)
///     .with_assignment(CrewAssignment::new(monday, ["c1", "c9"]))
///     .with_assignment(CrewAssignment::new(saturday, ["c1"]));
/// let cadets = vec![Cadet::new("c1", "Avery").chief()];
///
/// let roster = build_roster(&schedule, &cadets);
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster[0].role, DutyRole::Chief);
/// assert_eq!(roster[1].title, "Unknown");
/// ```
pub fn build_roster(schedule: &Schedule, cadets: &[Cadet]) -> Vec<RosterEntry> {
    let by_id: HashMap<&str, &Cadet> = cadets.iter().map(|c| (c.id.as_str(), c)).collect();
    let by_id = &by_id;

    schedule
        .assignments
        .iter()
        .filter(|assignment| is_valid_duty_day(schedule, assignment.date, false))
        .flat_map(|assignment| {
            assignment.cadet_ids.iter().map(move |cadet_id| {
                let cadet = by_id.get(cadet_id.as_str());
                RosterEntry {
                    date: assignment.date,
                    cadet_id: cadet_id.clone(),
                    title: cadet.map_or_else(|| UNKNOWN_CADET.to_string(), |c| c.name.clone()),
                    role: cadet.map_or(DutyRole::Regular, |c| c.role()),
                }
            })
        })
        .collect()
}

/// Day the role legend is drawn on: the Sunday on or before the start.
pub fn legend_anchor(schedule: &Schedule) -> Date {
    schedule.start_date.week_start()
}

/// Whether a calendar cell for `date` is greyed out.
pub fn is_shaded(schedule: &Schedule, date: impl Into<Date>) -> bool {
    !is_valid_duty_day(schedule, date, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn cadets() -> Vec<Cadet> {
        vec![
            Cadet::new("c1", "Avery").chief().certified(),
            Cadet::new("c2", "Blake").certified(),
            Cadet::new("c3", "Casey"),
        ]
    }

    #[test]
    fn test_role_precedence() {
        assert_eq!(DutyRole::from_flags(true, true), DutyRole::Chief);
        assert_eq!(DutyRole::from_flags(true, false), DutyRole::Chief);
        assert_eq!(DutyRole::from_flags(false, true), DutyRole::Certified);
        assert_eq!(DutyRole::from_flags(false, false), DutyRole::Regular);
    }

    #[test]
    fn test_roster_drops_invalid_days() {
        let schedule = Schedule::new(d(2024, 1, 1), d(2024, 1, 12))
            .with_excluded(d(2024, 1, 3))
            .with_assignment(CrewAssignment::new(d(2024, 1, 2), ["c1", "c2"]))
            .with_assignment(CrewAssignment::new(d(2024, 1, 3), ["c3"])) // excluded
            .with_assignment(CrewAssignment::new(d(2024, 1, 6), ["c3"])) // Saturday
            .with_assignment(CrewAssignment::new(d(2024, 1, 15), ["c3"])) // after end
            .with_assignment(CrewAssignment::new(d(2024, 1, 4), ["c3"]));

        let roster = build_roster(&schedule, &cadets());
        let summary: Vec<(String, &str, DutyRole)> = roster
            .iter()
            .map(|e| (e.date.to_string(), e.title.as_str(), e.role))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("2024-01-02".to_string(), "Avery", DutyRole::Chief),
                ("2024-01-02".to_string(), "Blake", DutyRole::Certified),
                ("2024-01-04".to_string(), "Casey", DutyRole::Regular),
            ]
        );
    }

    #[test]
    fn test_roster_unknown_cadet() {
        let schedule = Schedule::new(d(2024, 1, 1), d(2024, 1, 5))
            .with_assignment(CrewAssignment::new(d(2024, 1, 1), ["ghost"]));
        let roster = build_roster(&schedule, &cadets());

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].cadet_id, "ghost");
        assert_eq!(roster[0].title, UNKNOWN_CADET);
        assert_eq!(roster[0].role, DutyRole::Regular);
    }

    #[test]
    fn test_roster_empty_assignment() {
        let schedule = Schedule::new(d(2024, 1, 1), d(2024, 1, 5))
            .with_assignment(CrewAssignment::new(d(2024, 1, 1), Vec::<String>::new()));
        assert!(build_roster(&schedule, &cadets()).is_empty());
    }

    #[test]
    fn test_legend_anchor() {
        // Wednesday start anchors on the previous Sunday
        let schedule = Schedule::new(d(2024, 1, 3), d(2024, 1, 31));
        assert_eq!(legend_anchor(&schedule), d(2023, 12, 31));

        let sunday_start = Schedule::new(d(2024, 1, 7), d(2024, 1, 31));
        assert_eq!(legend_anchor(&sunday_start), d(2024, 1, 7));
    }

    #[test]
    fn test_is_shaded() {
        let schedule = Schedule::new(d(2024, 1, 1), d(2024, 1, 7)).with_excluded(d(2024, 1, 3));
        assert!(!is_shaded(&schedule, d(2024, 1, 2)));
        assert!(is_shaded(&schedule, d(2024, 1, 3)));
        assert!(is_shaded(&schedule, d(2024, 1, 7)));
        assert!(is_shaded(&schedule, d(2024, 2, 1)));
    }

    #[test]
    fn test_role_titles_in_legend_order() {
        let titles: Vec<&str> = DutyRole::ALL.iter().map(DutyRole::title).collect();
        assert_eq!(titles, vec!["Chief", "Certified", "Regular"]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_cadet_deserialize_defaults_flags() {
            let cadet: Cadet = serde_json::from_str(r#"{"_id":"c7","name":"Drew"}"#).unwrap();
            assert_eq!(cadet, Cadet::new("c7", "Drew"));
        }

        #[test]
        fn test_roster_entry_serialize() {
            let entry = RosterEntry {
                date: d(2024, 1, 2),
                cadet_id: "c1".to_string(),
                title: "Avery".to_string(),
                role: DutyRole::Chief,
            };
            let value = serde_json::to_value(&entry).unwrap();
            assert_eq!(value["date"], "2024-01-02");
            assert_eq!(value["role"], "chief");
        }
    }
}
