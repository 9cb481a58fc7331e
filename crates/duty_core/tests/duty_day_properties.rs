//! Property tests for duty-day validity and enumeration.
//!
//! Schedules are generated with ranges of up to ~120 days (occasionally
//! inverted) and random exclusion sets drawn around the range.

use std::collections::HashSet;

use chrono::NaiveDate;
use duty_core::schedule::{
    build_roster, classify_day, count_duty_days, duty_days, enumerate_duty_days,
    is_valid_duty_day, Cadet, CrewAssignment, Schedule,
};
use duty_core::types::Date;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = Date> {
    (2000i32..2040i32, 1u32..13u32, 1u32..29u32)
        .prop_map(|(year, month, day)| Date::from_ymd(year, month, day).unwrap())
}

fn offset(date: Date, days: i64) -> Date {
    let naive: NaiveDate = date.into();
    Date::from(naive + chrono::Duration::days(days))
}

fn schedule_strategy() -> impl Strategy<Value = Schedule> {
    (
        date_strategy(),
        -5i64..120i64,
        prop::collection::vec(-10i64..130i64, 0..20),
    )
        .prop_map(|(start, span, exclusion_offsets)| {
            let mut schedule = Schedule::new(start, offset(start, span));
            for days in exclusion_offsets {
                schedule = schedule.with_excluded(offset(start, days));
            }
            schedule
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn dates_outside_range_are_never_valid(
        schedule in schedule_strategy(),
        before in 1i64..400,
        after in 1i64..400,
    ) {
        let early = offset(schedule.start_date, -before);
        let late = offset(schedule.end_date, after);
        for ignore in [false, true] {
            prop_assert!(!is_valid_duty_day(&schedule, early, ignore));
            prop_assert!(!is_valid_duty_day(&schedule, late, ignore));
        }
    }

    #[test]
    fn weekends_are_never_valid(schedule in schedule_strategy(), day in 0i64..120) {
        let date = offset(schedule.start_date, day);
        if date.is_weekend() {
            prop_assert!(!is_valid_duty_day(&schedule, date, false));
            prop_assert!(!is_valid_duty_day(&schedule, date, true));
        }
    }

    #[test]
    fn exclusions_only_bind_without_override(schedule in schedule_strategy()) {
        for entry in &schedule.excluded_dates {
            let date = Date::parse(entry).unwrap();
            if schedule.contains(date) && !date.is_weekend() {
                prop_assert!(!is_valid_duty_day(&schedule, date, false));
                prop_assert!(is_valid_duty_day(&schedule, date, true));
            }
        }
    }

    #[test]
    fn enumeration_is_consistent_with_predicate(schedule in schedule_strategy()) {
        let days = enumerate_duty_days(&schedule);

        for day in &days {
            let date = Date::parse(day).unwrap();
            prop_assert!(!date.is_weekend());
            prop_assert!(!schedule.excluded_dates.contains(day));
            prop_assert!(is_valid_duty_day(&schedule, date, false));
        }

        // Nothing valid is missed
        let listed: HashSet<&String> = days.iter().collect();
        let span = schedule.end_date - schedule.start_date;
        for step in 0..=span.max(-1) {
            let date = offset(schedule.start_date, step);
            prop_assert_eq!(
                is_valid_duty_day(&schedule, date, false),
                listed.contains(&date.to_string())
            );
        }
    }

    #[test]
    fn enumeration_is_strictly_ascending(schedule in schedule_strategy()) {
        let dates: Vec<Date> = duty_days(&schedule).collect();
        prop_assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn enumeration_is_idempotent(schedule in schedule_strategy()) {
        let first = enumerate_duty_days(&schedule);
        let second = enumerate_duty_days(&schedule);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(count_duty_days(&schedule), first.len());
    }

    #[test]
    fn inverted_ranges_enumerate_nothing(schedule in schedule_strategy()) {
        if schedule.start_date > schedule.end_date {
            prop_assert!(enumerate_duty_days(&schedule).is_empty());
        }
    }

    #[test]
    fn classification_agrees_with_predicate(
        schedule in schedule_strategy(),
        day in -20i64..140,
    ) {
        let date = offset(schedule.start_date, day);
        prop_assert_eq!(
            classify_day(&schedule, date).is_duty(),
            is_valid_duty_day(&schedule, date, false)
        );
    }

    #[test]
    fn time_of_day_never_matters(
        schedule in schedule_strategy(),
        day in -3i64..125,
        seconds in 0u32..86_400,
    ) {
        let date = offset(schedule.start_date, day);
        let naive: NaiveDate = date.into();
        let timestamp = naive
            .and_hms_opt(seconds / 3600, (seconds / 60) % 60, seconds % 60)
            .unwrap();
        prop_assert_eq!(
            is_valid_duty_day(&schedule, timestamp, false),
            is_valid_duty_day(&schedule, date, false)
        );
    }

    #[test]
    fn roster_only_lands_on_duty_days(
        schedule in schedule_strategy(),
        assignment_offsets in prop::collection::vec(-5i64..125, 0..15),
    ) {
        let mut schedule = schedule;
        for days in assignment_offsets {
            let date = offset(schedule.start_date, days);
            schedule = schedule.with_assignment(CrewAssignment::new(date, ["c1", "c2"]));
        }
        let cadets = vec![Cadet::new("c1", "Avery").chief()];

        let roster = build_roster(&schedule, &cadets);
        for entry in &roster {
            prop_assert!(is_valid_duty_day(&schedule, entry.date, false));
        }
        prop_assert_eq!(roster.len() % 2, 0);
    }
}

#[test]
fn first_week_of_2024_with_one_exclusion() {
    let schedule = Schedule::new(
        Date::parse("2024-01-01").unwrap(),
        Date::parse("2024-01-07").unwrap(),
    )
    .with_excluded_str("2024-01-03");

    assert_eq!(
        enumerate_duty_days(&schedule),
        vec!["2024-01-01", "2024-01-02", "2024-01-04", "2024-01-05"]
    );
    assert!(is_valid_duty_day(
        &schedule,
        Date::parse("2024-01-03").unwrap(),
        true
    ));
}

#[test]
fn weekend_only_schedule_is_empty() {
    let schedule = Schedule::new(
        Date::parse("2024-03-09").unwrap(),
        Date::parse("2024-03-10").unwrap(),
    );
    assert_eq!(enumerate_duty_days(&schedule), Vec::<String>::new());
}

#[test]
fn full_term_counts_weekdays_minus_holidays() {
    // Spring term: Jan 8 - May 17 2024 (19 weeks), two Monday holidays
    let schedule = Schedule::new(
        Date::from_ymd(2024, 1, 8).unwrap(),
        Date::from_ymd(2024, 5, 17).unwrap(),
    )
    .with_excluded(Date::from_ymd(2024, 1, 15).unwrap())
    .with_excluded(Date::from_ymd(2024, 2, 19).unwrap())
    // Saturday exclusion changes nothing
    .with_excluded(Date::from_ymd(2024, 3, 16).unwrap());

    assert_eq!(count_duty_days(&schedule), 19 * 5 - 2);
}
