//! Property-based tests for recurring date generation.

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use super::generator::{generate_biweekly, generate_monthly, generate_weekly, generate_weekly_multiple};
use super::types::{DateRange, DayOfMonth, WeekdayIndex};

/// Strategy to generate a date between 2020-01-01 and roughly 2030.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .and_then(|base| base.checked_add_days(Days::new(offset)))
            .unwrap()
    })
}

/// Strategy to generate a forward range up to a school year long.
fn any_range() -> impl Strategy<Value = DateRange> {
    (any_date(), 0u64..400).prop_map(|(start, len)| {
        DateRange::new(start, start.checked_add_days(Days::new(len)).unwrap())
    })
}

fn any_weekday() -> impl Strategy<Value = WeekdayIndex> {
    (1u8..=7).prop_map(|i| WeekdayIndex::new(i).unwrap())
}

fn any_day_of_month() -> impl Strategy<Value = DayOfMonth> {
    (1u32..=31).prop_map(|d| DayOfMonth::new(d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Weekly dates match the weekday, stay in range and are 7 days apart.
    #[test]
    fn prop_weekly_shape(range in any_range(), weekday in any_weekday()) {
        let dates = generate_weekly(&range, weekday);
        for date in &dates {
            prop_assert!(weekday.matches(*date));
            prop_assert!(range.contains(*date));
        }
        for pair in dates.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
        // A range of at least a week always contains the weekday
        if range.len_days() >= 7 {
            prop_assert!(!dates.is_empty());
            prop_assert!((dates[0] - range.start).num_days() < 7);
        }
    }

    /// Biweekly dates match the weekday and are 14 days apart.
    #[test]
    fn prop_biweekly_shape(range in any_range(), weekday in any_weekday()) {
        let dates = generate_biweekly(&range, weekday);
        for date in &dates {
            prop_assert!(weekday.matches(*date));
            prop_assert!(range.contains(*date));
        }
        for pair in dates.windows(2) {
            prop_assert_eq!((pair[1] - pair[0]).num_days(), 14);
        }
    }

    /// Multi-weekday output is strictly increasing and equals the union of weekly runs.
    #[test]
    fn prop_weekly_multiple_is_sorted_union(
        range in any_range(),
        weekdays in prop::collection::vec(any_weekday(), 1..7),
    ) {
        let dates = generate_weekly_multiple(&range, &weekdays);
        for pair in dates.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        let mut union: Vec<NaiveDate> = weekdays
            .iter()
            .flat_map(|w| generate_weekly(&range, *w))
            .collect();
        union.sort();
        union.dedup();
        prop_assert_eq!(dates, union);
    }

    /// Monthly dates stay in range, one per step, and hit the anchor day whenever every month has it.
    #[test]
    fn prop_monthly_shape(range in any_range(), day in any_day_of_month()) {
        let dates = generate_monthly(&range, day);
        for date in &dates {
            prop_assert!(range.contains(*date));
        }
        for pair in dates.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        if day.get() <= 28 {
            for date in &dates {
                prop_assert_eq!(date.day(), day.get());
            }
        }
    }

    /// Inverted ranges yield nothing from any generator.
    #[test]
    fn prop_inverted_range_is_empty(
        start in any_date(),
        back in 1u64..400,
        weekday in any_weekday(),
        day in any_day_of_month(),
    ) {
        let range = DateRange::new(start, start.checked_sub_days(Days::new(back)).unwrap());
        prop_assert!(generate_weekly(&range, weekday).is_empty());
        prop_assert!(generate_biweekly(&range, weekday).is_empty());
        prop_assert!(generate_weekly_multiple(&range, &[weekday]).is_empty());
        prop_assert!(generate_monthly(&range, day).is_empty());
    }

    /// Same input, same output.
    #[test]
    fn prop_generators_are_deterministic(range in any_range(), weekday in any_weekday(), day in any_day_of_month()) {
        prop_assert_eq!(generate_weekly(&range, weekday), generate_weekly(&range, weekday));
        prop_assert_eq!(generate_biweekly(&range, weekday), generate_biweekly(&range, weekday));
        prop_assert_eq!(generate_monthly(&range, day), generate_monthly(&range, day));
    }
}
