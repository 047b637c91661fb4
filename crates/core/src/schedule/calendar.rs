//! Calendar arithmetic helpers.

use chrono::{Datelike, Days, NaiveDate};

use super::types::WeekdayIndex;

/// Builds a date from year, month and day, letting overflow roll forward.
///
/// `month` may exceed 12 and `day` may exceed the month's length: 2024-02-31
/// becomes 2024-03-02, month 13 of 2024 is January 2025. Returns `None` only
/// outside chrono's representable range or for day 0.
#[must_use]
pub fn rolled_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if month == 0 || day == 0 {
        return None;
    }

    let months_since_epoch = i64::from(year) * 12 + i64::from(month - 1);
    let year = i32::try_from(months_since_epoch.div_euclid(12)).ok()?;
    let month = u32::try_from(months_since_epoch.rem_euclid(12)).ok()? + 1;

    NaiveDate::from_ymd_opt(year, month, 1)?.checked_add_days(Days::new(u64::from(day - 1)))
}

/// Moves `date` to the same day number in the following month, rolling over
/// when that month is shorter.
#[must_use]
pub fn next_month_rolled(date: NaiveDate) -> Option<NaiveDate> {
    rolled_date(date.year(), date.month() + 1, date.day())
}

/// Number of days in a month, or 0 for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month)
        .fold(0, |count, _| count + 1)
}

/// Counts how often `weekday` occurs in the given month (1-based).
///
/// Used to split a monthly fee over the lessons of that month. An invalid
/// month counts zero occurrences.
#[must_use]
pub fn count_weekday_occurrences_in_month(year: i32, month: u32, weekday: WeekdayIndex) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    first
        .iter_days()
        .take_while(|day| day.month() == month)
        .filter(|day| weekday.matches(*day))
        .fold(0, |count, _| count + 1)
}
