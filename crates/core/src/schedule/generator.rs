//! Recurring lesson date generation.
//!
//! Every generator is a pure function of its inputs. An inverted range
//! (`start > end`) yields no dates instead of an error, and a single-day
//! range yields that day when it matches the rule.

use chrono::{Datelike, Days, NaiveDate};

use super::calendar::{next_month_rolled, rolled_date};
use super::types::{DateRange, DayOfMonth, WeekdayIndex};

/// First day in `range` that falls on `weekday`.
fn first_match(range: &DateRange, weekday: WeekdayIndex) -> Option<NaiveDate> {
    range.days().find(|day| weekday.matches(*day))
}

/// Dates from the first `weekday` in `range`, stepping `step_days` until past the end.
fn stepped_from_first_match(range: &DateRange, weekday: WeekdayIndex, step_days: u64) -> Vec<NaiveDate> {
    let Some(first) = first_match(range, weekday) else {
        return Vec::new();
    };

    let step = Days::new(step_days);
    std::iter::successors(Some(first), |current| current.checked_add_days(step))
        .take_while(|date| *date <= range.end)
        .collect()
}

/// Dates in `range` falling on `weekday`, one week apart.
///
/// Both endpoints are included when they fall on the weekday.
#[must_use]
pub fn generate_weekly(range: &DateRange, weekday: WeekdayIndex) -> Vec<NaiveDate> {
    stepped_from_first_match(range, weekday, 7)
}

/// Dates in `range` falling on any of `weekdays`, ascending.
///
/// The weekday list may be unordered or contain duplicates.
#[must_use]
pub fn generate_weekly_multiple(range: &DateRange, weekdays: &[WeekdayIndex]) -> Vec<NaiveDate> {
    range
        .days()
        .filter(|day| weekdays.contains(&WeekdayIndex::from(day.weekday())))
        .collect()
}

/// Dates in `range` falling on `weekday`, two weeks apart, starting from the first match.
#[must_use]
pub fn generate_biweekly(range: &DateRange, weekday: WeekdayIndex) -> Vec<NaiveDate> {
    stepped_from_first_match(range, weekday, 14)
}

/// Dates in `range` on `day_of_month`, one calendar month apart.
///
/// The anchor is `day_of_month` in the start month; when it precedes the start
/// it moves one month forward before the first date is taken.
///
/// A day the month doesn't have rolls into the next month (day 31 in April
/// gives 1 May), and the rolled day number carries on to later months: day 31
/// from January 2024 yields 31 Jan, 2 Mar, 2 Apr, ...
#[must_use]
pub fn generate_monthly(range: &DateRange, day_of_month: DayOfMonth) -> Vec<NaiveDate> {
    let Some(mut current) = rolled_date(range.start.year(), range.start.month(), day_of_month.get())
    else {
        return Vec::new();
    };

    if current < range.start {
        match next_month_rolled(current) {
            Some(next) => current = next,
            None => return Vec::new(),
        }
    }

    let mut dates = Vec::new();
    while current <= range.end {
        dates.push(current);
        match next_month_rolled(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}
