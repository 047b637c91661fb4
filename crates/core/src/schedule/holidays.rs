//! National holidays.
//!
//! Only fixed-date statutory holidays are known here. Ramazan Bayramı and
//! Kurban Bayramı follow the lunar calendar and must be entered by hand; pass
//! them as extra dates to [`exclude_holidays`].

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Fixed-date national holidays as (month, day, name).
pub const NATIONAL_HOLIDAYS: [(u32, u32, &str); 7] = [
    (1, 1, "New Year's Day"),
    (4, 23, "National Sovereignty and Children's Day"),
    (5, 1, "Labour and Solidarity Day"),
    (5, 19, "Commemoration of Atatürk, Youth and Sports Day"),
    (7, 15, "Democracy and National Unity Day"),
    (8, 30, "Victory Day"),
    (10, 29, "Republic Day"),
];

/// A named holiday on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Calendar date.
    pub date: NaiveDate,
    /// Holiday name.
    pub name: &'static str,
}

/// National holidays of `year` with their names, in date order.
#[must_use]
pub fn national_holidays(year: i32) -> Vec<Holiday> {
    NATIONAL_HOLIDAYS
        .iter()
        .filter_map(|(month, day, name)| {
            NaiveDate::from_ymd_opt(year, *month, *day).map(|date| Holiday { date, name: *name })
        })
        .collect()
}

/// Dates of the fixed-date national holidays of `year`.
#[must_use]
pub fn list_national_holidays(year: i32) -> BTreeSet<NaiveDate> {
    national_holidays(year)
        .into_iter()
        .map(|holiday| holiday.date)
        .collect()
}

/// Name of the national holiday on `date`, if any.
#[must_use]
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    NATIONAL_HOLIDAYS
        .iter()
        .find(|(month, day, _)| date.month() == *month && date.day() == *day)
        .map(|(_, _, name)| *name)
}

/// Drops dates that fall on a national holiday or on one of `extra`.
///
/// Order of the remaining dates is preserved.
#[must_use]
pub fn exclude_holidays(dates: Vec<NaiveDate>, extra: &BTreeSet<NaiveDate>) -> Vec<NaiveDate> {
    dates
        .into_iter()
        .filter(|date| holiday_name(*date).is_none() && !extra.contains(date))
        .collect()
}
