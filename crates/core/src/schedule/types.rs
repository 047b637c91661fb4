//! Schedule value types.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::generator;

/// Weekday in the institution's numbering: 1 = Monday ..= 6 = Saturday, 7 = Sunday.
///
/// Calendar widgets count from 0 = Sunday; use [`WeekdayIndex::from_sunday_based`]
/// and [`WeekdayIndex::to_sunday_based`] at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    /// Monday.
    pub const MONDAY: Self = Self(1);
    /// Tuesday.
    pub const TUESDAY: Self = Self(2);
    /// Wednesday.
    pub const WEDNESDAY: Self = Self(3);
    /// Thursday.
    pub const THURSDAY: Self = Self(4);
    /// Friday.
    pub const FRIDAY: Self = Self(5);
    /// Saturday.
    pub const SATURDAY: Self = Self(6);
    /// Sunday.
    pub const SUNDAY: Self = Self(7);

    /// Creates a weekday index, rejecting anything outside 1..=7.
    pub fn new(index: u8) -> Result<Self, ScheduleError> {
        if (1..=7).contains(&index) {
            Ok(Self(index))
        } else {
            Err(ScheduleError::InvalidWeekday(index))
        }
    }

    /// Converts from the 0 = Sunday .. 6 = Saturday convention.
    pub fn from_sunday_based(index: u32) -> Result<Self, ScheduleError> {
        match u8::try_from(index) {
            Ok(0) => Ok(Self::SUNDAY),
            Ok(day @ 1..=6) => Ok(Self(day)),
            Ok(day) => Err(ScheduleError::InvalidWeekday(day)),
            // Saturated into the error's u8 payload
            Err(_) => Err(ScheduleError::InvalidWeekday(u8::MAX)),
        }
    }

    /// Converts to the 0 = Sunday .. 6 = Saturday convention.
    #[must_use]
    pub fn to_sunday_based(self) -> u32 {
        u32::from(self.0 % 7)
    }

    /// Returns the raw 1..=7 index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the matching `chrono` weekday.
    #[must_use]
    pub const fn to_weekday(self) -> Weekday {
        match self.0 {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Returns true if `date` falls on this weekday.
    #[must_use]
    pub fn matches(self, date: NaiveDate) -> bool {
        Self::from(chrono::Datelike::weekday(&date)) == self
    }
}

impl From<Weekday> for WeekdayIndex {
    fn from(weekday: Weekday) -> Self {
        // number_from_monday is already 1..=7 with Sunday last
        Self(u8::try_from(weekday.number_from_monday()).unwrap_or(7))
    }
}

impl From<WeekdayIndex> for Weekday {
    fn from(index: WeekdayIndex) -> Self {
        index.to_weekday()
    }
}

impl TryFrom<u8> for WeekdayIndex {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayIndex> for u8 {
    fn from(index: WeekdayIndex) -> Self {
        index.0
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_weekday())
    }
}

/// Day of the month a monthly lesson is anchored to (1..=31).
///
/// Days beyond a month's length are allowed; see [`generate_monthly`](super::generate_monthly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayOfMonth(u32);

impl DayOfMonth {
    /// Creates a day of month, rejecting anything outside 1..=31.
    pub fn new(day: u32) -> Result<Self, ScheduleError> {
        if (1..=31).contains(&day) {
            Ok(Self(day))
        } else {
            Err(ScheduleError::InvalidDayOfMonth(day))
        }
    }

    /// Returns the raw day number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for DayOfMonth {
    type Error = ScheduleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayOfMonth> for u32 {
    fn from(day: DayOfMonth) -> Self {
        day.0
    }
}

/// Inclusive calendar date range.
///
/// A range whose start is after its end is still a value; it simply contains no days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without checking its bounds.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range for boundary input, rejecting inverted or overlong ranges.
    pub fn validated(start: NaiveDate, end: NaiveDate, max_days: u32) -> Result<Self, ScheduleError> {
        let range = Self::new(start, end);
        if range.is_empty() {
            return Err(ScheduleError::InvalidRange { start, end });
        }

        let days = range.len_days();
        if days > i64::from(max_days) {
            return Err(ScheduleError::RangeTooLong {
                days,
                max: max_days,
            });
        }

        Ok(range)
    }

    /// Returns true if the range contains no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range, counting both ends.
    #[must_use]
    pub fn len_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Returns true if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every day in the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// How a lesson repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecurrenceRule {
    /// Once a week on one weekday.
    Weekly {
        /// Target weekday.
        weekday: WeekdayIndex,
    },
    /// Every week on each of several weekdays.
    WeeklyMultiple {
        /// Target weekdays.
        weekdays: BTreeSet<WeekdayIndex>,
    },
    /// Every other week on one weekday.
    Biweekly {
        /// Target weekday.
        weekday: WeekdayIndex,
    },
    /// Once a month on a fixed day.
    Monthly {
        /// Anchor day of month.
        day_of_month: DayOfMonth,
    },
}

impl RecurrenceRule {
    /// Expands the rule into its occurrence dates within `range`.
    #[must_use]
    pub fn occurrences(&self, range: &DateRange) -> Vec<NaiveDate> {
        match self {
            Self::Weekly { weekday } => generator::generate_weekly(range, *weekday),
            Self::WeeklyMultiple { weekdays } => {
                let weekdays: Vec<WeekdayIndex> = weekdays.iter().copied().collect();
                generator::generate_weekly_multiple(range, &weekdays)
            }
            Self::Biweekly { weekday } => generator::generate_biweekly(range, *weekday),
            Self::Monthly { day_of_month } => generator::generate_monthly(range, *day_of_month),
        }
    }
}
