//! Recurring lesson schedules.
//!
//! Expands a recurrence rule over a date range into concrete occurrence
//! dates, plus the calendar facts used around it (weekday counts per month,
//! fixed-date national holidays).

pub mod calendar;
pub mod error;
pub mod generator;
pub mod holidays;
pub mod types;

#[cfg(test)]
mod generator_props;

pub use calendar::{count_weekday_occurrences_in_month, days_in_month};
pub use error::ScheduleError;
pub use generator::{generate_biweekly, generate_monthly, generate_weekly, generate_weekly_multiple};
pub use holidays::{Holiday, exclude_holidays, holiday_name, list_national_holidays, national_holidays};
pub use types::{DateRange, DayOfMonth, RecurrenceRule, WeekdayIndex};
