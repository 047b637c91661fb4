//! Schedule error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when schedule input is validated at the boundary.
///
/// The generators themselves never fail; these come from constructors such as
/// [`WeekdayIndex::new`](super::WeekdayIndex::new) and [`DateRange::validated`](super::DateRange::validated).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Weekday index outside 1 (Monday) ..= 7 (Sunday).
    #[error("Invalid weekday index {0}: expected 1 (Monday) to 7 (Sunday)")]
    InvalidWeekday(u8),

    /// Day of month outside 1..=31.
    #[error("Invalid day of month {0}: expected 1 to 31")]
    InvalidDayOfMonth(u32),

    /// Month outside 1..=12.
    #[error("Invalid month {0}: expected 1 to 12")]
    InvalidMonth(u32),

    /// Range start is after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Range covers more days than allowed.
    #[error("Date range spans {days} days, maximum is {max}")]
    RangeTooLong {
        /// Days covered by the requested range.
        days: i64,
        /// Configured maximum.
        max: u32,
    },
}
