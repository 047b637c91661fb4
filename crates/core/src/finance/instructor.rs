//! Instructor payment calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::{percent_of, round_money};
use super::error::{FinanceError, FinanceResult};

/// How an instructor is paid for their lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayRule {
    /// Fixed amount per lesson held.
    PerLesson {
        /// Amount per lesson.
        rate: Decimal,
    },
    /// Fixed amount per attending student.
    PerAttendee {
        /// Amount per attendee.
        rate: Decimal,
    },
    /// Share of the revenue collected for the lessons held.
    RevenueShare {
        /// Share in percent.
        percent: Decimal,
    },
}

/// Attendance and revenue of one scheduled lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Lesson date.
    pub date: NaiveDate,
    /// Whether the lesson took place. Cancelled lessons are not paid.
    pub held: bool,
    /// Students who attended.
    #[serde(default)]
    pub attendees: u32,
    /// Revenue attributed to the lesson.
    #[serde(default)]
    pub revenue: Decimal,
}

/// What an instructor is owed for a set of lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstructorPayout {
    /// Lessons that took place.
    pub lessons_taught: u32,
    /// Attendance summed over lessons taught.
    pub total_attendees: u32,
    /// Revenue summed over lessons taught.
    pub gross_revenue: Decimal,
    /// Amount owed, rounded to cents.
    pub amount: Decimal,
}

/// Computes the payout for `lessons` under `rule`.
///
/// Only lessons marked as held count toward any figure.
pub fn calculate_instructor_pay(
    lessons: &[LessonRecord],
    rule: PayRule,
) -> FinanceResult<InstructorPayout> {
    let mut taught = lessons.iter().filter(|lesson| lesson.held);

    let (lessons_taught, total_attendees, gross_revenue) = taught.try_fold(
        (0u32, 0u32, Decimal::ZERO),
        |(count, attendees, revenue), lesson| {
            let revenue = revenue
                .checked_add(lesson.revenue)
                .ok_or(FinanceError::Overflow("gross revenue"))?;
            Ok::<_, FinanceError>((
                count.saturating_add(1),
                attendees.saturating_add(lesson.attendees),
                revenue,
            ))
        },
    )?;

    let amount = match rule {
        PayRule::PerLesson { rate } => rate
            .checked_mul(Decimal::from(lessons_taught))
            .ok_or(FinanceError::Overflow("per-lesson pay"))?,
        PayRule::PerAttendee { rate } => rate
            .checked_mul(Decimal::from(total_attendees))
            .ok_or(FinanceError::Overflow("per-attendee pay"))?,
        PayRule::RevenueShare { percent } => percent_of(gross_revenue, percent)?,
    };

    Ok(InstructorPayout {
        lessons_taught,
        total_attendees,
        gross_revenue: round_money(gross_revenue),
        amount: round_money(amount),
    })
}
