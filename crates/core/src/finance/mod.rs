//! Payment math: VAT, card commission, net settlement, fee apportionment
//! and instructor payouts.

pub mod apportion;
pub mod calculator;
pub mod error;
pub mod instructor;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use apportion::{LessonShare, apportion_fee, per_lesson_fee};
pub use calculator::{FeeCalculator, percent_of, round_money};
pub use error::{FinanceError, FinanceResult};
pub use instructor::{InstructorPayout, LessonRecord, PayRule, calculate_instructor_pay};
pub use types::{CommissionBreakdown, MoneyBreakdown, PaymentRates, VatBreakdown};
