//! Splitting a monthly fee over the lessons it pays for.
//!
//! A split never loses or gains a cent: the parts always sum to the rounded
//! total. Each part is the total divided evenly and truncated to cents; the
//! leftover cents go one each to the earliest lessons.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use serde::Serialize;
use tutora_shared::types::money::MONEY_DECIMAL_PLACES;

use super::calculator::round_money;
use crate::schedule::{WeekdayIndex, count_weekday_occurrences_in_month};

/// One lesson's share of an apportioned fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LessonShare {
    /// Lesson date.
    pub date: NaiveDate,
    /// Amount attributed to the lesson.
    pub amount: Decimal,
}

/// Fee for a single lesson when `monthly_fee` covers every `weekday` of the month.
///
/// Returns zero when the month has no such weekday (or the month is invalid).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tutora_core::finance::per_lesson_fee;
/// use tutora_core::schedule::WeekdayIndex;
///
/// // Four Mondays in February 2024
/// assert_eq!(per_lesson_fee(dec!(1000), 2024, 2, WeekdayIndex::MONDAY), dec!(250));
/// ```
#[must_use]
pub fn per_lesson_fee(monthly_fee: Decimal, year: i32, month: u32, weekday: WeekdayIndex) -> Decimal {
    let lessons = count_weekday_occurrences_in_month(year, month, weekday);
    if lessons == 0 {
        return Decimal::ZERO;
    }
    round_money(monthly_fee / Decimal::from(lessons))
}

/// Splits `total` across `dates` so the shares sum exactly to the rounded total.
///
/// Negative totals (refunds) split the same way with the sign carried through.
#[must_use]
pub fn apportion_fee(total: Decimal, dates: &[NaiveDate]) -> Vec<LessonShare> {
    if dates.is_empty() {
        return vec![];
    }

    let total_rounded = round_money(total);
    let negative = total_rounded.is_sign_negative();
    let magnitude = total_rounded.abs();

    let count = Decimal::from(dates.len() as u64);
    let unit = Decimal::new(1, MONEY_DECIMAL_PLACES);

    let base = (magnitude / count).round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::ToZero);
    let remainder = magnitude - base * count;

    let extra_count = (remainder / unit)
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);

    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let share = if i < extra_count { base + unit } else { base };
            LessonShare {
                date: *date,
                amount: if negative { -share } else { share },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sum(shares: &[LessonShare]) -> Decimal {
        shares.iter().map(|s| s.amount).sum()
    }

    #[test]
    fn test_per_lesson_fee_even() {
        assert_eq!(per_lesson_fee(dec!(1000), 2024, 2, WeekdayIndex::MONDAY), dec!(250));
    }

    #[test]
    fn test_per_lesson_fee_rounds() {
        // Five Mondays in January 2024
        assert_eq!(per_lesson_fee(dec!(1000), 2024, 1, WeekdayIndex::MONDAY), dec!(200));
        // Five Thursdays in February 2024: 999.99 / 5 = 199.998
        assert_eq!(per_lesson_fee(dec!(999.99), 2024, 2, WeekdayIndex::THURSDAY), dec!(200.00));
    }

    #[test]
    fn test_per_lesson_fee_invalid_month_is_zero() {
        assert_eq!(per_lesson_fee(dec!(1000), 2024, 13, WeekdayIndex::MONDAY), Decimal::ZERO);
    }

    #[test]
    fn test_apportion_empty() {
        assert!(apportion_fee(dec!(100), &[]).is_empty());
    }

    #[test]
    fn test_apportion_thirds_extra_cent_goes_first() {
        let dates = [date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)];
        let shares = apportion_fee(dec!(100), &dates);
        assert_eq!(shares[0].amount, dec!(33.34));
        assert_eq!(shares[1].amount, dec!(33.33));
        assert_eq!(shares[2].amount, dec!(33.33));
        assert_eq!(sum(&shares), dec!(100));
        assert_eq!(shares[1].date, date(2024, 1, 8));
    }

    #[test]
    fn test_apportion_negative_total() {
        let dates = [date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)];
        let shares = apportion_fee(dec!(-100), &dates);
        assert_eq!(shares[0].amount, dec!(-33.34));
        assert_eq!(shares[2].amount, dec!(-33.33));
        assert_eq!(sum(&shares), dec!(-100));
    }

    #[test]
    fn test_apportion_sum_invariant() {
        let dates: Vec<NaiveDate> = (1..=7).map(|d| date(2024, 3, d)).collect();
        for total in [dec!(100), dec!(999.99), dec!(0.01), dec!(1), dec!(1234.565)] {
            for n in 1..=dates.len() {
                let shares = apportion_fee(total, &dates[..n]);
                assert_eq!(
                    sum(&shares),
                    round_money(total),
                    "Sum invariant failed for total={total}, count={n}"
                );
            }
        }
    }
}
